//! Solver configuration and command-line parsing.

use std::fmt;
use std::path::PathBuf;

use log::LevelFilter;

use crate::board::{CacheScope, SearchParams, DEFAULT_DEPTH};

pub const USAGE: &str = "\
usage: checkers_solver --inputfile <path> [--outputfile <path>] [--depth <n>]
                       [--cache-scope run|move] [--max-plies <n>] [-v|-vv]";

/// Error type for command-line parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag that takes a value was last on the line
    MissingValue { flag: String },
    /// `--depth` is not an integer
    InvalidDepth { value: String },
    /// `--max-plies` is not a non-negative integer
    InvalidPlyLimit { value: String },
    /// `--cache-scope` is neither `run` nor `move`
    InvalidCacheScope { value: String },
    /// Unrecognised argument
    UnknownFlag { flag: String },
    /// `--inputfile` was not given
    MissingInput,
    /// `--help` was given
    HelpRequested,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { flag } => write!(f, "Flag {flag} needs a value"),
            ConfigError::InvalidDepth { value } => {
                write!(f, "Invalid depth '{value}', expected an integer")
            }
            ConfigError::InvalidPlyLimit { value } => {
                write!(f, "Invalid ply limit '{value}', expected a non-negative integer")
            }
            ConfigError::InvalidCacheScope { value } => {
                write!(f, "Invalid cache scope '{value}', expected 'run' or 'move'")
            }
            ConfigError::UnknownFlag { flag } => write!(f, "Unknown argument '{flag}'"),
            ConfigError::MissingInput => write!(f, "Missing required --inputfile"),
            ConfigError::HelpRequested => write!(f, "{USAGE}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the binary needs to run one game.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    pub input: PathBuf,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub depth: i32,
    pub cache_scope: CacheScope,
    pub max_plies: Option<u32>,
    pub log_level: LevelFilter,
}

impl SolverConfig {
    /// Parse arguments, not including the program name.
    ///
    /// The log level starts from `env_level` (usually `CHECKERS_LOG`, default
    /// `warn`). Each `-v` raises it one step; `-vv` turns on everything.
    pub fn from_args<I, S>(args: I, env_level: Option<&str>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = None;
        let mut output = None;
        let mut depth = DEFAULT_DEPTH;
        let mut cache_scope = CacheScope::Run;
        let mut max_plies = None;
        let mut log_level = env_level
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn);

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            let mut value_for = |flag: &str| {
                args.next().ok_or_else(|| ConfigError::MissingValue {
                    flag: flag.to_string(),
                })
            };
            match arg.as_str() {
                "--inputfile" => input = Some(PathBuf::from(value_for(arg.as_str())?)),
                "--outputfile" => output = Some(PathBuf::from(value_for(arg.as_str())?)),
                "--depth" => {
                    let value = value_for(arg.as_str())?;
                    depth = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidDepth { value })?;
                }
                "--cache-scope" => {
                    let value = value_for(arg.as_str())?;
                    cache_scope = parse_cache_scope(&value)?;
                }
                "--max-plies" => {
                    let value = value_for(arg.as_str())?;
                    max_plies = Some(
                        value
                            .parse()
                            .map_err(|_| ConfigError::InvalidPlyLimit { value })?,
                    );
                }
                "-v" => log_level = raise(log_level),
                "-vv" => log_level = LevelFilter::Trace,
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                _ => return Err(ConfigError::UnknownFlag { flag: arg.clone() }),
            }
        }

        Ok(SolverConfig {
            input: input.ok_or(ConfigError::MissingInput)?,
            output,
            depth,
            cache_scope,
            max_plies,
            log_level,
        })
    }

    #[must_use]
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth,
            cache_scope: self.cache_scope,
        }
    }
}

fn parse_cache_scope(value: &str) -> Result<CacheScope, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "run" => Ok(CacheScope::Run),
        "move" => Ok(CacheScope::Move),
        _ => Err(ConfigError::InvalidCacheScope {
            value: value.to_string(),
        }),
    }
}

/// One level more verbose, saturating at `Trace`.
fn raise(level: LevelFilter) -> LevelFilter {
    const ORDER: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let idx = ORDER.iter().position(|&l| l == level).unwrap_or(0);
    ORDER[(idx + 1).min(ORDER.len() - 1)]
}
