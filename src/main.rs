use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use checkers_solver::board::load_board;
use checkers_solver::config::{ConfigError, SolverConfig};
use checkers_solver::logging::{self, LOG_ENV};
use checkers_solver::Driver;

fn main() -> ExitCode {
    let env_level = env::var(LOG_ENV).ok();
    let config = match SolverConfig::from_args(env::args().skip(1), env_level.as_deref()) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", ConfigError::HelpRequested);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", checkers_solver::config::USAGE);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = logging::init(config.log_level) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SolverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let board = load_board(&config.input)?;
    log::info!(
        "loaded {} (depth {}, cache scope {:?})",
        config.input.display(),
        config.depth,
        config.cache_scope
    );

    let mut driver = Driver::new(config.search_params()).with_max_plies(config.max_plies);
    let summary = match &config.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            let summary = driver.play_out(board, &mut out)?;
            out.flush()?;
            summary
        }
        None => {
            let mut out = io::stdout().lock();
            driver.play_out(board, &mut out)?
        }
    };

    log::info!(
        "game over after {} plies, {} to move ({:?})",
        summary.plies,
        summary.side_to_move,
        summary.end
    );
    Ok(())
}
