//! Log output for the binaries, via `env_logger` on stderr.

use env_logger::{Builder, Target};
use log::{LevelFilter, SetLoggerError};

/// Environment variable consulted for the default log level.
pub const LOG_ENV: &str = "CHECKERS_LOG";

/// Install the global logger.
///
/// Module directives in `CHECKERS_LOG` (e.g. `checkers_solver::board=trace`)
/// are honoured; the global level is `level`, which the caller has already
/// resolved from `CHECKERS_LOG` and `-v` flags. Fails if a logger is
/// already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    Builder::new()
        .parse_env(LOG_ENV)
        .filter_level(level)
        .target(Target::Stderr)
        .try_init()
}
