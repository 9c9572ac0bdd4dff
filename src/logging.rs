//! Logger initialisation
//!
//! CLI commands log to stderr. The TUI owns the terminal, so while it runs
//! log output goes to `salesdash.log` in the config directory instead.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::DashboardPaths;
use crate::error::DashboardResult;

/// Environment variable holding the log filter (e.g. `debug`, `salesdash=trace`)
pub const LOG_ENV: &str = "SALESDASH_LOG";

/// Filter used when `SALESDASH_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Where log records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER));
    builder.format_timestamp_secs();
    builder
}

/// Install the global logger. Calling it again is a no-op.
pub fn init(paths: &DashboardPaths, target: LogTarget) -> DashboardResult<()> {
    let mut builder = builder();

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    // Already installed (e.g. by an earlier call in tests)
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_target_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        init(&paths, LogTarget::File).unwrap();
        assert!(paths.log_file().exists());

        // A second init must not fail
        init(&paths, LogTarget::Stderr).unwrap();
    }
}
