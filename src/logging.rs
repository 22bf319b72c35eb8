use crate::config::{default_log_path, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go. The terminal canvas owns the screen, so it logs to a
/// file; one-shot commands log to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn log_file_path(config: &LoggingConfig) -> Option<PathBuf> {
    config.file.clone().or_else(default_log_path)
}

pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<()> {
    let filter = env_filter(config);

    match (target, log_file_path(config)) {
        (LogTarget::File, Some(path)) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        // No writable location for a log file: stay quiet rather than draw
        // over the terminal UI.
        (LogTarget::File, None) => {}
        (LogTarget::Stderr, _) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_prefers_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/custom.log")),
        };
        assert_eq!(log_file_path(&config), Some(PathBuf::from("/tmp/custom.log")));
    }

    #[test]
    fn test_log_file_path_default_name() {
        if let Some(path) = log_file_path(&LoggingConfig::default()) {
            assert!(path.ends_with("thoughtspace/thoughtspace.log"));
        }
    }
}
