use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing::Level;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV: &str = "PICKR_LOG";

pub fn default_log_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pickr").join("pickr.log")
}

/// Resolve the log level: explicit flag, then `PICKR_LOG`, then info.
pub fn resolve_level(flag: Option<Level>, env_value: Option<&str>) -> Level {
    flag.or_else(|| env_value.and_then(|value| value.trim().parse().ok()))
        .unwrap_or(Level::INFO)
}

/// Route tracing output to a file; the terminal belongs to the UI.
pub fn init(level: Level) -> Result<()> {
    let path = default_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        assert_eq!(resolve_level(Some(Level::DEBUG), Some("error")), Level::DEBUG);
    }

    #[test]
    fn env_used_when_no_flag() {
        assert_eq!(resolve_level(None, Some("warn")), Level::WARN);
        assert_eq!(resolve_level(None, Some(" TRACE ")), Level::TRACE);
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(resolve_level(None, None), Level::INFO);
        assert_eq!(resolve_level(None, Some("chatty")), Level::INFO);
    }

    #[test]
    fn log_file_lives_under_app_dir() {
        let path = default_log_path();
        assert!(path.ends_with("pickr/pickr.log"));
    }
}
