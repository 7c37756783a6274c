use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Initialize tracing
///
/// Output goes to:
/// - stdout (colored)
/// - logs/backend.log next to the executable (no ANSI)
pub fn initialize() -> anyhow::Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e))?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter_directive(
            std::env::var("RUST_LOG").ok(),
        )))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!("Logging to {}", log_file_path.display());
    Ok(log_file_path)
}

fn log_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("logs")))
        .unwrap_or_else(|| Path::new("target").join("logs"))
}

/// `RUST_LOG` wins when set and non-empty
fn filter_directive(env_value: Option<String>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(None), DEFAULT_FILTER);
        assert_eq!(filter_directive(Some("  ".into())), DEFAULT_FILTER);
        assert_eq!(filter_directive(Some("debug".into())), "debug");
    }
}
