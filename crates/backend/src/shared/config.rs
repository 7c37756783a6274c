use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend, served as fallback
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: "dist".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub access_token_hours: i64,
    pub refresh_token_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_hours: 24,
            refresh_token_days: 90,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/hotel.db"

[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[auth]
access_token_hours = 24
refresh_token_days = 90
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.access_token_hours <= 0 || config.auth.refresh_token_days <= 0 {
        anyhow::bail!("auth token lifetimes must be positive");
    }
    Ok(config)
}

/// Make the loaded configuration available to the rest of the backend
pub fn install(config: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration is already installed"))?;
    Ok(current())
}

/// Installed configuration, or the embedded default before startup finished
pub fn current() -> &'static Config {
    CONFIG.get_or_init(|| Config {
        database: DatabaseConfig {
            path: "target/db/hotel.db".into(),
        },
        server: ServerConfig::default(),
        auth: AuthConfig::default(),
    })
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(&config.database.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/hotel.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.auth.access_token_hours, 24);
        assert_eq!(config.auth.refresh_token_days, 90);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[database]\npath = \"/var/lib/hotel.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.refresh_token_days, 90);
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/var/lib/hotel.db")
        );
    }

    #[test]
    fn test_partial_section() {
        let config = parse_config(
            "[database]\npath = \"db.sqlite\"\n[server]\nport = 8080\n[auth]\naccess_token_hours = 1\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.auth.access_token_hours, 1);
    }

    #[test]
    fn test_invalid_lifetimes_are_rejected() {
        assert!(parse_config("[database]\npath = \"x\"\n[auth]\naccess_token_hours = 0\n").is_err());
        assert!(parse_config("not toml").is_err());
    }
}
