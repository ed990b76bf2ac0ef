use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,

    pub port: u16,

    pub user: String,

    pub password: String,

    pub name: String,

    pub sslmode: String,

    /// Full connection URL. When set, the individual connection fields are ignored.
    /// Accepts `postgres://` and `sqlite:` URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Maximum database connections (default: 5)
    pub max_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: 5432,
            user: "user".to_string(),
            password: "password".to_string(),
            name: "seriesdb".to_string(),
            sslmode: "disable".to_string(),
            url: None,
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name,
            self.sslmode
        )
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = var("DB_HOST") {
            self.host = host;
        }
        if let Some(port) = var("DB_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("Invalid DB_PORT: {port}"))?;
        }
        if let Some(user) = var("DB_USER") {
            self.user = user;
        }
        if let Some(password) = var("DB_PASSWORD") {
            self.password = password;
        }
        if let Some(name) = var("DB_NAME") {
            self.name = name;
        }
        if let Some(url) = var("DATABASE_URL") {
            self.url = Some(url);
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::load_file()?;
        config
            .database
            .apply_env_overrides(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))?;

        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("series-tracker").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".series-tracker").join("config.toml"));
        }

        paths
    }

    pub fn validate(&self) -> Result<()> {
        let db = &self.database;

        if db.url.is_none() {
            if db.host.is_empty() {
                anyhow::bail!("Database host cannot be empty");
            }
            if db.user.is_empty() {
                anyhow::bail!("Database user cannot be empty");
            }
            if db.name.is_empty() {
                anyhow::bail!("Database name cannot be empty");
            }
        }

        if db.max_connections == 0 {
            anyhow::bail!("database.max_connections must be > 0");
        }

        Ok(())
    }
}
