use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/products.db"

[server]
port = 8080
"#;

impl Config {
    /// Загрузка config.toml рядом с исполняемым файлом (для production);
    /// при отсутствии файла — встроенный конфиг по умолчанию.
    pub fn load() -> anyhow::Result<Config> {
        if let Some(config_path) = exe_dir().map(|dir| dir.join("config.toml")) {
            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok(toml::from_str(&contents)?);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }

        tracing::info!("Using default embedded configuration");
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    /// Путь к файлу БД: относительные пути разрешаются от каталога
    /// исполняемого файла.
    pub fn database_path(&self) -> PathBuf {
        let db_path = PathBuf::from(&self.database.path);
        if db_path.is_absolute() {
            return db_path;
        }
        match exe_dir() {
            Some(exe_dir) => exe_dir.join(db_path),
            None => db_path,
        }
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()))
}
