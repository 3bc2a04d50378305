use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(file_config) = load_from_file()? {
            return Ok(Self {
                host: file_config.server.host,
                port: file_config.server.port,
            });
        }

        Ok(Self::from_env())
    }

    fn from_env() -> Self {
        let host = env::var("REDLINE_SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = env::var("REDLINE_SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or_else(default_port);

        Self { host, port }
    }
}

fn load_from_file() -> anyhow::Result<Option<FileConfig>> {
    let config_path = env::var("REDLINE_SERVER_CONFIG").ok();
    let path = if let Some(path) = config_path {
        Some(path)
    } else if Path::new("server.toml").exists() {
        Some("server.toml".to_string())
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;
    Ok(Some(parsed))
}
