use std::net::IpAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://zahavi_database.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = env_or("DATABASE_URL", DEFAULT_DATABASE_URL);

        let host: IpAddr = env_or("ZAHAVI_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ZAHAVI_HOST: {e}"))?;

        let port: u16 = env_or("ZAHAVI_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid ZAHAVI_PORT: {e}"))?;

        let max_connections: u32 = env_or("ZAHAVI_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| format!("Invalid ZAHAVI_MAX_CONNECTIONS: {e}"))?;
        if max_connections == 0 {
            return Err("Invalid ZAHAVI_MAX_CONNECTIONS: must be at least 1".to_string());
        }

        let log_level = env_or("ZAHAVI_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
            log_level,
        })
    }
}
