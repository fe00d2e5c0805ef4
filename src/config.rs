use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::{env, process};
use tracing::error;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub address: String,
    pub port: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DbConfig {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub production: bool,
    pub http: HttpConfig,
    pub db: DbConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_token_ttl_days() -> i64 {
    7
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().collect();
        if args.len() < 2 {
            error!("❌ Error: Configuration path not provided. Usage: cargo run -- <config_path>");
            process::exit(1);
        }
        let config_path = &args[1];

        let config = Config::builder()
            .add_source(File::with_name(config_path))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_cookie_and_ttl() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                r#"
                production = true

                [http]
                address = "127.0.0.1"
                port = "5000"

                [db]
                url = "postgres://localhost/jobboard"

                [auth]
                jwt_secret = "secret"

                [cors]
                origins = ["http://localhost:5173"]
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.production);
        assert_eq!(config.auth.cookie_name, "token");
        assert_eq!(config.auth.token_ttl_days, 7);
    }
}
