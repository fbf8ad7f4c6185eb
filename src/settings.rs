//! Environment-derived runtime settings.

use sqlx::postgres::PgConnectOptions;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub config_path: PathBuf,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub listen_port: u16,
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            config_path: PathBuf::from(var_or("ACL_CONFIG_PATH", "/config/config.yaml")),
            db_host: var_or("DB_HOST", "postgres"),
            db_port: var_or("DB_PORT", "5432").parse().unwrap_or(5432),
            db_name: var_or("DB_NAME", "appdb"),
            db_user: var_or("DB_USER", "appuser"),
            db_password: var_or("DB_PASSWORD", "apppassword"),
            listen_port: var_or("PORT", "3000").parse().unwrap_or(3000),
        }
    }

    pub fn pg_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }
}
