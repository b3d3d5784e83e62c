//! Configuration for Products API

use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Default frontend origin allowed by CORS
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub jwt: JwtConfig,
    pub environment: Environment,
    /// Single origin admitted by CORS
    pub cors_origin: String,
    /// Put product POST/PUT/DELETE behind the bearer guard
    pub require_auth_for_writes: bool,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            environment: Environment::from_env(),
            cors_origin: env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGIN),
            require_auth_for_writes: env_parse("REQUIRE_AUTH_FOR_WRITES", "false")?,
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
        })
    }
}
