pub use crate::utils::database;
use crate::modules::return_reason::service::{PgReturnReasonService, ReturnReasonService};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn from_env() -> Self {
        Self::from(env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    /// Production logs are emitted as JSON lines for the log shipper.
    pub fn uses_json_logs(&self) -> bool {
        *self == Self::Production
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub return_reason_service: Arc<dyn ReturnReasonService>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("{0} not set")]
    MissingVariable(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidVariable { name: &'static str, value: String },
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, StartupError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|_| StartupError::InvalidVariable { name, value })
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| StartupError::MissingVariable("DATABASE_URL"))?;
        let max_connections = parse_var::<u32>("DATABASE_MAX_CONNECTIONS", "4")?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var::<u16>("PORT", "8000")?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig {
                host,
                port,
                url,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let db_conn = database::connect(&self.database).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            return_reason_service: Arc::new(PgReturnReasonService::new(db_conn.pool)),
        })
    }
}
