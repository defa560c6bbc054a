use crate::config::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiConfig};
use anyhow::{Context, Result, anyhow};
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONN: u32 = 5;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_conn: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub static_dir: String,
    pub gemini: GeminiConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let api_key =
            lookup("GEMINI_API_KEY").context("Missing environment variable: GEMINI_API_KEY")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let db_max_conn = match lookup("DB_MAX_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => DEFAULT_DB_MAX_CONN,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a valid byte count")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        // gemini
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let base_url =
            lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(
                value
                    .parse::<u64>()
                    .context("GEMINI_TIMEOUT_SECS must be a valid number of seconds")?,
            )),
            None => None,
        };

        Ok(Self {
            database_url,
            db_max_conn,
            run_migrations,
            port,
            max_upload_bytes,
            static_dir,
            gemini: GeminiConfig {
                api_key,
                model,
                base_url,
                timeout,
            },
        })
    }
}
