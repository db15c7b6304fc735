use anyhow::{Context, Result};

/// Dataset read when DATASET_PATH is not set.
pub const DEFAULT_DATASET_PATH: &str = "philjobnet_jobs_dataset.csv";

/// Application configuration loaded from environment variables.
/// The API credential is configuration, never source: startup fails without
/// GROQ_API_KEY.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub dataset_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            dataset_path: std::env::var("DATASET_PATH")
                .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
