use crate::error::{Error, Result};
use crate::services::grading_service::GradingThresholds;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// When unset, remote generation is disabled and every request is served locally.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub remote_timeout_secs: u64,
    pub duplicate_similarity_threshold: f64,
    pub grading_thresholds: GradingThresholds,
    pub max_items_per_type: u32,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.70;

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:8080".to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            remote_timeout_secs: 60,
            duplicate_similarity_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            grading_thresholds: GradingThresholds::default(),
            max_items_per_type: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = GradingThresholds::default();
        let grading_thresholds = GradingThresholds {
            full: get_env_parse_or("SAQ_FULL_THRESHOLD", defaults.full)?,
            partial: get_env_parse_or("SAQ_PARTIAL_THRESHOLD", defaults.partial)?,
            minimal: get_env_parse_or("SAQ_MINIMAL_THRESHOLD", defaults.minimal)?,
        };
        if !(grading_thresholds.minimal <= grading_thresholds.partial
            && grading_thresholds.partial <= grading_thresholds.full)
        {
            return Err(Error::Config(
                "SAQ thresholds must satisfy minimal <= partial <= full".to_string(),
            ));
        }

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            remote_timeout_secs: get_env_parse_or("REMOTE_TIMEOUT_SECS", 60)?,
            duplicate_similarity_threshold: get_env_parse_or(
                "DUPLICATE_SIMILARITY_THRESHOLD",
                DEFAULT_DUPLICATE_THRESHOLD,
            )?,
            grading_thresholds,
            max_items_per_type: get_env_parse_or("MAX_ITEMS_PER_TYPE", 50)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
