use crate::error::AppError;
use crate::roster::ranking::Weight;
use std::env;

const DEFAULT_API_URL: &str = "http://127.0.0.1:4280";
const DEFAULT_REQUESTS_PER_SECOND: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub weight: Weight,
    pub requests_per_second: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("ROSTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let weight = match env::var("ROSTER_WEIGHT") {
            Ok(raw) => parse_weight(&raw)?,
            Err(_) => Weight::default(),
        };

        let requests_per_second = match env::var("ROSTER_REQUESTS_PER_SECOND") {
            Ok(raw) => parse_requests_per_second(&raw)?,
            Err(_) => DEFAULT_REQUESTS_PER_SECOND,
        };

        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            weight,
            requests_per_second,
        })
    }
}

fn parse_weight(raw: &str) -> Result<Weight, AppError> {
    let value = raw.trim().parse::<u32>().map_err(|_| {
        AppError::ConfigError(format!("ROSTER_WEIGHT must be an integer, got {:?}", raw))
    })?;
    Weight::new(value)
}

fn parse_requests_per_second(raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            AppError::ConfigError(format!(
                "ROSTER_REQUESTS_PER_SECOND must be a positive integer, got {:?}",
                raw
            ))
        })
}
