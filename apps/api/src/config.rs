use anyhow::{bail, Context, Result};

use crate::matching::weights::ScoringWeights;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Category weights for the overall score. Defaults to 0.50 / 0.35 / 0.15.
    pub weights: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            weights: weights_from_overrides(
                optional_f64("MATCH_WEIGHT_COMPETENCE")?,
                optional_f64("MATCH_WEIGHT_CULTURE")?,
                optional_f64("MATCH_WEIGHT_EXTRA")?,
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("{key} must be a number")),
        Err(_) => Ok(None),
    }
}

/// All three overrides or none: a partial override would silently re-weight
/// the remaining categories.
fn weights_from_overrides(
    competence: Option<f64>,
    culture: Option<f64>,
    extra: Option<f64>,
) -> Result<ScoringWeights> {
    match (competence, culture, extra) {
        (None, None, None) => Ok(ScoringWeights::default()),
        (Some(competence), Some(culture), Some(extra)) => {
            ScoringWeights::new(competence, culture, extra).context("Invalid MATCH_WEIGHT_* values")
        }
        _ => bail!(
            "MATCH_WEIGHT_COMPETENCE, MATCH_WEIGHT_CULTURE and MATCH_WEIGHT_EXTRA must be set together"
        ),
    }
}
