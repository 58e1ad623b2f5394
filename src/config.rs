use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// Browser origin allowed by CORS.
    pub cors_origin: String,
    /// Start with the sample garden instead of an empty one.
    pub seed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            cors_origin: DEFAULT_CORS_ORIGIN.into(),
            seed: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            bind_addr: env::var("POTSANDPLOTS_BIND").unwrap_or(defaults.bind_addr),
            cors_origin: env::var("POTSANDPLOTS_CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            seed: env::var("POTSANDPLOTS_SEED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed),
        }
    }
}

/// Base URL of the REST API for client-side use.
pub fn api_url() -> String {
    dotenvy::dotenv().ok();
    env::var("POTSANDPLOTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into())
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
