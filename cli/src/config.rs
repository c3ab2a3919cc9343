use std::env;

use tracing::info;

pub struct Config {
    pub api_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_url: try_load("EATWHAT_API_URL", "http://localhost:5001"),
        }
    }
}

fn try_load(key: &str, default: &str) -> String {
    env::var(key)
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
}
