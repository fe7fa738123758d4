use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_API_URL, TOKEN_ENV_VAR};
use crate::error::{ClubError, ClubResult, ErrorContext};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: Option<String>,
}

pub fn load_config() -> Config {
    let config_path = match dirs::home_dir() {
        Some(home) => home.join(CONFIG_FILE),
        None => return Config::default(),
    };

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_default();
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> ClubResult<()> {
    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

pub fn get_token() -> ClubResult<String> {
    // Environment variable wins over the config file
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        return Ok(token);
    }

    let config = load_config();
    if let Some(token) = config.token {
        return Ok(token);
    }

    Err(ClubError::TokenNotFound)
}

pub fn get_api_url() -> String {
    load_config()
        .api_url
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
