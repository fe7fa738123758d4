pub mod config;

pub use config::{get_api_url, get_token, load_config, save_config, Config};
