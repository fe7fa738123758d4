// Module declarations
pub mod auth;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod query;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::ClubClient;
pub use config::{get_token, load_config, save_config, Config};
pub use error::{ClubError, ClubResult};
pub use models::*;
pub use query::{ClubListQuery, QueryCache, SearchState};
pub use store::AppStore;
