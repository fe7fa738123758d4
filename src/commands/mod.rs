pub mod auth;
pub mod browse;
pub mod clubs;
pub mod join;
pub mod update;
pub mod whoami;
