pub mod app;
pub mod args;
pub mod config;
pub mod dir;
pub mod logger;
pub mod services;
pub mod state;
pub mod views;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
