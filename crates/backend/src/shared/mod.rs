pub mod cache_busting;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod state;
