pub mod analytics;
pub mod config;
pub mod context;
pub mod logging;
pub mod ui;
