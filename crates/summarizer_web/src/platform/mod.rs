pub mod app;
pub mod config;
pub mod effects;
pub mod elements;
pub mod logging;
pub mod ui;
