mod app;
mod config;
mod effects;
mod media;
mod ui;

pub use app::run_app;
