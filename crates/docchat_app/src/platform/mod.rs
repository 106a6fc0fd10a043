//! Terminal shell around the docchat core: config, logging, IO and rendering.
mod app;
mod config;
mod effects;
mod events;
mod logging;
mod ui;

pub use app::run_app;
