//! Terminal front end: turns typed commands into core messages and runs the
//! resulting effects on the engine.
mod app;
mod args;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
pub use args::Args;
