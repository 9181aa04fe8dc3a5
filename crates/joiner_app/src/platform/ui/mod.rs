pub mod commands;
pub mod constants;
pub mod preview;
pub mod render;
