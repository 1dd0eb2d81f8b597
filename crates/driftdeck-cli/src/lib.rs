mod args;
mod commands;
mod demo;
mod logging;
mod tui;
pub mod app;
pub mod presentation;
mod handlers;

pub use args::{Cli, Commands, OutputFormat, SnapshotCommand};
pub use commands::run;
