//! View models, views, and formatters for the review TUI.
//!
//! Views are thin ratatui Widget wrappers over pre-formatted view models;
//! all formatting happens when a view model is built, not at render time.

pub mod formatters;
pub mod presenter;
pub mod row_cache;
pub mod view_models;
pub mod views;
