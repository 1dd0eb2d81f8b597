//! Ratatui Widget wrappers around the view models.
//!
//! Views map pre-formatted view model data to widgets; no derivation or
//! formatting happens here beyond layout.

pub mod banner;
pub mod compose;
pub mod grid;
pub mod pager_bar;
pub mod status_bar;
pub mod tabs;

pub use banner::BannerView;
pub use compose::ComposeView;
pub use grid::GridView;
pub use pager_bar::PagerBarView;
pub use status_bar::StatusBarView;
pub use tabs::TabsView;
