//! Terminal dashboard built on ratatui.

pub mod dashboard;
pub mod render;
pub mod ticker;

pub use dashboard::{Dashboard, Mode, run_dashboard};
pub use ticker::Ticker;
