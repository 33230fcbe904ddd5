//! Output styling: theme colors for the dashboard and detection of whether
//! human output may be styled.

pub mod detection;
pub mod theme;

pub use detection::{OutputDecision, OutputDecisionReason, OutputEnvironment, decide};
pub use theme::{Palette, ThemeError, ThemeMode};
