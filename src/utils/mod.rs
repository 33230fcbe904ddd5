//! Utility functions

pub mod format;
