//! tenk - track practice hours on the road to 10,000.
//!
//! The library holds the tier table, the in-memory skill store, the session
//! controller and the terminal dashboard. The `tenk` binary wires them to
//! a command line.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tracker;
pub mod tui;
pub mod utils;

pub use error::{Result, TenkError};
