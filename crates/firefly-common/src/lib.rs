//! Common utilities for the firefly highlighting engine.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for degraded classification

pub mod warning;
