//! Character-level tag scanner.
//!
//! A secondary lexer that walks one string-literal fragment at a time and
//! re-tokenizes its contents into template markup categories. The machine
//! resumes from the state carried across interpolation holes and aborts
//! (returning [`ScanOutcome::NotHtmlShaped`]) whenever the character
//! sequence does not match any transition from the current state.

/// The scanner state machine implementation.
pub mod machine;
/// Scanner state nodes.
pub mod state;

pub use machine::{ScanOutcome, scan_fragment};
pub use state::ScanState;
