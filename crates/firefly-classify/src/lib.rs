//! Embedded-template classification engine.
//!
//! This crate re-classifies text inside string literals of an F#-flavored
//! host language so that embedded lit-html-style markup can be highlighted
//! distinctly from the surrounding code. It layers a secondary lexer on top
//! of an already-tokenized stream:
//!
//! - **Boundary detection** ([`template`]) finds `html`-tagged template
//!   literals in the raw document text.
//! - **Token filtering and span assembly** ([`classify`]) keeps only host
//!   tokens inside template bodies and re-scans the string literals among
//!   them.
//! - **String-kind classification** ([`literal`]) decides each fragment's
//!   quoting rules and whether scanner state crosses an interpolation hole.
//! - **The tag scanner** ([`scanner`]) walks a fragment character by
//!   character and emits classified sub-spans for delimiters, element names,
//!   attributes, quotes, values, and lit-html binding syntax (`.prop=`,
//!   `@event=`, `?bool=`, `{expr}`).
//!
//! Classification never fails: input that is not HTML-shaped keeps its
//! original host classification.

/// Token filtering and span assembly.
pub mod classify;
/// String-kind classification and cross-fragment resume state.
pub mod literal;
/// Per-document classifier registry.
pub mod registry;
/// Character-level tag scanner state machine.
pub mod scanner;
/// Host and classified span types.
pub mod span;
/// Template boundary detection.
pub mod template;

pub use classify::HtmlClassifier;
pub use literal::{QuoteStyle, ResumeState, StringKind, ValueQuote};
pub use registry::{ClassifierRegistry, DocumentId};
pub use scanner::{ScanOutcome, ScanState, scan_fragment};
pub use span::{Category, ClassifiedSpan, HostCategory, HostSpan, SpanCategory};
pub use template::TemplateRange;
