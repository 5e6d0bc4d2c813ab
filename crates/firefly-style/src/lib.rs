//! Visual-style mapping for the firefly highlighting engine.
//!
//! Maps each semantic [`Category`](firefly_classify::Category) to a
//! human-readable display name and a pair of theme-dependent foreground
//! colors. The engine itself is agnostic to these values; presentation
//! layers look them up here. A custom map can be loaded from JSON.

pub mod format;

pub use format::{FormatDefinition, FormatMap, FormatMapError, Rgb, Theme};
