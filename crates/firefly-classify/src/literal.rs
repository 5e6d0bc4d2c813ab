//! String-kind classification and cross-fragment resume state.
//!
//! Interpolation holes split one logical template literal into several
//! lexical string tokens. The scanner must resume mid-element or
//! mid-attribute exactly where the previous fragment stopped, so the whole
//! [`ResumeState`] - not just the string kind - crosses the hole. The rules
//! here decide, from a fragment's leading characters, whether it begins a
//! new template (reset) or continues the previous one (resume), and from
//! its trailing characters whether the template has closed.

use strum_macros::Display;

use crate::scanner::ScanState;

/// Quoting/interpolation kind of the logical literal currently scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum StringKind {
    /// Not recognized as any known string shape.
    #[default]
    Unknown,
    /// A plain, verbatim, or triple-quoted literal without interpolation.
    Simple,
    /// A single-line interpolated literal (`$"`).
    InterpolatedSimple,
    /// A multi-line interpolated literal (`$"""`).
    InterpolatedMultiLine,
}

/// How embedded quote characters are escaped inside the logical literal.
///
/// Captured when a fragment opens a new template and carried across
/// interpolation holes: continuation fragments have no quote prefix of
/// their own to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum QuoteStyle {
    /// Backslash escaping: `\"` embeds a quote.
    #[default]
    Escaped,
    /// Verbatim (`@"`) quoting: a doubled `""` embeds a quote.
    Verbatim,
}

/// Which quote character opened the attribute value being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ValueQuote {
    /// No quote: the value runs to the end of the fragment.
    #[default]
    Unquoted,
    /// Opened with `'`.
    Single,
    /// Opened with `"`.
    Double,
}

/// Scanner state carried from one literal fragment to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumeState {
    /// Kind of the logical literal.
    pub kind: StringKind,
    /// Escape rules of the logical literal.
    pub quoting: QuoteStyle,
    /// The tag scanner's current state node.
    pub state: ScanState,
    /// Open attribute-value quote, if scanning stopped mid-value.
    pub value_quote: ValueQuote,
}

impl ResumeState {
    /// Decide the effective state to scan a fragment from.
    ///
    /// Rules in priority order: a leading `$"""`, `$"`, `"""`, `@"`, or `"`
    /// starts a new template and resets; a leading `}` is the continuation
    /// after an interpolation hole and resumes `prior` unchanged; an
    /// interior line of a multi-line interpolated literal also resumes;
    /// anything else falls back to [`StringKind::Unknown`] with the scanner
    /// reset.
    #[must_use]
    pub fn for_fragment(fragment: &str, prior: Self) -> Self {
        if fragment.starts_with("$\"\"\"") {
            Self {
                kind: StringKind::InterpolatedMultiLine,
                ..Self::default()
            }
        } else if fragment.starts_with("$\"") {
            Self {
                kind: StringKind::InterpolatedSimple,
                ..Self::default()
            }
        } else if prior.kind != StringKind::InterpolatedMultiLine
            && (fragment.starts_with("\"\"\"")
                || fragment.starts_with("@\"")
                || fragment.starts_with('"'))
        {
            let quoting = if fragment.starts_with("@\"") {
                QuoteStyle::Verbatim
            } else {
                QuoteStyle::Escaped
            };
            Self {
                kind: StringKind::Simple,
                quoting,
                ..Self::default()
            }
        } else if fragment.starts_with('}') {
            prior
        } else if prior.kind == StringKind::InterpolatedMultiLine
            && !fragment.starts_with("\"\"\"")
        {
            prior
        } else {
            Self::default()
        }
    }

    /// Decide the state to carry after a fragment has been scanned.
    ///
    /// A trailing `"""` (or a trailing `"` outside multi-line literals)
    /// closes the template and resets; otherwise `current` survives into
    /// the next fragment.
    #[must_use]
    pub fn after_fragment(fragment: &str, current: Self) -> Self {
        let trimmed = fragment.trim();
        if trimmed.ends_with("\"\"\"")
            || (current.kind != StringKind::InterpolatedMultiLine && trimmed.ends_with('"'))
        {
            Self::default()
        } else {
            current
        }
    }
}
