//! Template boundary detection.
//!
//! Scans raw document text for the `html` tag marker followed by a quote
//! run and computes the byte range of each template body. Two opener shapes
//! are recognized:
//!
//! - a triple quote, optionally prefixed by one or two of `$`/`@`, with
//!   optional spacing after `html` (e.g. `html $"""`, `html"""`)
//! - a single/interpolated quote run after at least one space or newline
//!   (e.g. `html $"`, `html @"`)
//!
//! A triple-quoted template runs to the next `"""`; a single-quoted one runs
//! to the next line break. A missing terminator never fails: the range
//! simply extends to the end of the document.

use std::sync::LazyLock;

use regex::Regex;

static TEMPLATE_BEGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("html(?:[ \r\n]*[$@]{0,2}\"{3}|[ \r\n]+[$@\"]+)")
        .expect("template begin pattern is valid")
});

/// A contiguous interval `[start, end)` of document byte offsets identified
/// as the body of one HTML template literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRange {
    /// Byte offset just past the opening marker and quote run.
    pub start: usize,
    /// Exclusive end offset of the template body.
    pub end: usize,
}

impl TemplateRange {
    /// True if the range has a non-empty intersection with `[start, end)`.
    #[must_use]
    pub const fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// Find all template bodies in the document.
    ///
    /// Matches are non-overlapping in source order; nested or overlapping
    /// markers are not supported (the first match wins position-wise). Text
    /// with no marker yields no ranges, never an error.
    #[must_use]
    pub fn detect_all(document: &str) -> Vec<Self> {
        TEMPLATE_BEGIN
            .find_iter(document)
            .map(|opener| {
                let start = opener.end();
                let rest = &document[start..];
                let terminator = if opener.as_str().contains("\"\"\"") {
                    rest.find("\"\"\"")
                } else {
                    // Single-line template: body ends at the line break.
                    rest.find(['\r', '\n'])
                };
                let end = terminator.map_or(document.len(), |len| start + len);
                Self { start, end }
            })
            .collect()
    }
}
