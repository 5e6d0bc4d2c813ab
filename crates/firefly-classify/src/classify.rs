//! Token filtering and span assembly.
//!
//! Given the host lexer's token stream over a queried sub-range, keep only
//! tokens that overlap a detected template body, re-scan the string
//! literals among them, and merge the scanner's sub-spans with the
//! untouched non-string tokens in original left-to-right order.

use firefly_common::warning::warn_once;

use crate::literal::ResumeState;
use crate::scanner::{ScanOutcome, scan_fragment};
use crate::span::{ClassifiedSpan, HostCategory, HostSpan};
use crate::template::TemplateRange;

/// The per-document classification engine.
///
/// Owns the scanner state carried across consecutive literal fragments of
/// one interpolated template. One instance serves one document buffer and
/// calls against it must be serialized by the caller; use
/// [`crate::ClassifierRegistry`] to guarantee a single instance per
/// document.
#[derive(Debug, Default)]
pub struct HtmlClassifier {
    resume: ResumeState,
}

impl HtmlClassifier {
    /// Create a classifier with the scanner in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the sub-range `[start, end)` of the document.
    ///
    /// `host_spans` is the host lexer's ordered token stream over that
    /// range. Returns the ordered classified spans; an empty list means
    /// nothing in the range lies inside a detected template. String
    /// literals that are not HTML-shaped keep their original host
    /// classification - classification never fails.
    pub fn classify_range(
        &mut self,
        document: &str,
        start: usize,
        end: usize,
        host_spans: &[HostSpan],
    ) -> Vec<ClassifiedSpan> {
        let templates = TemplateRange::detect_all(document);

        if !templates.iter().any(|t| t.overlaps(start, end)) {
            // Carried state is only meaningful while requests stay inside a
            // template.
            self.resume = ResumeState::default();
            return Vec::new();
        }

        let mut result = Vec::new();
        for span in host_spans {
            if !templates.iter().any(|t| t.overlaps(span.offset, span.end())) {
                continue;
            }
            if span.category != HostCategory::String {
                result.push(ClassifiedSpan::from(*span));
                continue;
            }
            let Some(fragment) = span.text(document) else {
                // Host span does not fit the snapshot; keep it untouched.
                result.push(ClassifiedSpan::from(*span));
                continue;
            };
            let (outcome, carried) = scan_fragment(fragment, span.offset, span.category, self.resume);
            self.resume = carried;
            match outcome {
                ScanOutcome::Classified(spans) => result.extend(spans),
                ScanOutcome::NotHtmlShaped => {
                    warn_once(
                        "Scanner",
                        &format!(
                            "literal at offset {} is not HTML-shaped, keeping host classification",
                            span.offset
                        ),
                    );
                    result.push(ClassifiedSpan::from(*span));
                }
            }
        }
        result
    }
}
