//! Per-document classifier registry.
//!
//! The carried scanner state makes a classifier stateful: two instances
//! competing over the same literal stream would corrupt each other's
//! resume points. The registry guarantees at most one live classifier per
//! document buffer, created on first lookup.

use std::collections::HashMap;

use crate::classify::HtmlClassifier;

/// Identity of one document buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Maps document identities to their single classifier instance.
#[derive(Debug, Default)]
pub struct ClassifierRegistry {
    classifiers: HashMap<DocumentId, HtmlClassifier>,
}

impl ClassifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classifier for `document`, created on first use.
    pub fn classifier_for(&mut self, document: DocumentId) -> &mut HtmlClassifier {
        self.classifiers.entry(document).or_default()
    }

    /// Drop the classifier for a closed document, returning it if present.
    pub fn remove(&mut self, document: DocumentId) -> Option<HtmlClassifier> {
        self.classifiers.remove(&document)
    }

    /// Number of live classifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    /// True if no classifier is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}
