//! Span types flowing through the engine.
//!
//! The host lexer supplies [`HostSpan`]s; the engine produces
//! [`ClassifiedSpan`]s whose category is either one of the semantic
//! [`Category`] values or a passthrough of the original host category.
//! Offsets are byte offsets into the document snapshot.

use core::fmt;

use strum_macros::Display;

/// Primitive category assigned by the host language's own lexer.
///
/// The engine only ever distinguishes [`HostCategory::String`] from
/// everything else; all other categories pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HostCategory {
    /// A string literal (or one fragment of an interpolated literal).
    String,
    /// An identifier.
    Identifier,
    /// A language keyword.
    Keyword,
    /// A comment.
    Comment,
    /// A numeric literal.
    Number,
    /// An operator or punctuation.
    Operator,
    /// Anything the host lexer did not further classify.
    Other,
}

/// One token produced by the host lexer. Read-only input, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSpan {
    /// Byte offset of the token in the document.
    pub offset: usize,
    /// Byte length of the token.
    pub length: usize,
    /// The host lexer's category for the token.
    pub category: HostCategory,
}

impl HostSpan {
    /// Create a new host span.
    #[must_use]
    pub const fn new(offset: usize, length: usize, category: HostCategory) -> Self {
        Self {
            offset,
            length,
            category,
        }
    }

    /// Exclusive end offset of the span.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// True if the span has a non-empty intersection with `[start, end)`.
    #[must_use]
    pub const fn overlaps(&self, start: usize, end: usize) -> bool {
        self.offset < end && start < self.end()
    }

    /// The token's text, if the span lies inside the document snapshot.
    #[must_use]
    pub fn text<'doc>(&self, document: &'doc str) -> Option<&'doc str> {
        document.get(self.offset..self.end())
    }
}

/// The semantic categories produced by the tag scanner.
///
/// [`Category::Text`] exists for the presentation layer's format map but is
/// never assigned by the scanner itself: free text between tags keeps its
/// host category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    /// Tag punctuation: `<`, `>`, `/`, `=`, and interpolation braces.
    Delimiter,
    /// An element name.
    Element,
    /// A plain attribute name.
    AttributeName,
    /// An attribute-value quote character.
    Quote,
    /// A quoted or unquoted attribute value.
    AttributeValue,
    /// Free text between tags.
    Text,
    /// A lit-html binding attribute: the `.`/`@`/`?` sigil, its name, and
    /// the `=` that follows.
    LitAttributeName,
    /// A lit-html binding value: `{`, the interpolated content, and `}`.
    LitAttributeValue,
}

/// Category carried by an output span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanCategory {
    /// One of the semantic template categories.
    Html(Category),
    /// Passthrough of the original host category.
    Host(HostCategory),
}

impl fmt::Display for SpanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html(category) => write!(f, "{category}"),
            Self::Host(category) => write!(f, "host:{category}"),
        }
    }
}

/// One classified output span.
///
/// Within one scan call, emitted spans are non-overlapping, sorted by
/// offset, and never zero-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedSpan {
    /// Byte offset of the span in the document.
    pub offset: usize,
    /// Byte length of the span, always greater than zero.
    pub length: usize,
    /// The span's category.
    pub category: SpanCategory,
}

impl ClassifiedSpan {
    /// Create a new classified span.
    #[must_use]
    pub const fn new(offset: usize, length: usize, category: SpanCategory) -> Self {
        Self {
            offset,
            length,
            category,
        }
    }

    /// Exclusive end offset of the span.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }
}

impl From<HostSpan> for ClassifiedSpan {
    /// Passthrough conversion keeping the host category.
    fn from(span: HostSpan) -> Self {
        Self::new(span.offset, span.length, SpanCategory::Host(span.category))
    }
}

impl fmt::Display for ClassifiedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}({})", self.category, self.offset, self.length)
    }
}
