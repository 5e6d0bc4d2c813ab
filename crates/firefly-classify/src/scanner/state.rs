//! Scanner state nodes.

use strum_macros::Display;

/// The tag scanner's state machine nodes.
///
/// The initial state is [`ScanState::Default`]. States that accumulate a
/// multi-character span (element names, attribute names and values, lit
/// bindings, free text) survive across fragment boundaries so that a span
/// split by an interpolation hole resumes where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ScanState {
    /// Outside any tag; only `<` is meaningful.
    #[default]
    Default,
    /// Just consumed `<`.
    AfterOpenAngleBracket,
    /// Accumulating an element name.
    ElementName,
    /// Between attributes inside a tag.
    InsideAttributeList,
    /// Accumulating a plain attribute name.
    AttributeName,
    /// After an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// Just consumed the `=` of an attribute.
    AfterAttributeEqualSign,
    /// Just consumed the opening `"` of an attribute value.
    AfterOpenDoubleQuote,
    /// Just consumed the opening `'` of an attribute value.
    AfterOpenSingleQuote,
    /// Accumulating an attribute value.
    AttributeValue,
    /// Accumulating a lit-html binding name (`.prop`, `@event`, `?bool`).
    LitAttributeName,
    /// Accumulating a lit-html binding value (`{expr}`).
    LitAttributeValue,
    /// Just consumed a closing `>`.
    AfterCloseAngleBracket,
    /// Accumulating free text between tags.
    InsideElement,
    /// Just consumed the `/` of a closing tag (`</`).
    AfterCloseTagSlash,
    /// Just consumed the `/` of a self-closing tag (`/>`).
    AfterOpenTagSlash,
}
