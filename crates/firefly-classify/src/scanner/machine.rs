//! The scanner state machine implementation.
//!
//! One `FragmentScanner` drives a single loop over the fragment's
//! characters, dispatching on the current [`ScanState`]. Multi-character
//! spans are tracked with an open mark (byte offset of the span start) and
//! flushed when the state leaves the accumulating node or the fragment
//! ends. Open spans are always flushed before a one-character emission at
//! the current position, so the output is strictly ordered and
//! non-overlapping.

use crate::literal::{QuoteStyle, ResumeState, ValueQuote};
use crate::span::{Category, ClassifiedSpan, HostCategory, SpanCategory};

use super::state::ScanState;

/// Result of scanning one literal fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Ordered, non-overlapping spans covering the fragment's markup.
    Classified(Vec<ClassifiedSpan>),
    /// The fragment cannot be interpreted as template markup from the
    /// resumed state; the caller keeps the original host classification.
    NotHtmlShaped,
}

/// Scan one literal fragment.
///
/// `base` is the fragment's byte offset in the document snapshot; emitted
/// spans carry document offsets. `host` is the fragment's own host
/// category, used for free text between tags (free text is not re-colored).
/// `prior` is the state carried from the previous fragment of the same
/// logical literal; the returned state must be threaded into the next call.
///
/// Scanning the same fragment under the same resumed state always yields
/// the same span sequence. The function never panics on malformed input:
/// unrecognized shapes come back as [`ScanOutcome::NotHtmlShaped`] with the
/// carried state reset.
#[must_use]
pub fn scan_fragment(
    fragment: &str,
    base: usize,
    host: HostCategory,
    prior: ResumeState,
) -> (ScanOutcome, ResumeState) {
    let resume = ResumeState::for_fragment(fragment, prior);
    match FragmentScanner::new(fragment, base, host, resume).run() {
        Some((spans, end_state)) => {
            let carried = ResumeState::after_fragment(fragment, end_state);
            (ScanOutcome::Classified(spans), carried)
        }
        None => (ScanOutcome::NotHtmlShaped, ResumeState::default()),
    }
}

/// Quote characters a host literal may be delimited with.
const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Characters allowed inside element and attribute names.
fn is_name_char(c: char) -> bool {
    c == '-' || c == '_' || c.is_alphanumeric()
}

/// Characters an element name may start with. A digit directly after `<`
/// is not markup.
fn is_name_start_char(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

struct FragmentScanner<'frag> {
    fragment: &'frag str,
    chars: Vec<(usize, char)>,
    base: usize,
    host: HostCategory,
    resume: ResumeState,
    state: ScanState,
    value_quote: ValueQuote,
    // Byte offset where the currently accumulating span started.
    mark: Option<usize>,
    spans: Vec<ClassifiedSpan>,
    idx: usize,
}

impl<'frag> FragmentScanner<'frag> {
    fn new(fragment: &'frag str, base: usize, host: HostCategory, resume: ResumeState) -> Self {
        Self {
            fragment,
            chars: fragment.char_indices().collect(),
            base,
            host,
            resume,
            state: resume.state,
            value_quote: resume.value_quote,
            mark: None,
            spans: Vec::new(),
            idx: 0,
        }
    }

    fn run(mut self) -> Option<(Vec<ClassifiedSpan>, ResumeState)> {
        let mut flush_end = self.fragment.len();

        while self.idx < self.chars.len() {
            let (off, c) = self.chars[self.idx];

            // The literal's own leading/trailing quote character is not
            // markup, except mid-value where a quote is meaningful content.
            if (self.idx == 0 || self.idx == self.chars.len() - 1)
                && is_quote(c)
                && self.state != ScanState::AttributeValue
            {
                if self.idx == self.chars.len() - 1 {
                    flush_end = off;
                }
                self.idx += 1;
                continue;
            }

            // Interpolation braces are always visually distinguished.
            if (c == '{' || c == '}')
                && self.state != ScanState::LitAttributeValue
                && self.state != ScanState::AfterAttributeEqualSign
            {
                self.flush_for_state(off);
                self.emit_one(off, Category::Delimiter);
                self.idx += 1;
                continue;
            }

            match self.state {
                ScanState::Default => {
                    if c == '<' {
                        self.mark = None;
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenAngleBracket;
                    }
                }
                ScanState::AfterOpenAngleBracket => {
                    if is_name_start_char(c) {
                        self.mark = Some(off);
                        self.state = ScanState::ElementName;
                    } else if c == '/' {
                        self.mark = None;
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterCloseTagSlash;
                    } else {
                        return None;
                    }
                }
                ScanState::ElementName => {
                    if is_name_char(c) {
                        self.open_mark(off);
                    } else if c.is_whitespace() {
                        self.flush(off, SpanCategory::Html(Category::Element));
                        self.state = ScanState::InsideAttributeList;
                    } else if c == '>' {
                        self.flush(off, SpanCategory::Html(Category::Element));
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterCloseAngleBracket;
                    } else if c == '/' {
                        self.flush(off, SpanCategory::Html(Category::Element));
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenTagSlash;
                    } else {
                        return None;
                    }
                }
                ScanState::InsideAttributeList => {
                    if c.is_whitespace() {
                        // skip
                    } else if is_name_char(c) {
                        self.mark = Some(off);
                        self.state = ScanState::AttributeName;
                    } else if matches!(c, '.' | '@' | '?') {
                        self.mark = None;
                        self.emit_one(off, Category::LitAttributeName);
                        self.state = ScanState::LitAttributeName;
                    } else if c == '>' {
                        self.mark = None;
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterCloseAngleBracket;
                    } else if c == '/' {
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenTagSlash;
                    } else {
                        return None;
                    }
                }
                ScanState::AttributeName => {
                    if is_name_char(c) {
                        self.open_mark(off);
                    } else if c.is_whitespace() {
                        self.flush(off, SpanCategory::Html(Category::AttributeName));
                        self.state = ScanState::AfterAttributeName;
                    } else if c == '=' {
                        self.flush(off, SpanCategory::Html(Category::AttributeName));
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterAttributeEqualSign;
                    } else if c == '>' {
                        self.flush(off, SpanCategory::Html(Category::AttributeName));
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterCloseAngleBracket;
                    } else if c == '/' {
                        self.flush(off, SpanCategory::Html(Category::AttributeName));
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenTagSlash;
                    } else {
                        return None;
                    }
                }
                ScanState::LitAttributeName => {
                    if c.is_whitespace() {
                        self.flush(off, SpanCategory::Html(Category::LitAttributeName));
                    } else if is_name_char(c) {
                        self.open_mark(off);
                    } else if c == '=' {
                        self.flush(off, SpanCategory::Html(Category::LitAttributeName));
                        self.emit_one(off, Category::LitAttributeName);
                        self.state = ScanState::LitAttributeValue;
                    } else {
                        return None;
                    }
                }
                ScanState::AfterAttributeName => {
                    if c.is_whitespace() {
                        // skip
                    } else if is_name_char(c) {
                        self.mark = Some(off);
                        self.state = ScanState::AttributeName;
                    } else if c == '=' {
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterAttributeEqualSign;
                    } else if matches!(c, '.' | '@' | '?') {
                        self.mark = None;
                        self.emit_one(off, Category::LitAttributeName);
                        self.state = ScanState::LitAttributeName;
                    } else if c == '/' {
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenTagSlash;
                    } else if c == '>' {
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterCloseAngleBracket;
                    } else {
                        return None;
                    }
                }
                ScanState::AfterAttributeEqualSign => {
                    if c.is_whitespace() {
                        // skip
                    } else if c == '{' {
                        self.mark = None;
                        self.emit_one(off, Category::LitAttributeValue);
                        self.state = ScanState::LitAttributeValue;
                    } else if c == '$' && self.peek() == Some('{') {
                        // the `${expr}` hole spelling; the brace follows
                    } else if c == '"' {
                        // in verbatim literals a doubled `""` is one quote unit
                        self.emit_one(off, Category::Quote);
                        self.value_quote = ValueQuote::Double;
                        self.state = ScanState::AfterOpenDoubleQuote;
                        if self.resume.quoting == QuoteStyle::Verbatim && self.peek() == Some('"') {
                            let (qoff, _) = self.chars[self.idx + 1];
                            self.emit_one(qoff, Category::Quote);
                            self.idx += 2;
                            continue;
                        }
                    } else if c == '\\'
                        && self.resume.quoting == QuoteStyle::Escaped
                        && self.peek() == Some('"')
                    {
                        // escaped opening quote `\"`: the span sits on the quote
                        let (qoff, _) = self.chars[self.idx + 1];
                        self.emit_one(qoff, Category::Quote);
                        self.value_quote = ValueQuote::Double;
                        self.state = ScanState::AfterOpenDoubleQuote;
                        self.idx += 2;
                        continue;
                    } else if c == '\'' {
                        self.emit_one(off, Category::Quote);
                        self.value_quote = ValueQuote::Single;
                        self.state = ScanState::AfterOpenSingleQuote;
                    } else if is_name_char(c) {
                        self.mark = Some(off);
                        self.value_quote = ValueQuote::Unquoted;
                        self.state = ScanState::AttributeValue;
                    } else {
                        return None;
                    }
                }
                ScanState::AfterOpenDoubleQuote => {
                    if c == '"' {
                        // empty value
                        self.emit_one(off, Category::Quote);
                        self.value_quote = ValueQuote::Unquoted;
                        self.state = ScanState::InsideAttributeList;
                        if self.resume.quoting == QuoteStyle::Verbatim && self.peek() == Some('"') {
                            let (qoff, _) = self.chars[self.idx + 1];
                            self.emit_one(qoff, Category::Quote);
                            self.idx += 2;
                            continue;
                        }
                    } else if c == '\\'
                        && self.resume.quoting == QuoteStyle::Escaped
                        && self.peek() == Some('"')
                    {
                        let (qoff, _) = self.chars[self.idx + 1];
                        self.emit_one(qoff, Category::Quote);
                        self.value_quote = ValueQuote::Unquoted;
                        self.state = ScanState::InsideAttributeList;
                        self.idx += 2;
                        continue;
                    } else {
                        self.mark = Some(off);
                        self.state = ScanState::AttributeValue;
                    }
                }
                ScanState::AfterOpenSingleQuote => {
                    if c == '\'' {
                        self.emit_one(off, Category::Quote);
                        self.value_quote = ValueQuote::Unquoted;
                        self.state = ScanState::InsideAttributeList;
                    } else {
                        self.mark = Some(off);
                        self.state = ScanState::AttributeValue;
                    }
                }
                ScanState::AttributeValue => match self.value_quote {
                    ValueQuote::Single => {
                        if c == '\'' {
                            self.close_value(off);
                        } else {
                            self.open_mark(off);
                        }
                    }
                    ValueQuote::Double => {
                        if self.resume.quoting == QuoteStyle::Verbatim && c == '"' {
                            // a doubled `""` is one quote unit closing the value
                            self.close_value(off);
                            if self.peek() == Some('"') {
                                let (qoff, _) = self.chars[self.idx + 1];
                                self.emit_one(qoff, Category::Quote);
                                self.idx += 2;
                                continue;
                            }
                        } else if self.resume.quoting == QuoteStyle::Escaped
                            && c == '\\'
                            && self.peek() == Some('"')
                        {
                            // `\"` closes: value ends before the backslash,
                            // the quote span sits on the quote
                            self.flush(off, SpanCategory::Html(Category::AttributeValue));
                            let (qoff, _) = self.chars[self.idx + 1];
                            self.emit_one(qoff, Category::Quote);
                            self.value_quote = ValueQuote::Unquoted;
                            self.state = ScanState::InsideAttributeList;
                            self.idx += 2;
                            continue;
                        } else if c == '"' {
                            self.close_value(off);
                        } else {
                            self.open_mark(off);
                        }
                    }
                    // Only a matching quote closes a value; unquoted values
                    // accumulate to the end of the fragment.
                    ValueQuote::Unquoted => self.open_mark(off),
                },
                ScanState::LitAttributeValue => {
                    if c == '{' {
                        self.flush(off, SpanCategory::Html(Category::LitAttributeValue));
                        self.emit_one(off, Category::LitAttributeValue);
                    } else if c == '}' {
                        self.flush(off, SpanCategory::Html(Category::LitAttributeValue));
                        self.emit_one(off, Category::LitAttributeValue);
                        self.state = ScanState::InsideAttributeList;
                    } else if c.is_whitespace() {
                        // not span-starting; interior whitespace stays covered
                    } else if is_name_char(c) || c == '"' || c == '$' {
                        self.open_mark(off);
                    } else {
                        return None;
                    }
                }
                ScanState::AfterCloseAngleBracket => {
                    if c == '<' {
                        self.mark = None;
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenAngleBracket;
                    } else {
                        self.mark = Some(off);
                        self.state = ScanState::InsideElement;
                    }
                }
                ScanState::InsideElement => {
                    if c == '<' {
                        // free text keeps the host category
                        self.flush(off, SpanCategory::Host(self.host));
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterOpenAngleBracket;
                    } else {
                        self.open_mark(off);
                    }
                }
                ScanState::AfterCloseTagSlash => {
                    if c.is_whitespace() {
                        // skip
                    } else if is_name_start_char(c) {
                        self.mark = Some(off);
                        self.state = ScanState::ElementName;
                    } else {
                        return None;
                    }
                }
                ScanState::AfterOpenTagSlash => {
                    if c == '>' {
                        self.mark = None;
                        self.emit_one(off, Category::Delimiter);
                        self.state = ScanState::AfterCloseAngleBracket;
                    } else {
                        return None;
                    }
                }
            }

            self.idx += 1;
        }

        // A span left open by the end of the fragment is flushed with the
        // category of the open state; the next fragment resumes it.
        self.flush_for_state(flush_end);

        let carried = ResumeState {
            kind: self.resume.kind,
            quoting: self.resume.quoting,
            state: self.state,
            value_quote: self.value_quote,
        };
        Some((self.spans, carried))
    }

    /// Peek at the character after the current one.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx + 1).map(|&(_, c)| c)
    }

    /// Start a span at `off` unless one is already open. Accumulating
    /// states resumed across a fragment boundary re-open their span at the
    /// first continuing character.
    fn open_mark(&mut self, off: usize) {
        if self.mark.is_none() {
            self.mark = Some(off);
        }
    }

    /// Emit a one-character span.
    fn emit_one(&mut self, off: usize, category: Category) {
        self.spans
            .push(ClassifiedSpan::new(self.base + off, 1, SpanCategory::Html(category)));
    }

    /// Flush the open span as `[mark, upto)`. Zero-length spans are never
    /// emitted.
    fn flush(&mut self, upto: usize, category: SpanCategory) {
        if let Some(start) = self.mark.take() {
            if upto > start {
                self.spans
                    .push(ClassifiedSpan::new(self.base + start, upto - start, category));
            }
        }
    }

    /// Flush the open span with the category appropriate to the current
    /// state (used for brace delimiters and end-of-fragment).
    fn flush_for_state(&mut self, upto: usize) {
        match self.state {
            ScanState::ElementName => self.flush(upto, SpanCategory::Html(Category::Element)),
            ScanState::AttributeName => {
                self.flush(upto, SpanCategory::Html(Category::AttributeName));
            }
            ScanState::AttributeValue => {
                self.flush(upto, SpanCategory::Html(Category::AttributeValue));
            }
            ScanState::LitAttributeName => {
                self.flush(upto, SpanCategory::Html(Category::LitAttributeName));
            }
            ScanState::LitAttributeValue => {
                self.flush(upto, SpanCategory::Html(Category::LitAttributeValue));
            }
            ScanState::InsideElement => self.flush(upto, SpanCategory::Host(self.host)),
            _ => self.mark = None,
        }
    }

    /// Close a quoted attribute value at `off`: flush the value span, emit
    /// the closing quote, and return to the attribute list.
    fn close_value(&mut self, off: usize) {
        self.flush(off, SpanCategory::Html(Category::AttributeValue));
        self.emit_one(off, Category::Quote);
        self.value_quote = ValueQuote::Unquoted;
        self.state = ScanState::InsideAttributeList;
    }
}
