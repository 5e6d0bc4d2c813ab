//! A small F#-flavored host lexer.
//!
//! The engine consumes a host token stream but deliberately does not own a
//! host language lexer; in an editor that stream comes from the editor
//! itself. This module provides just enough of one to drive the engine
//! from the command line: comments, identifiers, numbers, operators, and -
//! the part that matters - string literals in their plain (`"`), verbatim
//! (`@"`), interpolated (`$"`), triple (`"""`) and interpolated-triple
//! (`$"""`) forms, with interpolated literals split into fragments at
//! `{...}` holes. The fragment before a hole ends with the `{`; the
//! continuation fragment begins with the `}`.

use firefly_classify::{HostCategory, HostSpan};

const KEYWORDS: &[&str] = &[
    "do", "else", "fun", "if", "let", "match", "member", "module", "mutable", "namespace", "of",
    "open", "rec", "return", "then", "type", "with", "yield",
];

/// Tokenize an F#-flavored source snippet.
#[must_use]
pub fn lex(source: &str) -> Vec<HostSpan> {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    source: &'src str,
    chars: Vec<(usize, char)>,
    idx: usize,
    tokens: Vec<HostSpan>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            idx: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<HostSpan> {
        while self.idx < self.chars.len() {
            let (off, c) = self.chars[self.idx];
            if c.is_whitespace() {
                self.idx += 1;
            } else if c == '/' && self.peek(1) == Some('/') {
                self.line_comment(off);
            } else if c == '(' && self.peek(1) == Some('*') {
                self.block_comment(off);
            } else if c == '"'
                || (c == '@' && self.peek(1) == Some('"'))
                || (c == '$' && self.peek(1) == Some('"'))
            {
                self.string(off);
            } else if c == '_' || c.is_alphabetic() {
                self.word(off);
            } else if c.is_ascii_digit() {
                self.number(off);
            } else {
                self.push(off, self.offset_after(1) - off, HostCategory::Operator);
                self.idx += 1;
            }
        }
        self.tokens
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.idx + ahead).map(|&(_, c)| c)
    }

    /// Byte offset just past `count` characters from the current position.
    fn offset_after(&self, count: usize) -> usize {
        self.chars
            .get(self.idx + count)
            .map_or(self.source.len(), |&(off, _)| off)
    }

    fn push(&mut self, offset: usize, length: usize, category: HostCategory) {
        if length > 0 {
            self.tokens.push(HostSpan::new(offset, length, category));
        }
    }

    fn line_comment(&mut self, start: usize) {
        while self.idx < self.chars.len() && self.chars[self.idx].1 != '\n' {
            self.idx += 1;
        }
        self.push(start, self.offset_after(0) - start, HostCategory::Comment);
    }

    fn block_comment(&mut self, start: usize) {
        self.idx += 2;
        while self.idx < self.chars.len() {
            if self.chars[self.idx].1 == '*' && self.peek(1) == Some(')') {
                self.idx += 2;
                break;
            }
            self.idx += 1;
        }
        self.push(start, self.offset_after(0) - start, HostCategory::Comment);
    }

    fn word(&mut self, start: usize) {
        while self.idx < self.chars.len() {
            let c = self.chars[self.idx].1;
            if c == '_' || c == '\'' || c.is_alphanumeric() {
                self.idx += 1;
            } else {
                break;
            }
        }
        let end = self.offset_after(0);
        let category = if KEYWORDS.contains(&&self.source[start..end]) {
            HostCategory::Keyword
        } else {
            HostCategory::Identifier
        };
        self.push(start, end - start, category);
    }

    fn number(&mut self, start: usize) {
        while self.idx < self.chars.len() {
            let c = self.chars[self.idx].1;
            if c == '.' || c.is_ascii_alphanumeric() {
                self.idx += 1;
            } else {
                break;
            }
        }
        self.push(start, self.offset_after(0) - start, HostCategory::Number);
    }

    /// Lex one string literal, splitting interpolated literals into
    /// fragments around `{...}` holes.
    fn string(&mut self, start: usize) {
        let interpolated = self.chars[self.idx].1 == '$';
        let verbatim = self.chars[self.idx].1 == '@';
        if interpolated || verbatim {
            self.idx += 1;
        }
        let triple = self.peek(1) == Some('"') && self.peek(2) == Some('"');
        self.idx += if triple { 3 } else { 1 };

        let mut fragment_start = start;
        while self.idx < self.chars.len() {
            let c = self.chars[self.idx].1;
            if c == '"' {
                if triple {
                    if self.peek(1) == Some('"') && self.peek(2) == Some('"') {
                        self.idx += 3;
                        break;
                    }
                    self.idx += 1;
                } else if verbatim && self.peek(1) == Some('"') {
                    // doubled quote inside a verbatim literal
                    self.idx += 2;
                } else {
                    self.idx += 1;
                    break;
                }
            } else if c == '\\' && !verbatim && !triple {
                // escape: skip the escaped character too
                self.idx += 2;
            } else if interpolated && c == '{' {
                if self.peek(1) == Some('{') {
                    self.idx += 2;
                    continue;
                }
                // fragment ends just past the `{`; the hole content becomes
                // its own token and the next fragment begins at the `}`
                self.idx += 1;
                let fragment_end = self.offset_after(0);
                self.push(fragment_start, fragment_end - fragment_start, HostCategory::String);
                let hole_start = fragment_end;
                let mut depth = 1usize;
                while self.idx < self.chars.len() && depth > 0 {
                    match self.chars[self.idx].1 {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                    if depth > 0 {
                        self.idx += 1;
                    }
                }
                let hole_end = self.offset_after(0);
                self.push(hole_start, hole_end - hole_start, HostCategory::Other);
                fragment_start = hole_end;
            } else {
                self.idx += 1;
            }
        }
        let end = self.offset_after(0);
        self.push(fragment_start, end - fragment_start, HostCategory::String);
    }
}
