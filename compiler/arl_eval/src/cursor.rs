//! Character cursor over an expression substring.
//!
//! The parser walks raw characters with no tokenization stage. The cursor
//! is an explicit position over an immutable input slice, owned by one
//! evaluation call, so nested expressions (parenthesized sub-expressions,
//! table elements) re-enter the parser without shared mutable state.

/// Position-tracking view over expression text.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// The next unread character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// The character after the next one, without consuming anything.
    ///
    /// Used for the two-character lookaheads: `..` concatenation, `-` that
    /// starts a negative number, and two-character comparison operators.
    #[inline]
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume and return the next character.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the next character if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip spaces and tabs (statement lines never span rows, so no
    /// newline handling here).
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.pos += 1;
        }
    }

    /// Whether all input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current byte offset; used to guarantee forward progress when
    /// recovering from unrecognizable input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }
}
