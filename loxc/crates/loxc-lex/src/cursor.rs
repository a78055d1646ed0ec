//! Position tracking over a source string.
//!
//! [`Cursor`] walks a `&str` one character at a time and bumps its line
//! counter whenever it steps over a `\n`. Scanners never count newlines
//! themselves.

/// Read position within a Lox source string.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
///
/// assert_eq!(cursor.peek(), 'v');
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.peek_next(), 'r');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// Text being scanned.
    source: &'a str,

    /// Byte offset of the next unconsumed character.
    position: usize,

    /// Line of the next character, starting at 1.
    line: u32,

    /// Column of the next character in chars, starting at 1.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the given byte offset from current position,
    /// or '\0' past the end.
    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let at = self.position + offset;
        match self.source.as_bytes().get(at) {
            None => return '\0',
            Some(&byte) if byte.is_ascii() => return char::from(byte),
            Some(_) => {},
        }

        self.source
            .get(at..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// The next unconsumed character, or `'\0'` once the input is used up.
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character after the current one without consuming
    /// anything, or '\0' if there is none.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.");
    /// assert_eq!(cursor.peek_next(), '.');
    /// assert_eq!(Cursor::new("1").peek_next(), '\0');
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        let current = self.peek();
        if current == '\0' && self.is_at_end() {
            return '\0';
        }
        self.char_at(current.len_utf8())
    }

    /// Steps over one character and hands it back.
    ///
    /// A `'\n'` moves to column 1 of the next line. At the end of input this
    /// is a no-op returning `'\0'`.
    #[inline]
    pub fn advance(&mut self) -> char {
        if self.is_at_end() {
            return '\0';
        }

        let ch = self.peek();
        self.position += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            },
            _ => self.column += 1,
        }
        ch
    }

    /// Consumes the current character only if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=<");
    /// assert!(cursor.match_char('<'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), '<');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Whether every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Line counter, incremented by each consumed newline.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text consumed since byte offset `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("fun f");
    /// let start = cursor.position();
    /// while cursor.peek().is_ascii_alphabetic() {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "fun");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The whole input.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
