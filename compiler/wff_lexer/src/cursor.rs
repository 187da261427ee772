//! Byte cursor over the expression text.
//!
//! Every character the lexer accepts is ASCII, so the cursor walks bytes
//! and caches the byte under it. The only multi-byte step is
//! [`Cursor::advance_char`], used to skip past an offending non-ASCII
//! character, which keeps the position on a UTF-8 boundary at all times.

/// Whitespace between tokens: space, `\t` through `\r` (tab, newline,
/// vertical tab, form feed, carriage return) and the separators
/// `0x1C`..=`0x1F`.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r' | 0x1C..=0x1F)
}

/// Scan position within a borrowed source string.
///
/// # Invariant
///
/// `pos <= source.len()`, and `current` is the byte at `pos`, or `None`
/// exactly when `pos == source.len()`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    current: Option<u8>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            current: source.as_bytes().first().copied(),
        }
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// The full character under the cursor, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    /// Advance one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.seek(self.pos + 1);
        }
    }

    /// Advance past the whole character under the cursor.
    pub fn advance_char(&mut self) {
        if let Some(ch) = self.current_char() {
            self.seek(self.pos + ch.len_utf8());
        }
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current {
            if !pred(b) {
                break;
            }
            self.seek(self.pos + 1);
        }
    }

    /// Skip whitespace as classified by [`is_space`].
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between two offsets previously reported by [`pos`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        debug_assert!(
            start <= end && end <= self.source.len(),
            "slice {start}..{end} outside source of length {}",
            self.source.len()
        );
        self.source.get(start..end).unwrap_or_default()
    }

    fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
        self.current = self.source.as_bytes().get(self.pos).copied();
    }
}
