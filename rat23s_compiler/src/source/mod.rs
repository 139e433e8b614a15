//! Byte source with single-byte pushback
//!
//! The lexer pulls one byte at a time and may push back the byte it just
//! read. Only one byte of pushback is supported: calling [`SourceBuffer::unget`]
//! twice without an intervening read is a logic error.

/// UTF-8 byte-order mark
pub const BYTE_ORDER_MARK: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    position: usize,
    /// Whether the last `get` returned a byte that `unget` may restore
    can_unget: bool,
    closed: bool,
}

impl SourceBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            position: 0,
            can_unget: false,
            closed: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }

    /// Next byte, or `None` at end of input or after `close`
    pub fn get(&mut self) -> Option<u8> {
        if self.closed {
            self.can_unget = false;
            return None;
        }
        match self.bytes.get(self.position) {
            Some(&byte) => {
                self.position += 1;
                self.can_unget = true;
                Some(byte)
            }
            None => {
                self.can_unget = false;
                None
            }
        }
    }

    /// Push back the byte returned by the previous `get`; no-op after end of input
    pub fn unget(&mut self) {
        debug_assert!(
            self.can_unget || self.position == self.bytes.len() || self.closed,
            "second pushback without an intervening read"
        );
        if self.can_unget {
            self.position -= 1;
            self.can_unget = false;
        }
    }

    /// Skip a UTF-8 BOM at the very start; returns whether one was skipped
    pub fn skip_byte_order_mark(&mut self) -> bool {
        if self.position == 0 && self.bytes.starts_with(&BYTE_ORDER_MARK) {
            self.position = BYTE_ORDER_MARK.len();
            self.can_unget = false;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.can_unget = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
