//! Byte-stream tokenizer for flow log codes.
//!
//! Each byte is classified by its value:
//!
//! | Byte | Meaning |
//! |------|---------|
//! | `0x00..0xDC` | delta flow, `byte - 109` added to the accumulator |
//! | `0xDC..0xE0` | temperature group `byte - 0xDC` |
//! | `0xE0..=0xFF` | header of a long code, combined with the next byte |
//!
//! A long code `code16 = (header << 8) + tail` is a pause of
//! `code16 - 0xF000` seconds when `code16 >= 0xF000`, otherwise an absolute
//! readout of `code16 - 0xE000`.

use std::iter::FusedIterator;
use std::slice;

use log::{trace, warn};

use crate::code::RawCode;
use crate::constants::{delta_of, ABSOLUTE_BASE, LONG_CODE_MIN, PAUSE_BASE, TEMP_GROUP_MIN};
use crate::error::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting a single-byte code or a long-code header
    Header,
    /// Header byte seen, waiting for the low byte
    LongTail { pending: u16, offset: usize },
}

/// Tokenizer state machine
///
/// Owns the running flow accumulator. Each decode starts from a fresh
/// `Tokenizer`; nothing is shared between streams.
///
/// # Example
/// ```
/// use flowlog::{CodeKind, Tokenizer};
///
/// let mut tok = Tokenizer::new();
/// assert_eq!(tok.push(0xE0), None);
/// let code = tok.push(0x10).unwrap();
/// assert_eq!(code.kind, CodeKind::AbsoluteFlow);
/// assert_eq!(code.value, 16);
/// assert_eq!(tok.accumulator(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    state: State,
    flow: u16,
    pos: usize,
}

impl Tokenizer {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { state: State::Header, flow: 0, pos: 0 }
    }

    /// Feed one byte, returning the code it completes (if any)
    #[inline]
    pub fn push(&mut self, byte: u8) -> Option<RawCode> {
        let offset = self.pos;
        self.pos = self.pos.saturating_add(1);

        let code = match self.state {
            State::LongTail { pending, .. } => {
                self.state = State::Header;
                // pending has a zero low byte, so this cannot overflow
                let code16 = pending + u16::from(byte);
                if code16 >= PAUSE_BASE {
                    RawCode::pause(code16 - PAUSE_BASE)
                } else {
                    // Absolute readout resynchronizes the accumulator
                    self.flow = code16 - ABSOLUTE_BASE;
                    RawCode::absolute(self.flow)
                }
            }
            State::Header if byte >= LONG_CODE_MIN => {
                self.state = State::LongTail { pending: u16::from(byte) << 8, offset };
                return None;
            }
            State::Header if byte >= TEMP_GROUP_MIN => RawCode::temp_group(u16::from(byte - TEMP_GROUP_MIN)),
            State::Header => {
                self.flow = self.flow.wrapping_add(delta_of(byte));
                RawCode::delta(self.flow)
            }
        };

        trace!("offset {offset}: byte 0x{byte:02X} -> {} {}", code.kind, code.value);
        Some(code)
    }

    /// Current value of the running flow accumulator
    #[inline]
    #[must_use]
    pub const fn accumulator(&self) -> u16 {
        self.flow
    }

    /// Whether a long-code header is waiting for its tail byte
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, State::LongTail { .. })
    }

    /// Number of bytes consumed so far
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Check that the stream ended on a code boundary
    ///
    /// # Errors
    /// Returns `DecodeError::TruncatedLongCode` if a long-code header byte was
    /// never completed.
    pub fn finish(&self) -> Result<(), DecodeError> {
        match self.state {
            State::Header => Ok(()),
            State::LongTail { pending, offset } => Err(DecodeError::TruncatedLongCode {
                offset,
                header: (pending >> 8) as u8,
            }),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the codes of a byte slice
///
/// A truncated trailing long code is dropped with a warning once the slice is
/// exhausted.
#[derive(Debug, Clone)]
pub struct Codes<'a> {
    bytes: slice::Iter<'a, u8>,
    tokenizer: Tokenizer,
    done: bool,
}

impl Codes<'_> {
    /// The tokenizer state after the bytes consumed so far
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl Iterator for Codes<'_> {
    type Item = RawCode;

    #[inline]
    fn next(&mut self) -> Option<RawCode> {
        if self.done {
            return None;
        }
        for &byte in self.bytes.by_ref() {
            if let Some(code) = self.tokenizer.push(byte) {
                return Some(code);
            }
        }
        self.done = true;
        if let Err(e) = self.tokenizer.finish() {
            // Incomplete code is discarded
            warn!("dropping incomplete code: {e}");
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.bytes.len()))
        }
    }
}

impl FusedIterator for Codes<'_> {}

/// Iterate over the codes of `bytes` without collecting them
#[inline]
pub fn codes(bytes: &[u8]) -> Codes<'_> {
    Codes { bytes: bytes.iter(), tokenizer: Tokenizer::new(), done: false }
}

/// Tokenize a byte stream into codes
///
/// Never fails: a truncated trailing long code is dropped.
///
/// # Example
/// ```
/// use flowlog::{tokenize, RawCode};
///
/// let codes = tokenize(&[109, 110, 0xDC, 0xF0, 0x05]);
/// assert_eq!(
///     codes,
///     vec![RawCode::delta(0), RawCode::delta(1), RawCode::temp_group(0), RawCode::pause(5)]
/// );
/// ```
#[must_use = "tokenizing returns codes that should be used"]
pub fn tokenize(bytes: &[u8]) -> Vec<RawCode> {
    let mut out = Vec::with_capacity(bytes.len());
    out.extend(codes(bytes));
    out
}

/// Tokenize a byte stream, rejecting a truncated trailing long code
///
/// # Errors
/// Returns `DecodeError::TruncatedLongCode` if the stream ends between the
/// header and tail byte of a long code.
pub fn tokenize_strict(bytes: &[u8]) -> Result<Vec<RawCode>, DecodeError> {
    let mut tokenizer = Tokenizer::new();
    let mut out = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        if let Some(code) = tokenizer.push(byte) {
            out.push(code);
        }
    }
    tokenizer.finish()?;
    Ok(out)
}
