//! Error types for flow log decoding.

use std::fmt;

/// Error returned by the strict decoding path
///
/// The lenient path (`tokenize`, `expand`) never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream ended after the header byte of a long code
    TruncatedLongCode { offset: usize, header: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedLongCode { offset, header } => {
                write!(
                    f,
                    "stream truncated inside long code: header byte 0x{header:02X} at offset {offset} has no tail byte"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
