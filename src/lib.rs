//! `flowlog` - Decoder for the compact flow-meter log encoding
//!
//! Flow-metering devices upload their history as a short byte stream of
//! variable-length codes. This crate turns such a stream into a uniform
//! per-second series of flow readings.
//!
//! Decoding happens in two stages:
//! - **Tokenizer**: bytes → typed codes (`Pause`, `AbsoluteFlow`, `DeltaFlow`,
//!   `TemperatureGroup`), tracking the running flow accumulator
//! - **Expander**: codes → one `Reading` per elapsed second, expanding pauses
//!   and tagging readings with the active temperature group
//!
//! # Example
//! ```
//! use flowlog::{expand, tokenize, CodeKind};
//!
//! // absolute readout 16, then +1, then a 3 second pause
//! let bytes = [0xE0, 0x10, 110, 0xF0, 0x03];
//! let readings = expand(&tokenize(&bytes), 1_600_000_000);
//!
//! assert_eq!(readings.len(), 5);
//! assert_eq!(readings[0].value, 16);
//! assert_eq!(readings[1].value, 17);
//! assert_eq!(readings[4].kind, CodeKind::Pause);
//! assert_eq!(readings[4].ts, 1_600_000_004);
//! ```
//!
//! # Wire Format
//!
//! The stream has no header. Each code is one or two bytes:
//!
//! | First byte | Bytes | Code | Value |
//! |------------|-------|------|-------|
//! | `0x00..0xDC` | 1 | delta flow | accumulator += `byte - 109` |
//! | `0xDC..0xE0` | 1 | temperature group | `byte - 0xDC` (0-3) |
//! | `0xE0..0xF0` | 2 | absolute flow | `code16 - 0xE000`, accumulator reset to it |
//! | `0xF0..=0xFF` | 2 | pause | `code16 - 0xF000` idle seconds |
//!
//! where `code16 = (first << 8) + second`.
//!
//! ## Accumulator
//!
//! Delta codes are relative to the running flow level. The level starts at 0,
//! moves with every delta and is overwritten by every absolute readout. All
//! arithmetic is `u16` with wraparound, so bytes below 109 step downwards.
//!
//! ## Expansion
//!
//! Every flow code takes one second. A pause of N takes N seconds, each with
//! value 0. Temperature-group markers take no time; they tag every following
//! reading until the next marker.
//!
//! ## Truncated Streams
//!
//! A stream that ends right after a long-code header byte has its incomplete
//! code dropped without error, matching the device backend. Use
//! [`tokenize_strict`] to reject such streams instead.

#![allow(clippy::cast_possible_truncation)]

mod code;
mod constants;
mod error;
mod expander;
mod reading;
mod series;
mod tokenizer;


// Re-export public API
pub use code::{scale_for_type_id, CodeKind, RawCode};
pub use error::DecodeError;
pub use expander::{expand, Expander};
pub use reading::Reading;
pub use series::{decode_series, flow_rates, flow_rates_all, flow_rates_strict, FlowLog, FlowRate};
pub use tokenizer::{codes, tokenize, tokenize_strict, Codes, Tokenizer};
