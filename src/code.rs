//! Typed codes produced by the tokenizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::QUARTER_UNIT_SCALE;

/// Kind of a decoded code
///
/// The discriminants are the numeric type ids the device backend uses for
/// each family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CodeKind {
    /// Absolute flow readout from a long code; resynchronizes the accumulator
    AbsoluteFlow = 2,
    /// Run of idle seconds from a long code
    Pause = 3,
    /// Single-byte increment applied to the accumulator
    DeltaFlow = 4,
    /// Marker that tags the readings after it with a temperature bucket
    TemperatureGroup = 5,
}

impl CodeKind {
    /// Numeric type id of this kind
    #[inline]
    #[must_use]
    pub const fn type_id(self) -> u8 {
        self as u8
    }

    /// Whether readings of this kind end up in the flow-rate output
    #[inline]
    #[must_use]
    pub const fn is_flow_bearing(self) -> bool {
        !matches!(self, Self::TemperatureGroup)
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AbsoluteFlow => "absolute",
            Self::Pause => "pause",
            Self::DeltaFlow => "dt",
            Self::TemperatureGroup => "temp",
        };
        f.write_str(name)
    }
}

/// Scale factor from a raw value to a physical flow rate for a type id
///
/// | Type id | Family | Scale |
/// |---------|--------|-------|
/// | 0 | quarter-unit flow | `1/4` |
/// | anything else | | `1` |
#[inline]
#[must_use]
pub const fn scale_for_type_id(type_id: u8) -> f64 {
    match type_id {
        0 => QUARTER_UNIT_SCALE,
        _ => 1.0,
    }
}

/// A single code from the byte stream
///
/// For `DeltaFlow` the value is the accumulator after applying the delta, not
/// the delta itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawCode {
    pub kind: CodeKind,
    pub value: u16,
}

impl RawCode {
    #[inline]
    #[must_use]
    pub const fn new(kind: CodeKind, value: u16) -> Self {
        Self { kind, value }
    }

    #[inline]
    #[must_use]
    pub const fn pause(len: u16) -> Self {
        Self::new(CodeKind::Pause, len)
    }

    #[inline]
    #[must_use]
    pub const fn absolute(flow: u16) -> Self {
        Self::new(CodeKind::AbsoluteFlow, flow)
    }

    #[inline]
    #[must_use]
    pub const fn delta(flow: u16) -> Self {
        Self::new(CodeKind::DeltaFlow, flow)
    }

    #[inline]
    #[must_use]
    pub const fn temp_group(group: u16) -> Self {
        Self::new(CodeKind::TemperatureGroup, group)
    }
}
