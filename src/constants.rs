//! Bit-pattern thresholds of the flow log encoding.

/// Header bytes at or above this value start a two-byte long code (top bits `111`)
pub(crate) const LONG_CODE_MIN: u8 = 0xE0;

/// Single bytes in `[TEMP_GROUP_MIN, LONG_CODE_MIN)` are temperature-group markers
pub(crate) const TEMP_GROUP_MIN: u8 = 0xDC;

/// Long codes at or above this value are pauses
pub(crate) const PAUSE_BASE: u16 = 0xF000;

/// Long codes below `PAUSE_BASE` are absolute readouts offset from this base
pub(crate) const ABSOLUTE_BASE: u16 = 0xE000;

/// Delta byte that encodes "unchanged"
pub(crate) const DELTA_ZERO: u16 = 109;

/// Scale applied to the quarter-unit family (type id 0)
pub(crate) const QUARTER_UNIT_SCALE: f64 = 0.25;

/// Delta carried by a single-byte code, as a wrapping `u16` increment.
///
/// Bytes below 109 yield a two's-complement negative step, so
/// `acc.wrapping_add(delta)` moves the accumulator down.
#[inline]
pub(crate) fn delta_of(byte: u8) -> u16 {
    u16::from(byte).wrapping_sub(DELTA_ZERO)
}
