//! Temporal expansion of codes into a per-second series.

use crate::code::{CodeKind, RawCode};
use crate::reading::Reading;

/// Expander state: timestamp cursor and active temperature group
///
/// # Example
/// ```
/// use flowlog::{Expander, RawCode};
///
/// let mut exp = Expander::new(1000);
/// let mut out = Vec::new();
/// exp.push(RawCode::temp_group(2), &mut out);
/// exp.push(RawCode::pause(3), &mut out);
/// assert_eq!(out.len(), 3);
/// assert_eq!(exp.cursor(), 1003);
/// assert!(out.iter().all(|r| r.temp_group == Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    ts: i64,
    temp_group: Option<u16>,
}

impl Expander {
    #[inline]
    #[must_use]
    pub const fn new(start_ts: i64) -> Self {
        Self { ts: start_ts, temp_group: None }
    }

    /// Timestamp the next reading will carry
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> i64 {
        self.ts
    }

    /// Temperature group that tags the next reading
    #[inline]
    #[must_use]
    pub const fn temp_group(&self) -> Option<u16> {
        self.temp_group
    }

    /// Expand one code, appending its readings to `out`
    #[inline]
    pub fn push(&mut self, code: RawCode, out: &mut Vec<Reading>) {
        match code.kind {
            CodeKind::TemperatureGroup => self.temp_group = Some(code.value),
            CodeKind::Pause => {
                let len = usize::from(code.value);
                out.reserve(len);
                for _ in 0..len {
                    self.emit(0, CodeKind::Pause, out);
                }
            }
            CodeKind::AbsoluteFlow | CodeKind::DeltaFlow => self.emit(code.value, code.kind, out),
        }
    }

    #[inline]
    fn emit(&mut self, value: u16, kind: CodeKind, out: &mut Vec<Reading>) {
        out.push(Reading { ts: self.ts, value, kind, temp_group: self.temp_group });
        self.ts = self.ts.saturating_add(1);
    }
}

/// Expand codes into one reading per elapsed second, starting at `start_ts`
///
/// # Example
/// ```
/// use flowlog::{expand, tokenize};
///
/// let readings = expand(&tokenize(&[0xF0, 0x05]), 1000);
/// assert_eq!(readings.len(), 5);
/// assert_eq!(readings[0].ts, 1000);
/// assert_eq!(readings[4].ts, 1004);
/// assert!(readings.iter().all(|r| r.value == 0));
/// ```
#[must_use = "expanding returns readings that should be used"]
pub fn expand(codes: &[RawCode], start_ts: i64) -> Vec<Reading> {
    expand_iter(codes.iter().copied(), start_ts)
}

/// Expand a stream of codes without collecting them first
pub(crate) fn expand_iter<I: IntoIterator<Item = RawCode>>(codes: I, start_ts: i64) -> Vec<Reading> {
    let codes = codes.into_iter();
    let mut out = Vec::with_capacity(codes.size_hint().0);
    let mut expander = Expander::new(start_ts);
    for code in codes {
        expander.push(code, &mut out);
    }
    out
}
