//! Per-second readings produced by the expander.

use serde::{Deserialize, Serialize};

use crate::code::{scale_for_type_id, CodeKind};

/// One second of decoded flow data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Unix timestamp in seconds
    pub ts: i64,
    /// Raw value: accumulator level for flow codes, 0 for pauses
    pub value: u16,
    pub kind: CodeKind,
    /// Most recent temperature group, `None` until the first marker
    pub temp_group: Option<u16>,
}

impl Reading {
    /// Physical flow rate, or `None` for kinds that carry no flow
    #[inline]
    #[must_use]
    pub fn flow_rate(&self) -> Option<f64> {
        self.kind
            .is_flow_bearing()
            .then(|| f64::from(self.value) * scale_for_type_id(self.kind.type_id()))
    }
}
