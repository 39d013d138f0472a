//! Device records and the record to flow-rate pipeline.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::DecodeError;
use crate::expander::{expand, expand_iter};
use crate::reading::Reading;
use crate::tokenizer::{codes, tokenize_strict};

/// One uploaded log from a flow-metering device
///
/// Missing or `null` fields decode to their zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub serial_no: String,
    /// Unix timestamp of the first second in `codes`
    #[serde(default, deserialize_with = "null_as_default")]
    pub ts: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rssi: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snr: f32,
    /// Encoded code stream; base64 in JSON, an integer array is also accepted
    #[serde(default, serialize_with = "serialize_codes", deserialize_with = "deserialize_codes")]
    pub codes: Vec<u8>,
}

/// One second of physical flow rate for a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRate {
    pub serial_no: String,
    pub ts: i64,
    pub value: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CodesRepr {
    Base64(String),
    Bytes(Vec<u8>),
}

fn deserialize_codes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    match Option::<CodesRepr>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(CodesRepr::Bytes(bytes)) => Ok(bytes),
        Some(CodesRepr::Base64(s)) => STANDARD
            .decode(s.as_bytes())
            .map_err(|e| de::Error::custom(format!("invalid base64 in codes: {e}"))),
    }
}

fn serialize_codes<S: Serializer>(codes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(codes))
}

/// Decode a code stream into its per-second series
///
/// # Example
/// ```
/// use flowlog::{decode_series, CodeKind};
///
/// let series = decode_series(&[0xE0, 0x10, 110], 1_600_000_000);
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[1].kind, CodeKind::DeltaFlow);
/// assert_eq!(series[1].value, 17);
/// assert_eq!(series[1].ts, 1_600_000_001);
/// ```
#[must_use]
pub fn decode_series(bytes: &[u8], start_ts: i64) -> Vec<Reading> {
    expand_iter(codes(bytes), start_ts)
}

fn to_flow_rates(serial_no: &str, readings: &[Reading]) -> Vec<FlowRate> {
    readings
        .iter()
        .filter_map(|r| {
            r.flow_rate().map(|value| FlowRate { serial_no: serial_no.to_owned(), ts: r.ts, value })
        })
        .collect()
}

fn log_summary(log: &FlowLog, rates: usize) {
    debug!("{}: {} code bytes -> {} readings from ts {}", log.serial_no, log.codes.len(), rates, log.ts);
}

/// Decode one device record into flow rates
///
/// Temperature-group markers only tag readings and are not part of the output.
#[must_use]
pub fn flow_rates(log: &FlowLog) -> Vec<FlowRate> {
    let readings = decode_series(&log.codes, log.ts);
    let rates = to_flow_rates(&log.serial_no, &readings);
    log_summary(log, rates.len());
    rates
}

/// Decode one device record, rejecting a truncated code stream
///
/// # Errors
/// Returns `DecodeError::TruncatedLongCode` if the record's stream ends inside
/// a long code.
pub fn flow_rates_strict(log: &FlowLog) -> Result<Vec<FlowRate>, DecodeError> {
    let codes = tokenize_strict(&log.codes)?;
    let readings = expand(&codes, log.ts);
    let rates = to_flow_rates(&log.serial_no, &readings);
    log_summary(log, rates.len());
    Ok(rates)
}

/// Decode every record, in order
///
/// Each record is decoded from fresh state.
#[must_use]
pub fn flow_rates_all(logs: &[FlowLog]) -> Vec<FlowRate> {
    logs.iter().flat_map(flow_rates).collect()
}
