//! Decode device flow logs into per-second flow rates.

use clap::Parser;
use flowlog::{flow_rates, flow_rates_strict, FlowLog, FlowRate};
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flowlog")]
#[command(about = "Decode device flow logs into per-second flow rates")]
#[command(after_help = "INPUT FORMAT:\n  \
    A JSON array of records: {\"serial_no\", \"ts\", \"rssi\", \"snr\", \"codes\"}\n  \
    - ts is the Unix timestamp of the first second in the log\n  \
    - codes is the base64 encoded code stream (an array of bytes is also accepted)\n\n\
OUTPUT FORMAT:\n  \
    A JSON array of {\"serial_no\", \"ts\", \"value\"}, one entry per second\n\n\
Set RUST_LOG=debug for a per-record summary.")]
struct Args {
    /// Input JSON file with device records
    #[arg(default_value = "../Data/flows.json")]
    input: PathBuf,

    /// Output JSON file for flow rates
    #[arg(default_value = "../Data/flow_rates.json")]
    output: PathBuf,

    /// Fail on a code stream that ends inside a long code instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

/// Read device records from a JSON file
fn read_logs(path: &PathBuf) -> Result<Vec<FlowLog>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Decode every record in order
fn decode_logs(logs: &[FlowLog], strict: bool) -> Result<Vec<FlowRate>, String> {
    let mut series = Vec::new();
    for log in logs {
        if strict {
            let rates = flow_rates_strict(log).map_err(|e| format!("Record {}: {e}", log.serial_no))?;
            series.extend(rates);
        } else {
            series.extend(flow_rates(log));
        }
    }
    Ok(series)
}

/// Write flow rates to a JSON file
fn write_rates(path: &PathBuf, series: &[FlowRate], compact: bool) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let written = if compact {
        serde_json::to_writer(&mut writer, series)
    } else {
        serde_json::to_writer_pretty(&mut writer, series)
    };
    written.map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    writer.flush().map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn run(args: &Args) -> Result<(), String> {
    let logs = read_logs(&args.input)?;
    info!("Read {} records from {}", logs.len(), args.input.display());

    let series = decode_logs(&logs, args.strict)?;
    info!("Decoded {} flow rates", series.len());

    write_rates(&args.output, &series, args.compact)?;
    info!("Output: {}", args.output.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("DONE");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(serial_no: &str, codes: &[u8]) -> FlowLog {
        FlowLog { serial_no: serial_no.to_owned(), ts: 1000, rssi: 0.0, snr: 0.0, codes: codes.to_vec() }
    }

    #[test]
    fn test_decode_logs_lenient_drops_truncated_code() {
        let logs = [log("A", &[110, 0xE0]), log("B", &[0xF0, 0x02])];
        let series = decode_logs(&logs, false).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].serial_no, "A");
        assert_eq!(series[2].serial_no, "B");
    }

    #[test]
    fn test_decode_logs_strict_rejects_truncated_code() {
        let logs = [log("A", &[110]), log("B", &[110, 0xE0])];
        let err = decode_logs(&logs, true).unwrap_err();
        assert!(err.starts_with("Record B: "), "{err}");
        assert!(err.contains("0xE0 at offset 1"), "{err}");
    }

    #[test]
    fn test_decode_logs_strict_accepts_whole_streams() {
        let logs = [log("A", &[0xE0, 0x10, 110])];
        assert_eq!(decode_logs(&logs, true).unwrap(), decode_logs(&logs, false).unwrap());
    }
}
