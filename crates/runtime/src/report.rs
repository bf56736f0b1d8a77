//! At-exit report
//!
//! Dumps runtime KPIs when the program finishes, controlled by the
//! `PRIMER_REPORT` env var:
//! - Unset or `0` → no report
//! - `1` → human-readable to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file
//!
//! JSON output needs the `report-json` feature (on by default); without it a
//! JSON request falls back to the human format.

use crate::conduit::{TOTAL_MESSAGES_RECEIVED, TOTAL_MESSAGES_SENT};
use crate::receiver::{RACES_DELIVERED, RACES_TIMED_OUT};
use crate::scheduler::{PEAK_STRANDS, TOTAL_COMPLETED, TOTAL_SPAWNED, scheduler_elapsed};
use std::io::Write;
use std::sync::atomic::Ordering;
use tracing::warn;

pub const REPORT_VAR: &str = "PRIMER_REPORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse from the `PRIMER_REPORT` environment variable
    pub fn from_env() -> Option<Self> {
        Self::parse(&std::env::var(REPORT_VAR).ok()?)
    }

    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "" | "0" => None,
            "1" => Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            }),
            "json" => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            }),
            s if s.starts_with("json:") && s.len() > 5 => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::File(s[5..].to_string()),
            }),
            _ => {
                warn!("{}='{}' not recognized, ignoring", REPORT_VAR, val);
                None
            }
        }
    }
}

/// Snapshot of the runtime counters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "report-json", derive(serde::Serialize))]
pub struct ReportData {
    pub wall_clock_ms: u64,
    pub strands_spawned: u64,
    pub strands_completed: u64,
    pub peak_strands: usize,
    pub messages_sent: u64,
    pub messages_received: u64,
    pub races_delivered: u64,
    pub races_timed_out: u64,
}

pub fn collect_report_data() -> ReportData {
    ReportData {
        wall_clock_ms: scheduler_elapsed()
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
        strands_spawned: TOTAL_SPAWNED.load(Ordering::Relaxed),
        strands_completed: TOTAL_COMPLETED.load(Ordering::Relaxed),
        peak_strands: PEAK_STRANDS.load(Ordering::Relaxed),
        messages_sent: TOTAL_MESSAGES_SENT.load(Ordering::Relaxed),
        messages_received: TOTAL_MESSAGES_RECEIVED.load(Ordering::Relaxed),
        races_delivered: RACES_DELIVERED.load(Ordering::Relaxed),
        races_timed_out: RACES_TIMED_OUT.load(Ordering::Relaxed),
    }
}

pub fn format_human(data: &ReportData) -> String {
    let mut out = String::new();
    out.push_str("=== PRIMER REPORT ===\n");
    out.push_str(&format!("Wall clock:      {} ms\n", data.wall_clock_ms));
    out.push_str(&format!("Strands spawned: {}\n", data.strands_spawned));
    out.push_str(&format!("Strands done:    {}\n", data.strands_completed));
    out.push_str(&format!("Peak strands:    {}\n", data.peak_strands));
    out.push_str(&format!("Messages sent:   {}\n", data.messages_sent));
    out.push_str(&format!("Messages recv:   {}\n", data.messages_received));
    out.push_str(&format!("Races delivered: {}\n", data.races_delivered));
    out.push_str(&format!("Races timed out: {}\n", data.races_timed_out));
    out.push_str("=====================\n");
    out
}

#[cfg(feature = "report-json")]
pub fn format_json(data: &ReportData) -> String {
    match serde_json::to_string_pretty(data) {
        Ok(json) => json + "\n",
        Err(e) => {
            warn!("failed to encode report as JSON: {}", e);
            format_human(data)
        }
    }
}

#[cfg(not(feature = "report-json"))]
pub fn format_json(data: &ReportData) -> String {
    warn!("JSON report requested but the report-json feature is disabled");
    format_human(data)
}

/// Render the report for `config`.
pub fn render(config: &ReportConfig, data: &ReportData) -> String {
    match config.format {
        ReportFormat::Human => format_human(data),
        ReportFormat::Json => format_json(data),
    }
}

/// Emit the report if `PRIMER_REPORT` asks for one.
pub fn emit_report() {
    if let Some(config) = ReportConfig::from_env() {
        emit_report_with(&config);
    }
}

pub fn emit_report_with(config: &ReportConfig) {
    let output = render(config, &collect_report_data());
    match &config.destination {
        ReportDestination::Stderr => {
            let _ = std::io::stderr().write_all(output.as_bytes());
        }
        ReportDestination::File(path) => {
            if let Err(e) = std::fs::write(path, &output) {
                warn!("failed to write report to {}: {}", path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportData {
        ReportData {
            wall_clock_ms: 1500,
            strands_spawned: 2,
            strands_completed: 2,
            peak_strands: 1,
            messages_sent: 2,
            messages_received: 1,
            races_delivered: 1,
            races_timed_out: 1,
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReportConfig::parse(""), None);
        assert_eq!(ReportConfig::parse("0"), None);
        assert_eq!(
            ReportConfig::parse("1").map(|c| c.format),
            Some(ReportFormat::Human)
        );
        assert_eq!(
            ReportConfig::parse("json").map(|c| c.destination),
            Some(ReportDestination::Stderr)
        );
        assert_eq!(
            ReportConfig::parse("json:/tmp/out.json").map(|c| c.destination),
            Some(ReportDestination::File("/tmp/out.json".to_string()))
        );
        assert_eq!(ReportConfig::parse("json:"), None);
        assert_eq!(ReportConfig::parse("yaml"), None);
    }

    #[test]
    fn test_format_human() {
        let text = format_human(&sample());
        assert!(text.starts_with("=== PRIMER REPORT ==="));
        assert!(text.contains("Races timed out: 1"));
        assert!(text.contains("Wall clock:      1500 ms"));
    }

    #[test]
    #[cfg(feature = "report-json")]
    fn test_format_json() {
        let json = format_json(&sample());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["races_delivered"], 1);
        assert_eq!(parsed["wall_clock_ms"], 1500);
    }

    #[test]
    #[cfg(feature = "report-json")]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let config = ReportConfig {
            format: ReportFormat::Json,
            destination: ReportDestination::File(path.display().to_string()),
        };

        emit_report_with(&config);

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert!(parsed.get("strands_spawned").is_some());
    }
}
