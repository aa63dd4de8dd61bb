//! Structured journal reports, text and JSON.
//!
//! Text output is for humans reading test logs; the JSON form feeds
//! tooling that diffs journals between runs.

use serde::Serialize;

use engine_bridge::{EchoMode, MockEngine, ScriptEngine};

use crate::helpers::HarnessError;

/// A complete report over a recorded command journal.
#[derive(Debug, Serialize)]
pub struct JournalReport {
    pub entries: Vec<ReportEntry>,
    pub error_count: u64,
}

/// One dispatched command.
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub command: String,
    pub echo: EchoMode,
}

impl JournalReport {
    /// Snapshot the engine's journal and error counter.
    pub fn from_engine(engine: &MockEngine) -> Self {
        let entries = engine
            .journal()
            .iter()
            .enumerate()
            .map(|(index, entry)| ReportEntry {
                index,
                command: entry.command.clone(),
                echo: entry.echo,
            })
            .collect();
        Self {
            entries,
            error_count: engine.error_count(),
        }
    }

    /// Format the report as text for test logs.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Engine Command Journal ===\n\n");

        out.push_str(&format!("Commands ({}):\n", self.entries.len()));
        for entry in &self.entries {
            let mode = match entry.echo {
                EchoMode::Silent => "silent",
                EchoMode::Verbose => "verbose",
            };
            out.push_str(&format!("  [{}] ({}) {}\n", entry.index, mode, entry.command));
        }

        if self.error_count == 0 {
            out.push_str("\nEngine errors: none\n");
        } else {
            out.push_str(&format!("\nEngine errors: {}\n", self.error_count));
        }

        out
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        serde_json::to_string_pretty(self).map_err(|err| HarnessError::Report {
            reason: err.to_string(),
        })
    }
}
