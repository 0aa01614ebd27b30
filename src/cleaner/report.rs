use serde::Serialize;
use std::path::PathBuf;

use crate::common::errors::CleanError;
use crate::common::format;

/// Line appended to the log once every entry has been attempted
pub const COMPLETION_MARKER: &str = "---- Selected items were deleted ----";

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The file or directory was removed
    Success { bytes_freed: u64 },
    /// Nothing exists at the entry's path
    NotFound { message: String },
    /// The entry resolves outside `exd/` and was not attempted
    Rejected { reason: String },
    /// Stat or delete failed for any other reason
    OtherError { message: String },
    /// The target folder is missing; the run stopped before any entry
    TargetMissing { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Map a per-entry failure to the outcome it is reported as
    pub fn from_error(err: &CleanError) -> Self {
        match err {
            CleanError::TargetMissing { .. } => Outcome::TargetMissing {
                message: err.to_string(),
            },
            CleanError::ItemRejected { .. } => Outcome::Rejected {
                reason: err.to_string(),
            },
            e if e.is_not_found() => Outcome::NotFound {
                message: err.to_string(),
            },
            _ => Outcome::OtherError {
                message: err.to_string(),
            },
        }
    }
}

/// One line of a deletion report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub item_name: String,
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ReportEntry {
    /// Human-readable log line for this entry
    pub fn log_line(&self) -> String {
        match &self.outcome {
            Outcome::Success { bytes_freed } if *bytes_freed > 0 => format!(
                "✅ Deleted: {} ({})",
                self.item_name,
                format::format_size(*bytes_freed)
            ),
            Outcome::Success { .. } => format!("✅ Deleted: {}", self.item_name),
            Outcome::NotFound { message } | Outcome::OtherError { message } => {
                format!("❌ {}", message)
            }
            Outcome::Rejected { reason } => format!("⚠ {}", reason),
            Outcome::TargetMissing { message } => message.clone(),
        }
    }
}

/// Everything a single run produced, in entry order
#[derive(Debug, Clone, Serialize)]
pub struct DeletionReport {
    pub target_folder: PathBuf,
    pub entries: Vec<ReportEntry>,
    /// False when the run stopped before attempting any entry
    pub completed: bool,
}

impl DeletionReport {
    pub fn aborted(target_folder: PathBuf, err: &CleanError) -> Self {
        Self {
            entries: vec![ReportEntry {
                item_name: target_folder.display().to_string(),
                path: Some(target_folder.clone()),
                outcome: Outcome::from_error(err),
            }],
            target_folder,
            completed: false,
        }
    }

    pub fn successes(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.entries.len() - self.successes()
    }

    pub fn bytes_freed(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| match e.outcome {
                Outcome::Success { bytes_freed } => bytes_freed,
                _ => 0,
            })
            .sum()
    }

    /// Log lines for the whole run; the completion marker only follows a
    /// run that got past the target folder check
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.entries.iter().map(ReportEntry::log_line).collect();
        if self.completed {
            lines.push(String::new());
            lines.push(COMPLETION_MARKER.to_string());
            lines.push(String::new());
        }
        lines
    }
}
