use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: [&str; 3] = ["sheet_number", "timestamp", "scanner_id"];
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the scan log. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub sheet_number: u32,
    pub timestamp: String,
    pub scanner_id: String,
}

impl ScanRecord {
    pub fn new(sheet_number: u32, at: DateTime<Local>, scanner_id: &str) -> Self {
        Self {
            sheet_number,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            scanner_id: scanner_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    Scanned { sheet: u32, position: u32, total: u32 },
    Skipped { sheet: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: u32,
    pub scanned_count: u32,
    pub skipped_sheets: Vec<u32>,
    pub interrupted: bool,
}

impl ScanSummary {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn skipped_count(&self) -> u32 {
        self.skipped_sheets.len() as u32
    }

    /// Sheets neither scanned nor skipped, non-zero only after an interrupt.
    pub fn unvisited_count(&self) -> u32 {
        self.total - self.scanned_count - self.skipped_count()
    }
}
