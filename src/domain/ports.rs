use crate::domain::model::ScanRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for scanned rows.
#[async_trait]
pub trait ScanSink: Send {
    async fn append(&mut self, record: &ScanRecord) -> Result<()>;
}

/// Decides whether a sheet is "missed" by the scanner.
pub trait SkipPolicy: Send {
    fn should_skip(&mut self, sheet: u32) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn csv_path(&self) -> &str;
    fn start_sheet(&self) -> u32;
    fn end_sheet(&self) -> u32;
    fn delay(&self) -> Duration;
    fn skip_probability(&self) -> f64;
    fn scanner_id(&self) -> &str;

    fn total_sheets(&self) -> u32 {
        self.end_sheet() - self.start_sheet() + 1
    }
}
