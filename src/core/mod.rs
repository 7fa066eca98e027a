pub mod report;
pub mod simulator;

pub use crate::domain::model::{ScanEvent, ScanRecord, ScanSummary};
pub use crate::domain::ports::{ConfigProvider, ScanSink, SkipPolicy};
pub use crate::utils::error::Result;
