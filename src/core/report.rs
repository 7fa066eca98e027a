//! Console text for a scan run.

use crate::domain::model::{ScanEvent, ScanSummary};
use crate::domain::ports::ConfigProvider;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn join_sheets(sheets: &[u32]) -> String {
    sheets
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn banner<C: ConfigProvider>(config: &C) -> String {
    let delay_seconds = config.delay().as_secs_f64();
    [
        "📊 CSV Scanner Simulator".to_string(),
        rule(),
        format!("File: {}", config.csv_path()),
        format!("Range: {} - {}", config.start_sheet(), config.end_sheet()),
        format!("Delay: {:?} seconds", delay_seconds),
        format!("Skip probability: {:.1}%", config.skip_probability() * 100.0),
        rule(),
        String::new(),
    ]
    .join("\n")
}

pub fn created_notice() -> &'static str {
    "✅ Created new CSV file with headers\n"
}

pub fn event_line(event: &ScanEvent) -> String {
    match event {
        ScanEvent::Scanned {
            sheet,
            position,
            total,
        } => format!("✓ Scanned sheet {} ({}/{})", sheet, position, total),
        ScanEvent::Skipped { sheet } => format!("⏭️  Skipped sheet {}", sheet),
    }
}

pub fn summary(summary: &ScanSummary) -> String {
    let mut lines = vec![String::new()];

    if summary.interrupted {
        lines.push(String::new());
        lines.push("⏸️  Scanning interrupted!".to_string());
        lines.push(format!("📄 Scanned so far: {}", summary.scanned_count));
        if !summary.skipped_sheets.is_empty() {
            lines.push(format!("⚠️  Skipped: {}", join_sheets(&summary.skipped_sheets)));
        }
    } else {
        lines.push(rule());
        lines.push("✅ Scanning complete!".to_string());
        lines.push(format!("📄 Total scanned: {}", summary.scanned_count));
        lines.push(format!("⚠️  Skipped sheets: {}", summary.skipped_count()));
        if !summary.skipped_sheets.is_empty() {
            lines.push(format!("   Missing: {}", join_sheets(&summary.skipped_sheets)));
        }
        lines.push(rule());
    }

    lines.join("\n")
}
