use anyhow::Result;
use scan_sim::core::ConfigProvider;
use scan_sim::{ConfigLayer, CsvFileSink, RandomSkip, ScanConfig, ScanSimulator};
use std::path::Path;
use tempfile::TempDir;

fn config_for(path: &Path, start: i64, end: i64, skip: f64, seed: Option<u64>) -> Result<ScanConfig> {
    let layer = ConfigLayer {
        csv_path: Some(path.to_string_lossy().into_owned()),
        start: Some(start),
        end: Some(end),
        delay_seconds: Some(0.0),
        skip_probability: Some(skip),
        scanner_id: None,
        seed,
    };
    Ok(ScanConfig::resolve(layer)?)
}

fn read_sheet_numbers(path: &Path) -> Result<Vec<u32>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["sheet_number", "timestamp", "scanner_id"]
    );

    let mut sheets = Vec::new();
    for row in reader.records() {
        let row = row?;
        assert_eq!(&row[2], "Scanner1");
        assert_eq!(row[1].len(), "2024-01-01 00:00:00".len());
        sheets.push(row[0].parse()?);
    }
    Ok(sheets)
}

async fn run_once(config: ScanConfig) -> Result<scan_sim::core::ScanSummary> {
    let sink = CsvFileSink::open(config.csv_path())?;
    let policy = RandomSkip::new(config.skip_probability, config.seed);
    let mut simulator = ScanSimulator::new(sink, policy, config);
    Ok(simulator.run(std::future::pending()).await?)
}

#[tokio::test]
async fn test_counts_cover_whole_range() -> Result<()> {
    let temp_dir = TempDir::new()?;

    for (i, (start, end)) in [(1, 1), (1, 10), (5, 40), (100, 163)].into_iter().enumerate() {
        let path = temp_dir.path().join(format!("run{}.csv", i));
        let config = config_for(&path, start, end, 0.3, Some(i as u64))?;

        let summary = run_once(config).await?;

        assert!(!summary.interrupted);
        assert_eq!(
            summary.scanned_count + summary.skipped_count(),
            (end - start + 1) as u32
        );

        let written = read_sheet_numbers(&path)?;
        assert_eq!(written.len() as u32, summary.scanned_count);
        for sheet in &summary.skipped_sheets {
            assert!(!written.contains(sheet));
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_zero_skip_probability_scans_everything() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scans.csv");

    let summary = run_once(config_for(&path, 1, 25, 0.0, None)?).await?;

    assert!(summary.skipped_sheets.is_empty());
    assert_eq!(read_sheet_numbers(&path)?, (1..=25).collect::<Vec<u32>>());
    Ok(())
}

#[tokio::test]
async fn test_full_skip_probability_scans_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scans.csv");

    let summary = run_once(config_for(&path, 1, 25, 1.0, None)?).await?;

    assert_eq!(summary.scanned_count, 0);
    assert_eq!(summary.skipped_sheets, (1..=25).collect::<Vec<u32>>());
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "sheet_number,timestamp,scanner_id\r\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_second_run_appends_without_new_header() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scans.csv");

    run_once(config_for(&path, 1, 3, 0.0, None)?).await?;
    run_once(config_for(&path, 4, 6, 0.0, None)?).await?;

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content.matches("sheet_number").count(), 1);
    assert_eq!(read_sheet_numbers(&path)?, vec![1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let first = run_once(config_for(&temp_dir.path().join("a.csv"), 1, 50, 0.4, Some(1234))?).await?;
    let second = run_once(config_for(&temp_dir.path().join("b.csv"), 1, 50, 0.4, Some(1234))?).await?;

    assert_eq!(first.skipped_sheets, second.skipped_sheets);
    assert_eq!(first.scanned_count, second.scanned_count);
    Ok(())
}
