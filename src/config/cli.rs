use crate::config::ConfigLayer;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "scan-sim")]
#[command(about = "Simulate a document scanner by appending sheet numbers to a CSV file")]
pub struct CliConfig {
    /// Path to CSV file
    pub csv_file: Option<String>,

    /// Start sheet number (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// End sheet number (default: 10)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Delay between scans in seconds (default: 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub delay: Option<f64>,

    /// Probability of skipping sheets (default: 0.1)
    #[arg(long, allow_negative_numbers = true)]
    pub skip: Option<f64>,

    /// Scanner identifier written to every row (default: Scanner1)
    #[arg(long)]
    pub scanner_id: Option<String>,

    /// Seed for the skip generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the final summary as a JSON line
    #[arg(long)]
    pub json_summary: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            csv_path: self.csv_file.clone(),
            start: self.start,
            end: self.end,
            delay_seconds: self.delay,
            skip_probability: self.skip,
            scanner_id: self.scanner_id.clone(),
            seed: self.seed,
        }
    }
}
