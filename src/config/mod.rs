#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_START: i64 = 1;
pub const DEFAULT_END: i64 = 10;
pub const DEFAULT_DELAY_SECONDS: f64 = 1.0;
pub const DEFAULT_SKIP_PROBABILITY: f64 = 0.1;
pub const DEFAULT_SCANNER_ID: &str = "Scanner1";

/// One source of settings. Every field is optional so layers can be stacked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigLayer {
    pub csv_path: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub delay_seconds: Option<f64>,
    pub skip_probability: Option<f64>,
    pub scanner_id: Option<String>,
    pub seed: Option<u64>,
}

impl ConfigLayer {
    /// 以 `self` 為優先，缺少的欄位由 `lower` 補上
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            csv_path: self.csv_path.or(lower.csv_path),
            start: self.start.or(lower.start),
            end: self.end.or(lower.end),
            delay_seconds: self.delay_seconds.or(lower.delay_seconds),
            skip_probability: self.skip_probability.or(lower.skip_probability),
            scanner_id: self.scanner_id.or(lower.scanner_id),
            seed: self.seed.or(lower.seed),
        }
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub csv_path: String,
    pub start: u32,
    pub end: u32,
    pub delay_seconds: f64,
    pub skip_probability: f64,
    pub scanner_id: String,
    pub seed: Option<u64>,
}

impl ScanConfig {
    /// Merges `layer` over the built-in defaults and validates the result.
    pub fn resolve(layer: ConfigLayer) -> Result<Self> {
        let csv_path = layer.csv_path.ok_or_else(|| ScanError::MissingConfigError {
            field: "csv_file".to_string(),
        })?;
        let start = layer.start.unwrap_or(DEFAULT_START);
        let end = layer.end.unwrap_or(DEFAULT_END);

        // 範圍檢查在 i64 上做，負數也能得到正確的錯誤訊息
        validation::validate_min("start", start, 1, "Start sheet must be >= 1")?;
        validation::validate_min("end", end, start, "End sheet must be >= start sheet")?;

        let config = Self {
            csv_path,
            start: sheet_number("start", start)?,
            end: sheet_number("end", end)?,
            delay_seconds: layer.delay_seconds.unwrap_or(DEFAULT_DELAY_SECONDS),
            skip_probability: layer.skip_probability.unwrap_or(DEFAULT_SKIP_PROBABILITY),
            scanner_id: layer
                .scanner_id
                .unwrap_or_else(|| DEFAULT_SCANNER_ID.to_string()),
            seed: layer.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

fn sheet_number(field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ScanError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Sheet numbers must not exceed {}", u32::MAX),
    })
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("csv_file", &self.csv_path)?;
        validation::validate_delay("delay", self.delay_seconds)?;
        validation::validate_range(
            "skip",
            self.skip_probability,
            0.0,
            1.0,
            "Skip probability must be between 0 and 1",
        )?;
        validation::validate_non_empty_string("scanner_id", &self.scanner_id)?;
        Ok(())
    }
}

impl ConfigProvider for ScanConfig {
    fn csv_path(&self) -> &str {
        &self.csv_path
    }

    fn start_sheet(&self) -> u32 {
        self.start
    }

    fn end_sheet(&self) -> u32 {
        self.end
    }

    fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_seconds).unwrap_or_default()
    }

    fn skip_probability(&self) -> f64 {
        self.skip_probability
    }

    fn scanner_id(&self) -> &str {
        &self.scanner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with_path() -> ConfigLayer {
        ConfigLayer {
            csv_path: Some("scans.csv".to_string()),
            ..ConfigLayer::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let config = ScanConfig::resolve(layer_with_path()).unwrap();

        assert_eq!(config.start, 1);
        assert_eq!(config.end, 10);
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert_eq!(config.skip_probability, 0.1);
        assert_eq!(config.scanner_id, "Scanner1");
        assert_eq!(config.seed, None);
        assert_eq!(config.total_sheets(), 10);
    }

    #[test]
    fn test_higher_layer_wins() {
        let cli = ConfigLayer {
            start: Some(5),
            ..ConfigLayer::default()
        };
        let file = ConfigLayer {
            csv_path: Some("from-file.csv".to_string()),
            start: Some(2),
            end: Some(20),
            ..ConfigLayer::default()
        };

        let config = ScanConfig::resolve(cli.or(file)).unwrap();
        assert_eq!(config.csv_path, "from-file.csv");
        assert_eq!(config.start, 5);
        assert_eq!(config.end, 20);
    }

    #[test]
    fn test_missing_path_rejected() {
        let err = ScanConfig::resolve(ConfigLayer::default()).unwrap_err();
        assert!(matches!(err, ScanError::MissingConfigError { ref field } if field == "csv_file"));
    }

    #[test]
    fn test_start_below_one_rejected() {
        for start in [0, -3] {
            let layer = ConfigLayer {
                start: Some(start),
                ..layer_with_path()
            };
            let err = ScanConfig::resolve(layer).unwrap_err();
            assert_eq!(err.user_friendly_message(), "Error: Start sheet must be >= 1");
        }
    }

    #[test]
    fn test_end_before_start_rejected() {
        let layer = ConfigLayer {
            start: Some(5),
            end: Some(4),
            ..layer_with_path()
        };
        let err = ScanConfig::resolve(layer).unwrap_err();
        assert_eq!(
            err.user_friendly_message(),
            "Error: End sheet must be >= start sheet"
        );
    }

    #[test]
    fn test_single_sheet_range_allowed() {
        let layer = ConfigLayer {
            start: Some(7),
            end: Some(7),
            ..layer_with_path()
        };
        let config = ScanConfig::resolve(layer).unwrap();
        assert_eq!(config.total_sheets(), 1);
    }

    #[test]
    fn test_skip_out_of_range_rejected() {
        for skip in [-0.01, 1.01] {
            let layer = ConfigLayer {
                skip_probability: Some(skip),
                ..layer_with_path()
            };
            let err = ScanConfig::resolve(layer).unwrap_err();
            assert_eq!(
                err.user_friendly_message(),
                "Error: Skip probability must be between 0 and 1"
            );
        }
    }

    #[test]
    fn test_negative_delay_rejected() {
        let layer = ConfigLayer {
            delay_seconds: Some(-0.5),
            ..layer_with_path()
        };
        assert!(ScanConfig::resolve(layer).is_err());
    }

    #[test]
    fn test_oversized_sheet_number_rejected() {
        let layer = ConfigLayer {
            end: Some(i64::from(u32::MAX) + 1),
            ..layer_with_path()
        };
        let err = ScanConfig::resolve(layer).unwrap_err();
        assert!(matches!(err, ScanError::InvalidConfigValueError { ref field, .. } if field == "end"));
    }
}
