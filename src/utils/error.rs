use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
}

impl ScanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::CsvError(_) | ScanError::IoError(_) | ScanError::SerializationError(_) => {
                ErrorCategory::Io
            }
            ScanError::ConfigParseError { .. }
            | ScanError::MissingConfigError { .. }
            | ScanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 給終端使用者看的訊息，不含內部型別名稱
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::InvalidConfigValueError { reason, .. } => format!("Error: {}", reason),
            ScanError::MissingConfigError { field } => {
                format!("Error: {} is required", field)
            }
            ScanError::ConfigParseError { message } => format!("Error: {}", message),
            ScanError::IoError(e) => format!("Error: could not access the CSV file ({})", e),
            ScanError::CsvError(e) => format!("Error: could not write CSV row ({})", e),
            ScanError::SerializationError(e) => format!("Error: could not encode summary ({})", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScanError::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for {}", field)
            }
            ScanError::MissingConfigError { field } => {
                format!("Pass {} on the command line or set it in the config file", field)
            }
            ScanError::ConfigParseError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            ScanError::IoError(_) | ScanError::CsvError(_) => {
                "Check that the output path is writable and not locked by another program"
                    .to_string()
            }
            ScanError::SerializationError(_) => "Re-run without --json-summary".to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Io => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
