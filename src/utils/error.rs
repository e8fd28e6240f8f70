use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Data source returned {status}: {message}")]
    SourceError { status: u16, message: String },

    #[error("Invalid record '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Io,
    Configuration,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ApiError(_) | CatalogError::SourceError { .. } => ErrorCategory::Network,
            CatalogError::CsvError(_)
            | CatalogError::SerializationError(_)
            | CatalogError::InvalidRecord { .. } => ErrorCategory::Data,
            CatalogError::ZipError(_) | CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::IndexOutOfRange { .. } => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::ApiError(_) => "Check network connectivity and the database URL",
            CatalogError::SourceError { status, .. } if *status == 401 || *status == 403 => {
                "Check the auth token and the database security rules"
            }
            CatalogError::SourceError { .. } => "Verify the collection path exists and retry",
            CatalogError::SerializationError(_) | CatalogError::InvalidRecord { .. } => {
                "Make sure the snapshot is a JSON object or array of professional records"
            }
            CatalogError::CsvError(_) | CatalogError::ZipError(_) => {
                "Retry the export; if it keeps failing, report the input snapshot"
            }
            CatalogError::IoError(_) => "Check that the paths exist and are writable",
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => {
                "Review the configuration file or command-line flags"
            }
            CatalogError::IndexOutOfRange { .. } => "Rebuild the catalog view and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ApiError(_) | CatalogError::SourceError { .. } => {
                format!("Could not load professionals: {}", self)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
