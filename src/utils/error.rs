use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Position {position} is out of range for a list of {len} entries")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("{device} cannot {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Bounds,
    Capability,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SolidError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolidError::IoError(_) => ErrorCategory::Io,
            SolidError::IndexOutOfRange { .. } => ErrorCategory::Bounds,
            SolidError::Unsupported { .. } => ErrorCategory::Capability,
            SolidError::ConfigError { .. }
            | SolidError::ConfigValidationError { .. }
            | SolidError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 示範中刻意觸發的錯誤，不影響結束碼
            ErrorCategory::Capability => ErrorSeverity::Low,
            ErrorCategory::Bounds => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::IoError(e) => format!("Could not read or write a file: {}", e),
            SolidError::IndexOutOfRange { position, len } => {
                format!("There is no entry at position {} (list has {})", position, len)
            }
            SolidError::Unsupported { device, operation } => {
                format!("The {} does not support '{}'", device, operation)
            }
            SolidError::ConfigError { message } => format!("Invalid configuration: {}", message),
            SolidError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            SolidError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Bounds => "Remove an entry using a position smaller than the list length",
            ErrorCategory::Capability => "Use a device that implements the capability you need",
            ErrorCategory::Configuration => "Fix the TOML configuration file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_critical() {
        let err: SolidError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_out_of_range_message() {
        let err = SolidError::IndexOutOfRange { position: 4, len: 2 };
        assert_eq!(err.category(), ErrorCategory::Bounds);
        assert_eq!(
            err.to_string(),
            "Position 4 is out of range for a list of 2 entries"
        );
        assert!(err.user_friendly_message().contains("position 4"));
    }

    #[test]
    fn test_unsupported_is_low_severity() {
        let err = SolidError::Unsupported {
            device: "old-fashioned printer",
            operation: "scan",
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "old-fashioned printer cannot scan");
    }

    #[test]
    fn test_config_errors_share_category_and_severity() {
        let errors = [
            SolidError::ConfigError {
                message: "bad".to_string(),
            },
            SolidError::ConfigValidationError {
                field: "family.parent".to_string(),
                message: "empty".to_string(),
            },
            SolidError::InvalidConfigValueError {
                field: "family.children".to_string(),
                value: "John".to_string(),
                reason: "parent listed as child".to_string(),
            },
        ];

        for err in &errors {
            assert_eq!(err.category(), ErrorCategory::Configuration);
            assert_eq!(err.severity(), ErrorSeverity::High);
            assert!(!err.recovery_suggestion().is_empty());
        }
    }
}
