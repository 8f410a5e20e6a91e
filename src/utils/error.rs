use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Archive entry escapes destination: {name}")]
    UnsafeEntryError { name: String },
}

impl DownloadError {
    /// 給使用者的處理建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DownloadError::ZipError(_) => "The archive may be corrupt or not published yet",
            DownloadError::HttpError(_) => "Check network connectivity and the base URL",
            DownloadError::IoError(_) => "Check permissions and free space on the target directory",
            DownloadError::ConfigError { .. } | DownloadError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            DownloadError::UnsafeEntryError { .. } => "Do not trust this archive",
        }
    }
}

pub type Result<T> = std::result::Result<T, DownloadError>;
