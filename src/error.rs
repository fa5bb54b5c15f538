use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to tokenize dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Dataset contains no records")]
    EmptyDataset,

    #[error("Publish failed: {0}")]
    Publish(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure class, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Network,
    Format,
    Extraction,
    EmptyInput,
    Publish,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Io => "IOError",
            ErrorKind::Network => "NetworkError",
            ErrorKind::Format => "FormatError",
            ErrorKind::Extraction => "ExtractionError",
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::Publish => "PublishError",
        };
        f.write_str(name)
    }
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn network(url: &str, source: reqwest::Error) -> Self {
        Error::Network {
            url: url.to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            // The csv reader surfaces open/read failures through its own error type.
            Error::Csv(e) if e.is_io_error() => ErrorKind::Io,
            Error::Csv(_) | Error::Format(_) => ErrorKind::Format,
            Error::Network { .. } | Error::Status { .. } => ErrorKind::Network,
            Error::Extraction(_) => ErrorKind::Extraction,
            Error::EmptyDataset => ErrorKind::EmptyInput,
            Error::Publish(_) => ErrorKind::Publish,
        }
    }
}
