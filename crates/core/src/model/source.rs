use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceLocationError {
    #[error("question source location is empty")]
    Empty,
    #[error("unsupported question source scheme: {0}")]
    UnsupportedScheme(String),
    #[error("file url does not map to a local path: {0}")]
    InvalidFileUrl(String),
}

/// Where the question document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSourceLocation {
    Remote(Url),
    File(PathBuf),
}

impl QuestionSourceLocation {
    /// Parse a user-supplied location.
    ///
    /// `http`/`https` URLs are fetched over the network, `file://` URLs and
    /// plain paths are read from disk.
    ///
    /// # Errors
    ///
    /// Returns `SourceLocationError` for blank input, other URL schemes, or
    /// `file://` URLs without a local path.
    pub fn parse(raw: &str) -> Result<Self, SourceLocationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceLocationError::Empty);
        }

        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|()| SourceLocationError::InvalidFileUrl(trimmed.to_string())),
                // Windows drive letters parse as one-letter schemes.
                scheme if scheme.len() == 1 => Ok(Self::File(PathBuf::from(trimmed))),
                scheme => Err(SourceLocationError::UnsupportedScheme(scheme.to_string())),
            },
            Err(_) => Ok(Self::File(PathBuf::from(trimmed))),
        }
    }
}

impl fmt::Display for QuestionSourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSourceLocation::Remote(url) => write!(f, "{url}"),
            QuestionSourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}
