//! Crate-level error types.
//!
//! Interaction operations never fail; these errors only cover the ambient
//! edges (loading options, talking to the browser).

use std::fmt;

/// Errors produced by the folio crate.
#[derive(Debug)]
pub enum FolioError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A browser call failed or a required document node is absent.
    Dom(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let err = FolioError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");
        let err = FolioError::Dom("no #projectModal".into());
        assert_eq!(err.to_string(), "DOM error: no #projectModal");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err = FolioError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
    }
}
