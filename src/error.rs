// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Reasons a translation catalog could not be loaded.
///
/// None of these reach the user: the translator downgrades every one of them
/// to identity lookups and only logs the cause.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// No catalog exists for any candidate of the requested language.
    NotFound { language: String, locale_dir: PathBuf },

    /// No language was configured and the system locale is unknown.
    NoLanguage,

    /// The catalog file exists but could not be parsed.
    Malformed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound {
                language,
                locale_dir,
            } => write!(
                f,
                "no catalog for language {} in {}",
                language,
                locale_dir.display()
            ),
            CatalogError::NoLanguage => write!(f, "no language configured or detected"),
            CatalogError::Malformed(msg) => write!(f, "malformed catalog: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<gettext::Error> for Error {
    fn from(err: gettext::Error) -> Self {
        match err {
            gettext::Error::Io(io) => Error::Io(io.to_string()),
            other => Error::Catalog(CatalogError::Malformed(other.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_not_found_names_language_and_directory() {
        let err: Error = CatalogError::NotFound {
            language: "de_DE".to_string(),
            locale_dir: PathBuf::from("/usr/share/locale"),
        }
        .into();
        let message = format!("{}", err);
        assert!(message.starts_with("Catalog Error:"));
        assert!(message.contains("de_DE"));
        assert!(message.contains("/usr/share/locale"));
    }

    #[test]
    fn malformed_gettext_error_becomes_catalog_variant() {
        let err: Error = gettext::Error::BadMagic.into();
        assert!(matches!(err, Error::Catalog(CatalogError::Malformed(_))));
    }
}
