// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are GNU gettext catalogs laid out as
//! `<locale dir>/<lang>/LC_MESSAGES/rapid-photo-downloader.mo`. At startup the
//! locale directory is resolved (see [`locale_dir`]), the language is taken
//! from the settings file or the system locale, and the matching catalog is
//! loaded into a [`Translator`].
//!
//! Translation is best effort: when anything goes wrong the translator
//! returns every string unchanged and the application starts normally.

pub mod catalog;
pub mod locale_dir;

use crate::config::Config;
use gettext::Catalog;
use std::fmt;
use std::path::{Path, PathBuf};

pub use locale_dir::{resolve_locale_directory, LocaleSearch};

/// Translation domain of the application's catalogs.
pub const DOMAIN: &str = "rapid-photo-downloader";

/// Language whose catalog is used to probe candidate locale directories.
pub const PROBE_LANGUAGE: &str = "es";

/// Path of the catalog for `language` inside `locale_dir`.
pub fn catalog_path(locale_dir: &Path, language: &str) -> PathBuf {
    locale_dir
        .join(language)
        .join("LC_MESSAGES")
        .join(format!("{DOMAIN}.mo"))
}

/// Path of the probe catalog inside `locale_dir`.
pub fn probe_catalog_path(locale_dir: &Path) -> PathBuf {
    catalog_path(locale_dir, PROBE_LANGUAGE)
}

/// Text lookup service built once at startup and read-only afterwards.
pub struct Translator {
    catalog: Option<Catalog>,
    locale_dir: Option<PathBuf>,
    language: Option<String>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("active", &self.is_active())
            .field("locale_dir", &self.locale_dir)
            .field("language", &self.language)
            .finish()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

impl Translator {
    /// A translator that returns every string unchanged.
    pub fn identity() -> Self {
        Self {
            catalog: None,
            locale_dir: None,
            language: None,
        }
    }

    /// Bootstraps translations from the process environment and `config`.
    pub fn initialize(config: &Config) -> Self {
        Self::initialize_with(&LocaleSearch::from_env(), config, sys_locale::get_locale())
    }

    /// Bootstraps translations from explicit inputs.
    ///
    /// `system_locale` is only consulted when `config` has no language.
    pub fn initialize_with(
        search: &LocaleSearch,
        config: &Config,
        system_locale: Option<String>,
    ) -> Self {
        let Some(locale_dir) = search.resolve() else {
            tracing::info!("no translation catalogs found, using untranslated strings");
            return Self::identity();
        };

        if !probe_catalog_path(&locale_dir).is_file() {
            tracing::info!(dir = %locale_dir.display(), "locale directory has no catalogs, using untranslated strings");
            return Self::identity();
        }

        let language = config
            .language()
            .map(str::to_string)
            .or(system_locale)
            .filter(|lang| !lang.trim().is_empty());

        let Some(language) = language else {
            tracing::debug!(error = %crate::error::CatalogError::NoLanguage, "translations disabled");
            return Self {
                locale_dir: Some(locale_dir),
                ..Self::identity()
            };
        };

        match catalog::load_catalog(&locale_dir, &language) {
            Ok(catalog) => {
                tracing::info!(%language, dir = %locale_dir.display(), "translations installed");
                Self {
                    catalog: Some(catalog),
                    locale_dir: Some(locale_dir),
                    language: Some(language),
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "translations disabled");
                Self {
                    catalog: None,
                    locale_dir: Some(locale_dir),
                    language: Some(language),
                }
            }
        }
    }

    /// Whether a real catalog is installed.
    pub fn is_active(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn locale_dir(&self) -> Option<&Path> {
        self.locale_dir.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Translates `msgid`, returning it unchanged when no translation exists.
    pub fn tr<'a>(&'a self, msgid: &'a str) -> &'a str {
        match &self.catalog {
            Some(catalog) => catalog.gettext(msgid),
            None => msgid,
        }
    }

    /// Translates a message with a plural form chosen by `n`.
    pub fn trn<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        match &self.catalog {
            Some(catalog) => catalog.ngettext(singular, plural, n),
            None if n == 1 => singular,
            None => plural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn search_with_override(dir: &Path) -> LocaleSearch {
        LocaleSearch {
            override_dir: Some(dir.to_path_buf()),
            system_share_dir: dir.join("no-share"),
            ..LocaleSearch::default()
        }
    }

    #[test]
    fn catalog_path_follows_gettext_layout() {
        let path = catalog_path(Path::new("/usr/share/locale"), "fr");
        assert_eq!(
            path,
            PathBuf::from("/usr/share/locale/fr/LC_MESSAGES/rapid-photo-downloader.mo")
        );
    }

    #[test]
    fn identity_translator_passes_strings_through() {
        let translator = Translator::identity();
        assert!(!translator.is_active());
        assert_eq!(translator.tr("Timeline"), "Timeline");
        assert_eq!(translator.trn("%d photo", "%d photos", 1), "%d photo");
        assert_eq!(translator.trn("%d photo", "%d photos", 3), "%d photos");
    }

    #[test]
    fn unresolved_directory_disables_translation() {
        let empty = tempdir().expect("tempdir");
        let search = LocaleSearch {
            system_share_dir: empty.path().to_path_buf(),
            ..LocaleSearch::default()
        };
        let translator = Translator::initialize_with(&search, &Config::default(), Some("es".into()));
        assert!(!translator.is_active());
        assert!(translator.locale_dir().is_none());
    }

    #[test]
    fn override_without_probe_disables_translation() {
        let dir = tempdir().expect("tempdir");
        let translator = Translator::initialize_with(
            &search_with_override(dir.path()),
            &Config::default(),
            Some("es".into()),
        );
        assert!(!translator.is_active());
        assert_eq!(translator.tr("Backup"), "Backup");
    }

    #[test]
    fn malformed_catalog_is_not_fatal() {
        let dir = tempdir().expect("tempdir");
        let probe = probe_catalog_path(dir.path());
        fs::create_dir_all(probe.parent().expect("parent")).expect("create dirs");
        fs::write(&probe, b"not a mo file at all, just text").expect("write");

        let translator = Translator::initialize_with(
            &search_with_override(dir.path()),
            &Config::default(),
            Some("es_ES.UTF-8".into()),
        );
        assert!(!translator.is_active());
        assert_eq!(translator.language(), Some("es_ES.UTF-8"));
        assert_eq!(translator.tr("Backup"), "Backup");
    }
}
