// SPDX-License-Identifier: MPL-2.0
//! Loading compiled gettext catalogs (`.mo` files).
//!
//! A requested language such as `pt_BR.UTF-8` is expanded into progressively
//! less specific candidates (`pt_BR.UTF-8`, `pt_BR`, `pt`) and the first one
//! with a catalog on disk is loaded.

use super::{catalog_path, DOMAIN};
use crate::error::{CatalogError, Result};
use gettext::Catalog;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

/// Expands a locale name into gettext lookup candidates, most specific first.
pub fn language_candidates(language: &str) -> Vec<String> {
    let raw = language.trim();
    let mut candidates: Vec<String> = Vec::new();
    if raw.is_empty() {
        return candidates;
    }
    push_unique(&mut candidates, raw.to_string());

    // Drop `.encoding` and `@modifier`.
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .to_string();
    if base.is_empty() {
        return candidates;
    }
    push_unique(&mut candidates, base.clone());

    if let Ok(langid) = base.replace('_', "-").parse::<LanguageIdentifier>() {
        let language = langid.language.as_str().to_string();
        if let Some(region) = langid.region {
            push_unique(&mut candidates, format!("{}_{}", language, region.as_str()));
        }
        push_unique(&mut candidates, language);
    }

    candidates
}

fn push_unique(candidates: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

/// Finds the catalog file for the first candidate of `language` present in `locale_dir`.
pub fn find_catalog(locale_dir: &Path, language: &str) -> Option<PathBuf> {
    language_candidates(language)
        .into_iter()
        .map(|candidate| catalog_path(locale_dir, &candidate))
        .find(|path| path.is_file())
}

/// Loads and parses the catalog for `language` from `locale_dir`.
pub fn load_catalog(locale_dir: &Path, language: &str) -> Result<Catalog> {
    let path = find_catalog(locale_dir, language).ok_or_else(|| CatalogError::NotFound {
        language: language.to_string(),
        locale_dir: locale_dir.to_path_buf(),
    })?;

    tracing::debug!(catalog = %path.display(), domain = DOMAIN, "loading translation catalog");
    let reader = BufReader::new(File::open(&path)?);
    Ok(Catalog::parse(reader)?)
}
