// SPDX-License-Identifier: MPL-2.0
//! Locating the directory that holds compiled translation catalogs.
//!
//! # Resolution Order
//!
//! 1. **Snap package** - when `SNAP_NAME` names this application, the fixed
//!    packaged locale directory `/usr/lib/locale` is used as is.
//! 2. **Environment override** - `RPD_I18N_DIR`, if it names a directory.
//! 3. **Newest catalog** - the per-user data directory and `/usr/share` are
//!    compared; whichever `locale/` directory holds the most recently
//!    modified probe catalog wins.
//!
//! The environment is captured in a [`LocaleSearch`] so tests can describe
//! it explicitly instead of mutating process state.

use super::{probe_catalog_path, DOMAIN};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Environment variable naming the running snap.
pub const ENV_SNAP_NAME: &str = "SNAP_NAME";

/// Environment variable holding the snap install root.
pub const ENV_SNAP: &str = "SNAP";

/// Environment variable overriding the locale directory.
pub const ENV_I18N_DIR: &str = "RPD_I18N_DIR";

/// System-wide share directory.
pub const SYSTEM_SHARE_DIR: &str = "/usr/share";

/// Locale directory used when running as a snap.
pub const SNAP_LOCALE_DIR: &str = "/usr/lib/locale";

/// Inputs to locale directory resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSearch {
    pub snap_name: Option<String>,
    pub snap_root: Option<PathBuf>,
    pub override_dir: Option<PathBuf>,
    pub user_data_dir: Option<PathBuf>,
    pub system_share_dir: PathBuf,
}

impl LocaleSearch {
    /// Captures the current process environment.
    pub fn from_env() -> Self {
        Self {
            snap_name: std::env::var(ENV_SNAP_NAME).ok(),
            snap_root: std::env::var_os(ENV_SNAP).map(PathBuf::from),
            override_dir: std::env::var_os(ENV_I18N_DIR).map(PathBuf::from),
            user_data_dir: dirs::data_dir(),
            system_share_dir: PathBuf::from(SYSTEM_SHARE_DIR),
        }
    }

    /// Returns the locale directory with the most recent catalogs, if any.
    pub fn resolve(&self) -> Option<PathBuf> {
        if self.is_snap() {
            // Not checked for existence, unlike the other sources.
            let dir = PathBuf::from(SNAP_LOCALE_DIR);
            tracing::debug!(
                dir = %dir.display(),
                snap_root = ?self.snap_root,
                "running as snap, using packaged locale directory"
            );
            return Some(dir);
        }

        if let Some(dir) = &self.override_dir {
            if dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "using {} override", ENV_I18N_DIR);
                return Some(dir.clone());
            }
            tracing::debug!(dir = %dir.display(), "{} is not a directory, ignoring", ENV_I18N_DIR);
        }

        self.newest_candidate()
    }

    fn is_snap(&self) -> bool {
        self.snap_name
            .as_deref()
            .is_some_and(|name| name.contains(DOMAIN))
    }

    fn candidates(&self) -> Vec<PathBuf> {
        self.user_data_dir
            .iter()
            .chain(std::iter::once(&self.system_share_dir))
            .map(|root| root.join("locale"))
            .collect()
    }

    fn newest_candidate(&self) -> Option<PathBuf> {
        let mut best: Option<(PathBuf, SystemTime)> = None;

        for locale_dir in self.candidates() {
            let Some(mtime) = readable_probe_mtime(&locale_dir) else {
                continue;
            };
            // Strictly newer only, so ties keep the per-user directory.
            if best.as_ref().is_none_or(|(_, newest)| mtime > *newest) {
                best = Some((locale_dir, mtime));
            }
        }

        best.map(|(dir, _)| dir)
    }
}

/// Returns the modification time of the probe catalog in `locale_dir` when it
/// is a regular file that can be opened for reading.
fn readable_probe_mtime(locale_dir: &Path) -> Option<SystemTime> {
    let probe = probe_catalog_path(locale_dir);
    let metadata = fs::metadata(&probe).ok()?;
    if !metadata.is_file() {
        return None;
    }
    if File::open(&probe).is_err() {
        tracing::debug!(probe = %probe.display(), "probe catalog is not readable");
        return None;
    }
    metadata.modified().ok()
}

/// Resolves the locale directory from the process environment.
pub fn resolve_locale_directory() -> Option<PathBuf> {
    LocaleSearch::from_env().resolve()
}
