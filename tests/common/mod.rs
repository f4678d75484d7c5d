// SPDX-License-Identifier: MPL-2.0
//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use rapid_photo_downloader::i18n::catalog_path;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const MO_MAGIC: u32 = 0x9504_12de;
const HEADER_LEN: u32 = 28;

const METADATA: &str =
    "Content-Type: text/plain; charset=UTF-8\nPlural-Forms: nplurals=2; plural=(n != 1);\n";

/// Encodes a little-endian GNU `.mo` catalog holding `messages`.
///
/// A plural entry is written as `("singular\0plural", "form0\0form1")`.
pub fn mo_bytes(messages: &[(&str, &str)]) -> Vec<u8> {
    let mut entries: Vec<(&str, &str)> = vec![("", METADATA)];
    entries.extend_from_slice(messages);
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let count = entries.len() as u32;
    let originals_offset = HEADER_LEN;
    let translations_offset = originals_offset + 8 * count;
    let strings_offset = translations_offset + 8 * count;

    let mut header = Vec::new();
    for value in [MO_MAGIC, 0, count, originals_offset, translations_offset, 0, strings_offset] {
        header.extend_from_slice(&value.to_le_bytes());
    }

    let mut originals = Vec::new();
    let mut translations = Vec::new();
    let mut strings = Vec::new();
    let push_string = |table: &mut Vec<u8>, strings: &mut Vec<u8>, s: &str| {
        let offset = strings_offset + strings.len() as u32;
        table.extend_from_slice(&(s.len() as u32).to_le_bytes());
        table.extend_from_slice(&offset.to_le_bytes());
        strings.extend_from_slice(s.as_bytes());
        strings.push(0);
    };

    for (original, _) in &entries {
        push_string(&mut originals, &mut strings, original);
    }
    for (_, translation) in &entries {
        push_string(&mut translations, &mut strings, translation);
    }

    [header, originals, translations, strings].concat()
}

/// Writes a catalog for `language` under `locale_dir` and returns its path.
pub fn write_catalog(locale_dir: &Path, language: &str, messages: &[(&str, &str)]) -> PathBuf {
    let path = catalog_path(locale_dir, language);
    fs::create_dir_all(path.parent().expect("catalog has parent")).expect("create catalog dirs");
    fs::write(&path, mo_bytes(messages)).expect("write catalog");
    path
}

/// Sets the modification time of `path`.
pub fn set_mtime(path: &Path, mtime: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .and_then(|file| file.set_modified(mtime))
        .expect("set mtime");
}
