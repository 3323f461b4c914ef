// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File identities.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::paths::normalize;
use crate::error::{MirrorResult, invalid_argument};

/// Absolute, lexically normalized, UTF-8 path of one file.
///
/// Two identities are the same file iff their paths are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    path: PathBuf,
}

impl FileIdentity {
    /// Resolve `path` against `base` (when relative) and normalize it.
    ///
    /// The file does not need to exist.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError::InvalidArgument` if `path` is empty or not valid
    /// UTF-8, or if the result is not absolute.
    pub fn new(path: impl AsRef<Path>, base: &Path) -> MirrorResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(invalid_argument("file path is empty"));
        }
        let resolved = normalize(&base.join(path));
        if resolved.to_str().is_none() {
            return Err(invalid_argument(format!(
                "file path is not valid UTF-8: {}",
                resolved.display()
            )));
        }
        if !resolved.is_absolute() {
            return Err(invalid_argument(format!(
                "file path does not resolve to an absolute path: {}",
                resolved.display()
            )));
        }
        Ok(Self { path: resolved })
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // UTF-8 checked in `new`
        self.path.to_str().unwrap_or_default()
    }
}

impl AsRef<Path> for FileIdentity {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
