// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::services::git::CommitRunner;

/// Hands a composed message to a [`CommitRunner`] through a temporary file.
///
/// The file only lives for the duration of [`MessageStager::commit`] and is
/// removed on every exit path.
#[derive(Debug, Clone, Default)]
pub struct MessageStager {
    dir: Option<PathBuf>,
}

impl MessageStager {
    /// Stage in `dir`, or in the system temporary directory when `None`.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub fn commit(&self, message: &str, runner: &dyn CommitRunner) -> Result<()> {
        // Dropping the handle on an early return deletes the file
        let mut staged = self.create().map_err(Error::StageMessage)?;
        staged
            .write_all(message.as_bytes())
            .and_then(|()| staged.flush())
            .map_err(Error::StageMessage)?;

        let path = staged.path().to_path_buf();
        debug!(path = %path.display(), bytes = message.len(), "commit message staged");

        let outcome = runner.commit_from_file(&path);
        // The commit tool or a hook may already have removed the file
        let cleanup = match staged.close() {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other.map_err(|source| Error::CleanupMessage { path, source }),
        };

        if let (Err(_), Err(e)) = (&outcome, &cleanup) {
            warn!(error = %e, "staged commit message left behind");
        }

        outcome?;
        cleanup
    }

    fn create(&self) -> std::io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("git-cz-").suffix(".txt");
        match self.dir {
            Some(ref dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}
