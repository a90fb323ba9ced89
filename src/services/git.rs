// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Records a commit whose message is read from a file.
pub trait CommitRunner {
    fn commit_from_file(&self, path: &Path) -> Result<()>;
}

/// Runs `<program> commit -F <path>` in the current directory.
pub struct GitService {
    program: String,
}

impl GitService {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommitRunner for GitService {
    fn commit_from_file(&self, path: &Path) -> Result<()> {
        debug!(program = %self.program, path = %path.display(), "running commit");

        let output = Command::new(&self.program)
            .args(["commit", "-F"])
            .arg(path)
            .output()
            .map_err(|source| Error::CommitLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::CommitFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            eprintln!("{}", stdout.trim_end());
        }

        Ok(())
    }
}
