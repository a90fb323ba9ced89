// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::Stage;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Failed to stage commit message in a temporary file")]
    #[diagnostic(
        code(git_cz::staging::write),
        help("Check that the temporary directory exists and is writable")
    )]
    StageMessage(#[source] std::io::Error),

    #[error("Failed to remove staged commit message at {}", path.display())]
    #[diagnostic(
        code(git_cz::staging::cleanup),
        help("Delete the file manually; the commit itself may have succeeded")
    )]
    CleanupMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot launch '{program}'")]
    #[diagnostic(
        code(git_cz::git::launch),
        help("Make sure git is installed and on PATH, or set git_program in the config")
    )]
    CommitLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program} commit' failed ({status}): {stderr}")]
    #[diagnostic(
        code(git_cz::git::commit),
        help("Stage files with: git add <files>")
    )]
    CommitFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Unexpected stage '{0}'")]
    #[diagnostic(code(git_cz::composer::stage))]
    UnexpectedStage(Stage),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(git_cz::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::Dialog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
