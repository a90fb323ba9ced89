// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Position of the wizard in the commit message collection.
///
/// Stages only move forward. A rejected or repeated input keeps the
/// composer on the stage it is already at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CollectType,
    CollectScope,
    CollectSubject,
    CollectBody,
    CollectFooter,
    Finalize,
    Done,
}

impl Stage {
    pub const INITIAL: Stage = Stage::CollectType;

    /// Whether the driving loop still has work to do at this stage.
    pub fn is_collecting(&self) -> bool {
        !matches!(self, Self::Done)
    }

    /// Prompt label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CollectType => "Header Type",
            Self::CollectScope => "Header Scope",
            Self::CollectSubject => "Header Subject",
            Self::CollectBody => "Message Body",
            Self::CollectFooter => "Message Footer",
            Self::Finalize => "Commit",
            Self::Done => "Done",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CollectType => "collect_type",
            Self::CollectScope => "collect_scope",
            Self::CollectSubject => "collect_subject",
            Self::CollectBody => "collect_body",
            Self::CollectFooter => "collect_footer",
            Self::Finalize => "finalize",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of handling one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Input accepted, the composer moved to the given stage.
    Advance(Stage),
    /// A multi-line stage took one more line and stays put.
    Repeat,
    /// Input failed validation; the stage is entered again.
    Reject(Rejection),
}

/// Recoverable validation failure. Buffers are untouched when one is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Wrong header-type '{0}', please try again!")]
    UnknownType(String),

    #[error("Wrong header-scope '{0}', please try again!")]
    UnknownScope(String),

    #[error("header-subject is a must! please try again!")]
    EmptySubject,
}
