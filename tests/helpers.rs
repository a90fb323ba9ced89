// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use git_cz::domain::{Choice, Vocabulary};
use git_cz::error::{Error, Result};
use git_cz::services::composer::CommitComposer;
use git_cz::services::git::CommitRunner;
use git_cz::services::input::InputSource;
use git_cz::services::staging::MessageStager;

/// Input source that replays a fixed list of lines.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts: Vec<(String, Vec<Choice>)>,
}

#[allow(dead_code)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn request_line(&mut self, label: &str, suggestions: &[Choice]) -> Result<String> {
        self.prompts.push((label.to_string(), suggestions.to_vec()));
        self.lines.pop_front().ok_or(Error::Cancelled)
    }
}

/// What a [`RecordingRunner`] saw when it was invoked.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedCommit {
    pub path: PathBuf,
    pub contents: String,
}

/// Commit runner that captures the staged file instead of running git.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingRunner {
    pub fail: bool,
    pub calls: RefCell<Vec<RecordedCommit>>,
}

#[allow(dead_code)]
impl RecordingRunner {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> RecordedCommit {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("runner was never called")
    }
}

impl CommitRunner for RecordingRunner {
    fn commit_from_file(&self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)?;
        self.calls.borrow_mut().push(RecordedCommit {
            path: path.to_path_buf(),
            contents,
        });
        if self.fail {
            return Err(Error::CommitFailed {
                program: "git".into(),
                status: "exit status: 1".into(),
                stderr: "nothing to commit".into(),
            });
        }
        Ok(())
    }
}

/// Composer over the default vocabulary, staging into `dir`.
#[allow(dead_code)]
pub fn composer_in(dir: &Path) -> CommitComposer {
    CommitComposer::new(
        Vocabulary::default(),
        MessageStager::new(Some(dir.to_path_buf())),
    )
}

/// Number of entries left in `dir`.
#[allow(dead_code)]
pub fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
