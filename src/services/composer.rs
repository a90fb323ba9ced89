// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::domain::{CommitMessage, NO_SCOPE, Rejection, Stage, Transition, Vocabulary};
use crate::error::{Error, Result};
use crate::services::git::CommitRunner;
use crate::services::input::InputSource;
use crate::services::staging::MessageStager;

/// Walks the user from commit type to a recorded commit, one stage per
/// [`CommitComposer::step`].
pub struct CommitComposer {
    stage: Stage,
    message: CommitMessage,
    vocabulary: Vocabulary,
    stager: MessageStager,
}

impl CommitComposer {
    pub fn new(vocabulary: Vocabulary, stager: MessageStager) -> Self {
        Self {
            stage: Stage::INITIAL,
            message: CommitMessage::new(),
            vocabulary,
            stager,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn message(&self) -> &CommitMessage {
        &self.message
    }

    /// Run the handler for the current stage.
    ///
    /// Calling this once [`Stage::Done`] is reached is an invariant
    /// violation and yields [`Error::UnexpectedStage`].
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        runner: &dyn CommitRunner,
    ) -> Result<Transition> {
        let transition = match self.stage {
            Stage::CollectType => self.collect_type(input)?,
            Stage::CollectScope => self.collect_scope(input)?,
            Stage::CollectSubject => self.collect_subject(input)?,
            Stage::CollectBody => self.collect_body(input)?,
            Stage::CollectFooter => self.collect_footer(input)?,
            Stage::Finalize => self.finalize(runner)?,
            Stage::Done => return Err(Error::UnexpectedStage(self.stage)),
        };

        match transition {
            Transition::Advance(next) => {
                debug!(from = %self.stage, to = %next, "stage advanced");
                self.stage = next;
            }
            Transition::Repeat => debug!(stage = %self.stage, "line accepted"),
            Transition::Reject(ref reason) => {
                debug!(stage = %self.stage, %reason, "input rejected");
            }
        }

        Ok(transition)
    }

    fn collect_type(&mut self, input: &mut dyn InputSource) -> Result<Transition> {
        let suggestions = self.vocabulary.type_suggestions();
        let line = input.request_line(Stage::CollectType.label(), &suggestions)?;

        if !self.vocabulary.accepts_type(&line) {
            return Ok(Transition::Reject(Rejection::UnknownType(line)));
        }
        self.message.push_type(&line);
        Ok(Transition::Advance(Stage::CollectScope))
    }

    fn collect_scope(&mut self, input: &mut dyn InputSource) -> Result<Transition> {
        let suggestions = self.vocabulary.scope_suggestions();
        let line = input.request_line(Stage::CollectScope.label(), &suggestions)?;

        if line == NO_SCOPE {
            self.message.push_scope(None);
        } else if self.vocabulary.accepts_scope(&line) {
            self.message.push_scope(Some(&line));
        } else {
            return Ok(Transition::Reject(Rejection::UnknownScope(line)));
        }
        Ok(Transition::Advance(Stage::CollectSubject))
    }

    fn collect_subject(&mut self, input: &mut dyn InputSource) -> Result<Transition> {
        let suggestions = self.vocabulary.subject_suggestions();
        let line = input.request_line(Stage::CollectSubject.label(), &suggestions)?;

        if line.is_empty() {
            return Ok(Transition::Reject(Rejection::EmptySubject));
        }
        self.message.push_subject(&line);
        Ok(Transition::Advance(Stage::CollectBody))
    }

    fn collect_body(&mut self, input: &mut dyn InputSource) -> Result<Transition> {
        let line = input.request_line(Stage::CollectBody.label(), &[])?;

        if line.is_empty() {
            return Ok(Transition::Advance(Stage::CollectFooter));
        }
        self.message.push_body_line(&line);
        Ok(Transition::Repeat)
    }

    fn collect_footer(&mut self, input: &mut dyn InputSource) -> Result<Transition> {
        let line = input.request_line(Stage::CollectFooter.label(), &[])?;

        if line.is_empty() {
            return Ok(Transition::Advance(Stage::Finalize));
        }
        self.message.push_footer_line(&line);
        Ok(Transition::Repeat)
    }

    fn finalize(&mut self, runner: &dyn CommitRunner) -> Result<Transition> {
        self.stager.commit(&self.message.render(), runner)?;
        Ok(Transition::Advance(Stage::Done))
    }
}
