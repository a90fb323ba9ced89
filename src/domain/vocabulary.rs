// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Scope keyword that omits the parenthesised scope from the header.
pub const NO_SCOPE: &str = "None";

/// A selectable word together with the hint shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Closed sets of commit types and scopes accepted by the wizard.
///
/// Fixed once the composer is built; extending it means changing the
/// configuration, never the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub types: Vec<Choice>,
    pub scopes: Vec<Choice>,
}

pub fn default_types() -> Vec<Choice> {
    vec![
        Choice::new("feat", "A new feature"),
        Choice::new("fix", "A bug fix"),
        Choice::new("docs", "Documentation only changes"),
        Choice::new(
            "style",
            "Changes that do not affect the meaning of the code",
        ),
        Choice::new(
            "factor",
            "A code change that neither fixes a bug nor adds a feature",
        ),
        Choice::new("test", "Add some test cases"),
        Choice::new(
            "chore",
            "Changes to the build process or auxiliary tools",
        ),
    ]
}

pub fn default_scopes() -> Vec<Choice> {
    vec![
        Choice::new("repo", "Operations on persistent data storage"),
        Choice::new("model", "Assemble and operate data"),
        Choice::new("logic", "Realize specific business logic on demand"),
        Choice::new("handler", "Control business process"),
    ]
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            types: default_types(),
            scopes: default_scopes(),
        }
    }
}

impl Vocabulary {
    pub fn accepts_type(&self, input: &str) -> bool {
        self.types.iter().any(|c| c.name == input)
    }

    pub fn accepts_scope(&self, input: &str) -> bool {
        self.scopes.iter().any(|c| c.name == input)
    }

    pub fn type_suggestions(&self) -> Vec<Choice> {
        self.types.clone()
    }

    /// Scope suggestions, led by the no-scope keyword.
    pub fn scope_suggestions(&self) -> Vec<Choice> {
        let mut out = Vec::with_capacity(self.scopes.len() + 1);
        out.push(Choice::new(NO_SCOPE, "No effect on each layer"));
        out.extend(self.scopes.iter().cloned());
        out
    }

    /// Advisory hint for the free-form subject line.
    pub fn subject_suggestions(&self) -> Vec<Choice> {
        vec![Choice::new(
            "Anything",
            "Type anything to describe your commit",
        )]
    }

    /// Check the sets are usable as header vocabulary.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.types.is_empty() {
            return Err("at least one commit type is required".into());
        }

        Self::validate_names("type", &self.types)?;
        Self::validate_names("scope", &self.scopes)?;

        if self.accepts_scope(NO_SCOPE) {
            return Err(format!(
                "'{NO_SCOPE}' is reserved and cannot be listed as a scope"
            ));
        }

        Ok(())
    }

    fn validate_names(kind: &str, choices: &[Choice]) -> std::result::Result<(), String> {
        for (i, choice) in choices.iter().enumerate() {
            if choice.name.is_empty() {
                return Err(format!("{kind} names cannot be empty"));
            }
            if choice
                .name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | ':'))
            {
                return Err(format!(
                    "{kind} '{}' contains whitespace or one of ( ) :",
                    choice.name
                ));
            }
            if choices[..i].iter().any(|c| c.name == choice.name) {
                return Err(format!("duplicate {kind} '{}'", choice.name));
            }
        }
        Ok(())
    }
}
