// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use console::style;
use dialoguer::{Completion, Input};

use crate::domain::Choice;
use crate::error::Result;

/// Source of user lines for the composer.
///
/// Suggestions are advisory: an implementation may offer them for
/// completion, but the returned line is always what the user entered.
pub trait InputSource {
    fn request_line(&mut self, label: &str, suggestions: &[Choice]) -> Result<String>;
}

/// Suggestions whose name starts with `prefix`, ignoring ASCII case.
pub fn filter_suggestions<'a>(prefix: &str, suggestions: &'a [Choice]) -> Vec<&'a Choice> {
    let prefix = prefix.to_ascii_lowercase();
    suggestions
        .iter()
        .filter(|c| c.name.to_ascii_lowercase().starts_with(&prefix))
        .collect()
}

/// Tab completion to the first suggestion matching the typed prefix.
pub struct PrefixCompletion<'a> {
    suggestions: &'a [Choice],
}

impl<'a> PrefixCompletion<'a> {
    pub fn new(suggestions: &'a [Choice]) -> Self {
        Self { suggestions }
    }
}

impl Completion for PrefixCompletion<'_> {
    fn get(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }
        filter_suggestions(input, self.suggestions)
            .first()
            .filter(|c| c.name != input)
            .map(|c| c.name.clone())
    }
}

/// Interactive terminal input.
#[derive(Debug, Default)]
pub struct PromptInput;

impl PromptInput {
    pub fn new() -> Self {
        Self
    }

    fn print_menu(suggestions: &[Choice]) {
        let width = suggestions
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0);
        for choice in suggestions {
            eprintln!(
                "  {}  {}",
                style(format!("{:<width$}", choice.name)).yellow(),
                style(&choice.description).dim()
            );
        }
    }
}

impl InputSource for PromptInput {
    fn request_line(&mut self, label: &str, suggestions: &[Choice]) -> Result<String> {
        if !suggestions.is_empty() {
            Self::print_menu(suggestions);
        }

        let completion = PrefixCompletion::new(suggestions);
        let line = Input::<String>::new()
            .with_prompt(format!(">> {label}"))
            .allow_empty(true)
            .completion_with(&completion)
            .interact_text()?;

        Ok(line)
    }
}
