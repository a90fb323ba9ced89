// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// The three buffers of a commit message under construction.
///
/// Header grows as `<type>`, then `(<scope>): ` or `: `, then `<subject>\n`.
/// Body and footer start as a single `\n` and gain one `<line>\n` per
/// entered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    header: String,
    body: String,
    footer: String,
}

impl Default for CommitMessage {
    fn default() -> Self {
        Self {
            header: String::new(),
            body: "\n".into(),
            footer: "\n".into(),
        }
    }
}

impl CommitMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn push_type(&mut self, commit_type: &str) {
        self.header.push_str(commit_type);
    }

    /// `None` omits the parentheses but keeps the colon separator.
    pub fn push_scope(&mut self, scope: Option<&str>) {
        if let Some(scope) = scope {
            self.header.push('(');
            self.header.push_str(scope);
            self.header.push(')');
        }
        self.header.push_str(": ");
    }

    pub fn push_subject(&mut self, subject: &str) {
        self.header.push_str(subject);
        self.header.push('\n');
    }

    pub fn push_body_line(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }

    pub fn push_footer_line(&mut self, line: &str) {
        self.footer.push_str(line);
        self.footer.push('\n');
    }

    /// Full message text, exactly as handed to the commit tool.
    pub fn render(&self) -> String {
        let mut out =
            String::with_capacity(self.header.len() + self.body.len() + self.footer.len());
        out.push_str(&self.header);
        out.push_str(&self.body);
        out.push_str(&self.footer);
        out
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.header, self.body, self.footer)
    }
}
