// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::{Choice, Vocabulary, default_scopes, default_types};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Executable invoked as `<git_program> commit -F <file>`
    #[serde(default = "default_git_program")]
    pub git_program: String,

    /// Directory for the staged message file (default: system temp dir)
    #[serde(default)]
    pub message_dir: Option<PathBuf>,

    /// Accepted commit types
    #[serde(default = "default_types")]
    pub types: Vec<Choice>,

    /// Accepted scopes (`None` is always allowed and must not be listed)
    #[serde(default = "default_scopes")]
    pub scopes: Vec<Choice>,
}

fn default_git_program() -> String {
    "git".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_program: default_git_program(),
            message_dir: None,
            types: default_types(),
            scopes: default_scopes(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > project config > defaults
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.git-cz.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".git-cz.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (GIT_CZ_GIT_PROGRAM, GIT_CZ_MESSAGE_DIR)
        figment = figment.merge(Env::prefixed("GIT_CZ_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "git-cz").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Type and scope sets handed to the composer.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary {
            types: self.types.clone(),
            scopes: self.scopes.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.git_program.trim().is_empty() {
            return Err(Error::Config("git_program cannot be empty".into()));
        }

        if let Some(ref dir) = self.message_dir {
            if !dir.is_dir() {
                return Err(Error::Config(format!(
                    "message_dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        self.vocabulary().validate().map_err(Error::Config)
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# git-cz Configuration

# Program used to record the commit (`<git_program> commit -F <file>`)
git_program = "git"

# Directory for the temporary message file (default: system temp dir)
# message_dir = "/tmp"

# Accepted commit types. Replacing this list replaces all defaults.
[[types]]
name = "feat"
description = "A new feature"

[[types]]
name = "fix"
description = "A bug fix"

[[types]]
name = "docs"
description = "Documentation only changes"

[[types]]
name = "style"
description = "Changes that do not affect the meaning of the code"

[[types]]
name = "factor"
description = "A code change that neither fixes a bug nor adds a feature"

[[types]]
name = "test"
description = "Add some test cases"

[[types]]
name = "chore"
description = "Changes to the build process or auxiliary tools"

# Accepted scopes. "None" is always available and skips the scope.
[[scopes]]
name = "repo"
description = "Operations on persistent data storage"

[[scopes]]
name = "model"
description = "Assemble and operate data"

[[scopes]]
name = "logic"
description = "Realize specific business logic on demand"

[[scopes]]
name = "handler"
description = "Control business process"
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
