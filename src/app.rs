// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{Stage, Transition};
use crate::error::Result;
use crate::services::{
    composer::CommitComposer,
    git::{CommitRunner, GitService},
    input::{InputSource, PromptInput},
    staging::MessageStager,
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load()?;
        debug!(
            git_program = %config.git_program,
            types = config.types.len(),
            scopes = config.scopes.len(),
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.compose_commit()
    }

    fn compose_commit(&self) -> Result<()> {
        let mut composer = CommitComposer::new(
            self.config.vocabulary(),
            MessageStager::new(self.config.message_dir.clone()),
        );
        let mut input = PromptInput::new();
        let git = GitService::new(self.config.git_program.clone());

        drive(&mut composer, &mut input, &git)?;

        println!("\n{}", style("\t====== Done! Good bye! ======").green());
        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Git program: {}", self.config.git_program);
                match self.config.message_dir {
                    Some(ref dir) => println!("Message dir: {}", dir.display()),
                    None => println!("Message dir: (system temp)"),
                }
                if let Some(ref path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    println!("Config file: {} ({})", path.display(), status);
                }
                println!();
                println!("[types]");
                for choice in &self.config.types {
                    println!("  {:<10} {}", choice.name, choice.description);
                }
                println!("[scopes]");
                for choice in &self.config.scopes {
                    println!("  {:<10} {}", choice.name, choice.description);
                }
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "git-cz", &mut std::io::stdout());
                Ok(())
            }
        }
    }
}

/// Step `composer` until it reaches [`Stage::Done`].
///
/// Rejected input is reported and the same stage runs again; any error
/// ends the run.
pub fn drive(
    composer: &mut CommitComposer,
    input: &mut dyn InputSource,
    runner: &dyn CommitRunner,
) -> Result<()> {
    while composer.stage().is_collecting() {
        match composer.step(input, runner)? {
            Transition::Reject(reason) => print_warning(&reason.to_string()),
            Transition::Advance(Stage::Done) => {
                eprintln!("{} Committed!", style("✓").green().bold());
            }
            Transition::Advance(_) => eprintln!(),
            Transition::Repeat => {}
        }
    }
    Ok(())
}

fn print_warning(msg: &str) {
    eprintln!("{} {}", style("warning:").yellow().bold(), msg);
}
