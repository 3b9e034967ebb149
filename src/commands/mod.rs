//! Command implementations for coverletter.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command except `init` runs against the discovered
//! config. Commands write their results to the writer they are given, so tests
//! can capture what a user would see on stdout.

mod generate;
mod init;
mod interactive;
mod show;
mod templates;

pub use generate::cmd_generate;
pub use init::cmd_init;
pub use interactive::cmd_interactive;
pub use show::cmd_show;
pub use templates::cmd_templates;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{LetterError, Result};
use crate::template::TemplateStore;
use std::io;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        LetterError::UserError(format!("failed to determine current directory: {}", e))
    })?;

    let load_config = || -> Result<Config> {
        let (config, source) = Config::discover(cli.config.as_deref(), &cwd)?;
        match source {
            Some(path) => log::info!("using config '{}'", path.display()),
            None => log::info!("no config file found, using defaults"),
        }
        Ok(config)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Init(args) => cmd_init(args, &cwd, &mut out),
        Command::Templates => cmd_templates(&load_config()?, &mut out),
        Command::Show(args) => cmd_show(args, &load_config()?, &mut out),
        Command::Generate(args) => cmd_generate(args, &load_config()?, &mut out),
        Command::Interactive(args) => {
            let config = load_config()?;
            let stdin = io::stdin();
            cmd_interactive(args, &config, &mut stdin.lock(), &mut out)
        }
    }
}

/// Open the template store described by the config.
pub(crate) fn open_store(config: &Config) -> Result<TemplateStore> {
    TemplateStore::new(&config.template_dir, &config.template_pattern)
}

/// Map a console write failure.
pub(crate) fn write_failed(e: io::Error) -> LetterError {
    LetterError::SourceError(format!("failed to write output: {}", e))
}
