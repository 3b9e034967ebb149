//! CLI argument parsing for coverletter.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::BackendKind;
use crate::placeholder::Placeholder;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Coverletter: fill cover-letter templates or generate letters with a model.
///
/// Letters are produced from six fields (name, manager name, company name,
/// job title, skills, company values) by one of three backends:
/// - local: fill a template from the template directory
/// - remote: ask a hosted text-generation model
/// - script: run an external generation script
#[derive(Parser, Debug)]
#[command(name = "coverletter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of the discovered one.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for coverletter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a config file and a sample template.
    ///
    /// Creates `coverletter.yaml` and `templates/sample.txt`. Existing files
    /// are left alone unless `--force` is given.
    Init(InitArgs),

    /// List the templates in the template directory.
    Templates,

    /// Show a template and the placeholders it uses.
    Show(ShowArgs),

    /// Generate a cover letter.
    ///
    /// Fields come from `--fields` (YAML or JSON) and are overridden by the
    /// per-field flags. The letter is printed to stdout and saved when
    /// `--output` is given.
    Generate(GenerateArgs),

    /// Walk through template selection and field entry on the console.
    #[command(alias = "wizard")]
    Interactive(InteractiveArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to scaffold into (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Overwrite existing files.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template identifier (e.g., formal.txt).
    pub template: String,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Backend to use (overrides the configured backend).
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendKind>,

    /// Template identifier for the local backend.
    #[arg(short, long)]
    pub template: Option<String>,

    /// YAML or JSON file with field values.
    #[arg(short, long, value_name = "FILE")]
    pub fields: Option<PathBuf>,

    /// Applicant's name.
    #[arg(long)]
    pub name: Option<String>,

    /// Hiring manager's name.
    #[arg(long)]
    pub manager_name: Option<String>,

    /// Company name.
    #[arg(long)]
    pub company_name: Option<String>,

    /// Job title.
    #[arg(long)]
    pub job_title: Option<String>,

    /// Relevant skills.
    #[arg(long)]
    pub skills: Option<String>,

    /// Company values.
    #[arg(long)]
    pub company_values: Option<String>,

    /// Save the letter to this file as well as printing it.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Per-field flag values, in placeholder order.
    pub fn overrides(&self) -> Vec<(Placeholder, Option<String>)> {
        vec![
            (Placeholder::Name, self.name.clone()),
            (Placeholder::ManagerName, self.manager_name.clone()),
            (Placeholder::CompanyName, self.company_name.clone()),
            (Placeholder::JobTitle, self.job_title.clone()),
            (Placeholder::Skills, self.skills.clone()),
            (Placeholder::CompanyValues, self.company_values.clone()),
        ]
    }
}

/// Arguments for the `interactive` command.
#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    /// Backend to use (overrides the configured backend).
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendKind>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
