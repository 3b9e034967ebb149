//! Implementation of the `coverletter init` command.
//!
//! Scaffolds a working directory:
//!
//! 1. `coverletter.yaml` holding the default config
//! 2. `templates/sample.txt`, a template using every placeholder
//!
//! Existing files are never overwritten unless `--force` is given.

use super::write_failed;
use crate::cli::InitArgs;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{LetterError, Result};
use crate::output::save;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the scaffolded template.
const SAMPLE_TEMPLATE_FILE: &str = "sample.txt";

const SAMPLE_TEMPLATE: &str = "\
Dear {manager_name},

I am writing to apply for the {job_title} position at {company_name}.
My background in {skills} has prepared me to contribute from day one.

What draws me to {company_name} is its commitment to {company_values},
which matches how I like to work.

Thank you for your time and consideration.

Sincerely,
{name}
";

/// Execute the `coverletter init` command.
pub fn cmd_init<W: Write>(args: InitArgs, cwd: &Path, out: &mut W) -> Result<()> {
    let root = match args.dir {
        Some(dir) if dir.is_relative() => cwd.join(dir),
        Some(dir) => dir,
        None => cwd.to_path_buf(),
    };

    let config = Config::default();
    let config_path = root.join(DEFAULT_CONFIG_FILE);
    let template_path = root.join(&config.template_dir).join(SAMPLE_TEMPLATE_FILE);

    if !args.force {
        let existing: Vec<&PathBuf> = [&config_path, &template_path]
            .into_iter()
            .filter(|path| path.exists())
            .collect();
        if !existing.is_empty() {
            let listed = existing
                .iter()
                .map(|path| format!("  {}", path.display()))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(LetterError::UserError(format!(
                "refusing to overwrite existing files:\n{}\n\n\
                 Fix: rerun with --force to replace them.",
                listed
            )));
        }
    }

    save(&config_path, &config.to_yaml()?)?;
    save(&template_path, SAMPLE_TEMPLATE)?;
    log::info!("scaffolded coverletter in '{}'", root.display());

    writeln!(out, "Created {}", config_path.display()).map_err(write_failed)?;
    writeln!(out, "Created {}", template_path.display()).map_err(write_failed)?;
    writeln!(out).map_err(write_failed)?;
    writeln!(
        out,
        "Next: coverletter generate --template {}",
        SAMPLE_TEMPLATE_FILE
    )
    .map_err(write_failed)?;
    Ok(())
}
