//! Implementation of the `coverletter show` command.
//!
//! Displays a template and which placeholders it uses.

use super::{open_store, write_failed};
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::Result;
use crate::placeholder::{Placeholder, scan_tokens};
use std::io::Write;

const RULE: &str =
    "================================================================================";

/// Execute the `coverletter show` command.
pub fn cmd_show<W: Write>(args: ShowArgs, config: &Config, out: &mut W) -> Result<()> {
    let template = open_store(config)?.load(&args.template)?;
    let report = scan_tokens(&template.raw_text);

    let mut render = || -> std::io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", template.identifier)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;
        write!(out, "{}", template.raw_text)?;
        if !template.raw_text.ends_with('\n') {
            writeln!(out)?;
        }
        writeln!(out)?;

        writeln!(out, "Placeholders:  {}", join_keys(&report.used))?;
        if !report.unused.is_empty() {
            writeln!(out, "Unused:        {}", join_keys(&report.unused))?;
        }
        if !report.unrecognized.is_empty() {
            // Left verbatim by substitution.
            writeln!(out, "Unrecognized:  {}", report.unrecognized.join(", "))?;
        }
        Ok(())
    };

    render().map_err(write_failed)
}

fn join_keys(keys: &[Placeholder]) -> String {
    if keys.is_empty() {
        return "(none)".to_string();
    }
    keys.iter()
        .map(|key| key.key())
        .collect::<Vec<_>>()
        .join(", ")
}
