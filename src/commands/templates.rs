//! Implementation of the `coverletter templates` command.

use super::{open_store, write_failed};
use crate::config::Config;
use crate::error::Result;
use std::io::Write;

/// List template identifiers, one per line.
pub fn cmd_templates<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let store = open_store(config)?;
    let templates = store.list();

    if templates.is_empty() {
        writeln!(out, "No templates found in '{}'.", store.dir().display()).map_err(write_failed)?;
        return Ok(());
    }

    for identifier in templates {
        writeln!(out, "{}", identifier).map_err(write_failed)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::{as_text, config_for};
    use crate::test_support::write_template;
    use tempfile::TempDir;

    #[test]
    fn test_lists_sorted_templates() {
        let temp_dir = TempDir::new().unwrap();
        let templates = temp_dir.path().join("templates");
        write_template(&templates, "zeta.txt", "z");
        write_template(&templates, "alpha.txt", "a");
        write_template(&templates, "notes.md", "ignored");

        let mut out = Vec::new();
        cmd_templates(&config_for(temp_dir.path()), &mut out).unwrap();
        assert_eq!(as_text(out), "alpha.txt\nzeta.txt\n");
    }

    #[test]
    fn test_reports_missing_directory() {
        let temp_dir = TempDir::new().unwrap();

        let mut out = Vec::new();
        cmd_templates(&config_for(temp_dir.path()), &mut out).unwrap();
        let text = as_text(out);
        assert!(text.starts_with("No templates found in '"));
        assert!(text.contains("templates"));
    }
}
