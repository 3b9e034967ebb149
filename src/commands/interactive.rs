//! Implementation of the `coverletter interactive` command.
//!
//! A console wizard: pick a template from a numbered list (local backend),
//! answer one prompt per field, and the letter is generated and saved to the
//! configured output file. Empty answers send the user back through field
//! entry instead of ending the session.

use super::{open_store, write_failed};
use crate::backend::GenerationBackend;
use crate::cli::InteractiveArgs;
use crate::config::{BackendKind, Config};
use crate::error::{LetterError, Result};
use crate::output::save;
use crate::placeholder::{FieldMap, Placeholder};
use crate::template::TemplateDescriptor;
use std::io::{BufRead, Write};

/// Execute the `coverletter interactive` command.
pub fn cmd_interactive<R: BufRead, W: Write>(
    args: InteractiveArgs,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let kind = args.backend.unwrap_or(config.backend);

    let template = if kind == BackendKind::Local {
        match choose_template(config, input, out)? {
            Some(template) => Some(template),
            None => return Ok(()),
        }
    } else {
        None
    };

    let backend = GenerationBackend::from_config(kind, config, template)?;

    let letter = loop {
        let fields = read_fields(input, out)?;
        match backend.generate(&fields) {
            Ok(letter) => break letter,
            Err(e) if e.is_validation() => {
                writeln!(out, "\n{}. Please fill in every field.\n", e).map_err(write_failed)?;
            }
            Err(e) => return Err(e),
        }
    };

    save(&config.output_file, &letter)?;
    writeln!(
        out,
        "\nCover letter generated and saved as '{}'",
        config.output_file.display()
    )
    .map_err(write_failed)?;
    Ok(())
}

/// Show the numbered template list and load the user's choice.
///
/// Returns `None` when there is nothing to choose from.
fn choose_template<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<Option<TemplateDescriptor>> {
    let store = open_store(config)?;
    let templates = store.list();

    if templates.is_empty() {
        writeln!(out, "No templates found in '{}'.", store.dir().display()).map_err(write_failed)?;
        return Ok(None);
    }

    writeln!(out, "Available Templates:").map_err(write_failed)?;
    for (i, identifier) in templates.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, identifier).map_err(write_failed)?;
    }

    let mut prompt = "Enter the number of the template you want to use: ";
    let choice = loop {
        let answer = ask(input, out, prompt)?;
        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=templates.len()).contains(&n) => break n,
            Ok(_) => prompt = "Invalid choice. Please enter a valid number: ",
            Err(_) => prompt = "Please enter a number: ",
        }
    };

    store.load(&templates[choice - 1]).map(Some)
}

/// Prompt for all six fields in canonical order.
fn read_fields<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<FieldMap> {
    let mut fields = FieldMap::default();
    for key in Placeholder::ALL {
        let answer = ask(input, out, &format!("{}: ", key.label()))?;
        fields.set(key, answer);
    }
    Ok(fields)
}

/// Print `prompt` and read one line, without its line ending.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)
        .and_then(|_| out.flush())
        .map_err(write_failed)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| {
        LetterError::UserError(format!("failed to read from the console: {}", e))
    })?;
    if read == 0 {
        return Err(LetterError::UserError(
            "input ended before all answers were given".to_string(),
        ));
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
