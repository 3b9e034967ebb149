//! Implementation of the `coverletter generate` command.

use super::{open_store, write_failed};
use crate::backend::GenerationBackend;
use crate::cli::GenerateArgs;
use crate::config::{BackendKind, Config};
use crate::error::Result;
use crate::output::save;
use crate::placeholder::FieldMap;
use std::io::Write;

/// Execute the `coverletter generate` command.
///
/// Builds the field map (fields file first, then per-field flags), runs the
/// selected backend, prints the letter, and saves it when `--output` is given.
pub fn cmd_generate<W: Write>(args: GenerateArgs, config: &Config, out: &mut W) -> Result<()> {
    let kind = args.backend.unwrap_or(config.backend);

    let mut fields = match &args.fields {
        Some(path) => FieldMap::load(path)?,
        None => FieldMap::default(),
    };
    fields.apply_overrides(args.overrides());

    let template = match (&args.template, kind) {
        (Some(identifier), BackendKind::Local) => Some(open_store(config)?.load(identifier)?),
        (Some(identifier), _) => {
            log::warn!(
                "--template '{}' is ignored by the {} backend",
                identifier,
                kind.as_str()
            );
            None
        }
        (None, _) => None,
    };

    let backend = GenerationBackend::from_config(kind, config, template)?;
    let letter = backend.generate(&fields)?;
    writeln!(out, "{}", letter).map_err(write_failed)?;

    if let Some(path) = &args.output {
        save(path, &letter)?;
        eprintln!("Cover letter saved to: {}", path.display());
    }

    Ok(())
}
