//! Coverletter: fill cover-letter templates or generate letters with a model.
//!
//! A letter is produced from six fields by one of three backends: a local
//! template fill, a hosted text-generation model, or an external script. The
//! modules map onto that flow:
//!
//! - [`template`]: list and load templates from a directory
//! - [`placeholder`]: the field map and `{key}` substitution
//! - [`backend`]: the generation backends
//! - [`output`]: saving the finished letter

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod output;
pub mod placeholder;
pub mod template;

#[cfg(test)]
mod test_support;
