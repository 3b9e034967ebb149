//! Configuration types and defaults for coverletter.
//!
//! This module defines the backend selector, the per-backend settings blocks,
//! and the default value functions used by serde.

use crate::template::DEFAULT_TEMPLATE_PATTERN;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Which generation backend produces the letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Fill a template from the template directory (default).
    #[default]
    Local,
    /// Ask a hosted text-generation model over HTTP.
    Remote,
    /// Run an external generation script.
    Script,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Script => "script",
        }
    }
}

/// Settings for the HTTP inference backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Base URL; the model id is appended as the last path segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier (e.g. `meta-llama/LLaMA-2-7b-hf`).
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Request timeout in seconds.
    #[serde(default = "default_remote_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Prompt sent as `inputs`, with `{placeholder}` tokens filled from the fields.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            token_env: default_token_env(),
            timeout_seconds: default_remote_timeout_seconds(),
            prompt_template: default_prompt_template(),
        }
    }
}

/// Settings for the subprocess backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSettings {
    /// Interpreter command, split shell-style (e.g. `python3 -u`).
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Script passed to the interpreter ahead of the six field values.
    #[serde(default = "default_script")]
    pub script: PathBuf,

    /// Seconds to wait before the script is killed.
    #[serde(default = "default_script_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Extra environment variables for the script process.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
            timeout_seconds: default_script_timeout_seconds(),
            environment: HashMap::new(),
        }
    }
}

/// Default prompt for the remote backend.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Write a 300-500 word professional cover letter for a user named {name}, \
addressed to {manager_name} at {company_name} for the position of {job_title}. \
Highlight the user's relevant skills and experience: {skills}, \
and explain how they align with the company's values: {company_values}. \
Use a polite and engaging tone.";

// Default value functions for serde
pub(crate) fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}
pub(crate) fn default_template_pattern() -> String {
    DEFAULT_TEMPLATE_PATTERN.to_string()
}
pub(crate) fn default_output_file() -> PathBuf {
    PathBuf::from("cover_letter.txt")
}
pub(crate) fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}
pub(crate) fn default_model() -> String {
    "meta-llama/LLaMA-2-7b-hf".to_string()
}
pub(crate) fn default_token_env() -> String {
    "HF_API_TOKEN".to_string()
}
pub(crate) fn default_remote_timeout_seconds() -> u64 {
    60
}
pub(crate) fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}
pub(crate) fn default_interpreter() -> String {
    "python".to_string()
}
pub(crate) fn default_script() -> PathBuf {
    PathBuf::from("scripts/gpt.py")
}
pub(crate) fn default_script_timeout_seconds() -> u64 {
    120
}
