//! Configuration model for coverletter.
//!
//! This module defines the Config struct that represents `coverletter.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//!
//! ```yaml
//! template_dir: templates
//! template_pattern: "*.txt"
//! backend: local
//! output_file: cover_letter.txt
//! remote:
//!   endpoint: https://api-inference.huggingface.co/models
//!   model: meta-llama/LLaMA-2-7b-hf
//!   token_env: HF_API_TOKEN
//!   timeout_seconds: 60
//! script:
//!   interpreter: python
//!   script: scripts/gpt.py
//!   timeout_seconds: 120
//! ```

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::{BackendKind, DEFAULT_PROMPT_TEMPLATE, RemoteSettings, ScriptSettings};
