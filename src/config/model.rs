//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for coverletter.
///
/// This struct represents the contents of `coverletter.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Templates
    // =========================================================================
    /// Directory holding letter templates. Relative paths are resolved
    /// against the directory of the config file.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// File-name glob selecting templates inside `template_dir`.
    #[serde(default = "default_template_pattern")]
    pub template_pattern: String,

    // =========================================================================
    // Generation
    // =========================================================================
    /// Backend used when none is given on the command line.
    #[serde(default)]
    pub backend: BackendKind,

    /// HTTP inference backend settings.
    #[serde(default)]
    pub remote: RemoteSettings,

    /// Script backend settings.
    #[serde(default)]
    pub script: ScriptSettings,

    // =========================================================================
    // Output
    // =========================================================================
    /// Where `interactive` saves the letter (relative to the working directory).
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            template_pattern: default_template_pattern(),
            backend: BackendKind::default(),
            remote: RemoteSettings::default(),
            script: ScriptSettings::default(),
            output_file: default_output_file(),
        }
    }
}
