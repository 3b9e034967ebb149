//! Config loading, discovery, validation, and path resolution.

use super::model::Config;
use crate::error::{LetterError, Result};
use crate::template::compile_pattern;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "coverletter.yaml";

/// Per-user config file, relative to the platform config directory.
const USER_CONFIG_FILE: &str = "coverletter/config.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Relative `template_dir` and `script.script` paths are resolved against
    /// the directory containing the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LetterError::SourceError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content).map_err(|e| match e {
            LetterError::UserError(msg) => {
                LetterError::UserError(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        log::debug!("loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Find and load the effective config.
    ///
    /// Lookup order:
    /// 1. `explicit` (must exist)
    /// 2. `coverletter.yaml` in `cwd`
    /// 3. `coverletter/config.yaml` in the user's config directory
    /// 4. built-in defaults
    ///
    /// Returns the config and the file it came from, if any.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = [
            Some(cwd.join(DEFAULT_CONFIG_FILE)),
            dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE)),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Ok((Self::load(&path)?, Some(path)));
            }
        }

        log::debug!("no config file found, using defaults");
        let mut config = Self::default();
        config.resolve_paths(cwd);
        Ok((config, None))
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| LetterError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LetterError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `template_pattern` must be a valid, non-empty glob
    /// - `remote.endpoint`, `remote.model` and `remote.token_env` must be non-empty
    /// - `script.interpreter` must be non-empty
    /// - both timeouts must be positive
    pub fn validate(&self) -> Result<()> {
        compile_pattern(&self.template_pattern).map_err(|e| {
            LetterError::UserError(format!("config validation failed: {}", e))
        })?;

        let required = [
            ("remote.endpoint", &self.remote.endpoint),
            ("remote.model", &self.remote.model),
            ("remote.token_env", &self.remote.token_env),
            ("script.interpreter", &self.script.interpreter),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(LetterError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    key
                )));
            }
        }

        if self.remote.timeout_seconds == 0 {
            return Err(LetterError::UserError(
                "config validation failed: remote.timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        if self.script.timeout_seconds == 0 {
            return Err(LetterError::UserError(
                "config validation failed: script.timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Make relative template and script paths absolute against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.template_dir.is_relative() {
            self.template_dir = base.join(&self.template_dir);
        }
        if self.script.script.is_relative() {
            self.script.script = base.join(&self.script.script);
        }
    }
}
