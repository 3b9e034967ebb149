//! Template directory listing and loading.

use crate::error::{LetterError, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Default file-name filter for templates.
pub const DEFAULT_TEMPLATE_PATTERN: &str = "*.txt";

/// A template read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// File name of the template within the template directory.
    pub identifier: String,
    /// Unmodified template contents.
    pub raw_text: String,
}

/// A directory of letter templates, filtered by a file-name glob.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
    matcher: GlobMatcher,
}

impl TemplateStore {
    /// Create a store over `dir` that lists files matching `pattern`.
    ///
    /// The pattern is matched against file names only (e.g. `*.txt`).
    pub fn new<P: Into<PathBuf>>(dir: P, pattern: &str) -> Result<Self> {
        let matcher = compile_pattern(pattern)?;
        Ok(Self {
            dir: dir.into(),
            matcher,
        })
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List template identifiers, sorted by name.
    ///
    /// A missing or unreadable directory yields an empty list; "no templates"
    /// is a normal state for the caller to report.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("template directory '{}' does not exist", self.dir.display());
                return Vec::new();
            }
            Err(e) => {
                log::warn!(
                    "failed to list templates in '{}': {}",
                    self.dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut templates: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| self.matcher.is_match(name))
            .collect();

        templates.sort();
        log::debug!(
            "found {} template(s) in '{}'",
            templates.len(),
            self.dir.display()
        );
        templates
    }

    /// Read a template by identifier.
    pub fn load(&self, identifier: &str) -> Result<TemplateDescriptor> {
        check_identifier(identifier)?;

        let path = self.dir.join(identifier);
        let raw_text = fs::read_to_string(&path).map_err(|e| {
            LetterError::SourceError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::info!("loaded template '{}' ({} bytes)", identifier, raw_text.len());
        Ok(TemplateDescriptor {
            identifier: identifier.to_string(),
            raw_text,
        })
    }
}

/// List templates in `directory` using the default `*.txt` filter.
pub fn list_templates<P: AsRef<Path>>(directory: P) -> Vec<String> {
    match TemplateStore::new(directory.as_ref(), DEFAULT_TEMPLATE_PATTERN) {
        Ok(store) => store.list(),
        Err(_) => Vec::new(),
    }
}

/// Load a template from `directory` by identifier.
pub fn load_template<P: AsRef<Path>>(directory: P, identifier: &str) -> Result<TemplateDescriptor> {
    TemplateStore::new(directory.as_ref(), DEFAULT_TEMPLATE_PATTERN)?.load(identifier)
}

/// Compile a file-name glob, reporting a user error on bad syntax.
pub(crate) fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    if pattern.trim().is_empty() {
        return Err(LetterError::UserError(
            "template pattern must not be empty".to_string(),
        ));
    }

    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            LetterError::UserError(format!("invalid template pattern '{}': {}", pattern, e))
        })
}

/// Identifiers are bare file names; anything that could leave the template
/// directory is rejected.
fn check_identifier(identifier: &str) -> Result<()> {
    let mut components = Path::new(identifier).components();
    let is_bare_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if identifier.is_empty() || !is_bare_name || identifier.contains(['/', '\\']) {
        return Err(LetterError::SourceError(format!(
            "invalid template name '{}': expected a file name inside the template directory",
            identifier
        )));
    }

    Ok(())
}
