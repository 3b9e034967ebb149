//! The six recognized placeholders and the field map that fills them.

use crate::error::{LetterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A recognized placeholder key.
///
/// The declaration order is the canonical order used for positional script
/// arguments and for prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Name,
    ManagerName,
    CompanyName,
    JobTitle,
    Skills,
    CompanyValues,
}

impl Placeholder {
    /// All placeholders in canonical order.
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Name,
        Placeholder::ManagerName,
        Placeholder::CompanyName,
        Placeholder::JobTitle,
        Placeholder::Skills,
        Placeholder::CompanyValues,
    ];

    /// The key as it appears between braces in a template.
    pub fn key(self) -> &'static str {
        match self {
            Placeholder::Name => "name",
            Placeholder::ManagerName => "manager_name",
            Placeholder::CompanyName => "company_name",
            Placeholder::JobTitle => "job_title",
            Placeholder::Skills => "skills",
            Placeholder::CompanyValues => "company_values",
        }
    }

    /// The full delimiter token, e.g. `{manager_name}`.
    pub fn token(self) -> String {
        format!("{{{}}}", self.key())
    }

    /// Human-readable label used when prompting for the value.
    pub fn label(self) -> &'static str {
        match self {
            Placeholder::Name => "Your name",
            Placeholder::ManagerName => "Hiring manager's name",
            Placeholder::CompanyName => "Company name",
            Placeholder::JobTitle => "Job title",
            Placeholder::Skills => "Key skills/experience",
            Placeholder::CompanyValues => "Company values/mission",
        }
    }

    /// Look up a placeholder by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values supplied for one generation request.
///
/// Every recognized key is a struct field, so a key can never be absent; an
/// unsupplied value is the empty string and fails [`FieldMap::validate`].
///
/// Field files (YAML or JSON) use the placeholder keys:
///
/// ```yaml
/// name: Ada
/// manager_name: Grace
/// company_name: Acme
/// job_title: Engineer
/// skills: C++
/// company_values: Integrity
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldMap {
    pub name: String,
    pub manager_name: String,
    pub company_name: String,
    pub job_title: String,
    pub skills: String,
    pub company_values: String,
}

impl FieldMap {
    /// Value for a placeholder.
    pub fn get(&self, key: Placeholder) -> &str {
        match key {
            Placeholder::Name => &self.name,
            Placeholder::ManagerName => &self.manager_name,
            Placeholder::CompanyName => &self.company_name,
            Placeholder::JobTitle => &self.job_title,
            Placeholder::Skills => &self.skills,
            Placeholder::CompanyValues => &self.company_values,
        }
    }

    /// Replace the value for a placeholder.
    pub fn set(&mut self, key: Placeholder, value: impl Into<String>) {
        let slot = match key {
            Placeholder::Name => &mut self.name,
            Placeholder::ManagerName => &mut self.manager_name,
            Placeholder::CompanyName => &mut self.company_name,
            Placeholder::JobTitle => &mut self.job_title,
            Placeholder::Skills => &mut self.skills,
            Placeholder::CompanyValues => &mut self.company_values,
        };
        *slot = value.into();
    }

    /// Builder-style [`FieldMap::set`].
    pub fn with(mut self, key: Placeholder, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate `(placeholder, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> + '_ {
        Placeholder::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Values in canonical order, as passed to a generation script.
    pub fn positional_args(&self) -> Vec<&str> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Placeholders whose value is the empty string.
    pub fn empty_fields(&self) -> Vec<Placeholder> {
        self.iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(p, _)| p)
            .collect()
    }

    /// Fail with a validation error if any value is empty.
    pub fn validate(&self) -> Result<()> {
        let empty = self.empty_fields();
        if empty.is_empty() {
            return Ok(());
        }

        let keys = empty
            .iter()
            .map(|p| p.key())
            .collect::<Vec<_>>()
            .join(", ");
        Err(LetterError::ValidationError(format!(
            "one or more fields are empty: {}",
            keys
        )))
    }

    /// Overwrite values with every `Some` in `overrides`.
    pub fn apply_overrides<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (Placeholder, Option<String>)>,
    {
        for (key, value) in overrides {
            if let Some(value) = value {
                self.set(key, value);
            }
        }
    }

    /// Load field values from a YAML (or JSON) file.
    ///
    /// Keys left out of the file stay empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LetterError::SourceError(format!(
                "failed to read fields file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            LetterError::UserError(format!(
                "failed to parse fields file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
