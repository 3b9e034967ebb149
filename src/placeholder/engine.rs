//! Regex-driven placeholder substitution.
//!
//! All six tokens are matched by one alternation and resolved in a single
//! left-to-right pass. Replacement text is never rescanned, so a value that
//! happens to contain another token (say a skills entry of `"{name}"`) lands
//! in the output literally and the order in which keys are considered cannot
//! change the result.

use super::fields::{FieldMap, Placeholder};
use crate::error::Result;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Matches exactly the recognized tokens.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let keys = Placeholder::ALL
        .iter()
        .map(|p| regex::escape(p.key()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\{{({})\}}", keys)).expect("Invalid placeholder regex")
});

/// Matches anything shaped like a token, recognized or not.
static ANY_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid token regex"));

/// Fill every recognized placeholder in `template` from `fields`.
///
/// Fails with a validation error, before touching the template, if any field
/// is empty. Unrecognized tokens such as `{unknown}` are kept verbatim.
///
/// ```
/// use coverletter::placeholder::{FieldMap, Placeholder, substitute};
///
/// let fields = FieldMap::default()
///     .with(Placeholder::Name, "Ada")
///     .with(Placeholder::ManagerName, "Grace")
///     .with(Placeholder::CompanyName, "Acme")
///     .with(Placeholder::JobTitle, "Engineer")
///     .with(Placeholder::Skills, "C++")
///     .with(Placeholder::CompanyValues, "Integrity");
///
/// let letter = substitute("Dear {manager_name}, I am {name}.", &fields).unwrap();
/// assert_eq!(letter, "Dear Grace, I am Ada.");
/// ```
pub fn substitute(template: &str, fields: &FieldMap) -> Result<String> {
    fields.validate()?;

    let filled = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| {
        match Placeholder::from_key(&caps[1]) {
            Some(key) => fields.get(key).to_string(),
            None => caps[0].to_string(),
        }
    });

    Ok(filled.into_owned())
}

/// Which tokens a template uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenReport {
    /// Recognized placeholders present in the template, in canonical order.
    pub used: Vec<Placeholder>,
    /// Recognized placeholders the template never mentions.
    pub unused: Vec<Placeholder>,
    /// Token-shaped markers that are not recognized keys (typos, extras), sorted.
    pub unrecognized: Vec<String>,
}

/// Report the placeholder tokens found in a template.
pub fn scan_tokens(template: &str) -> TokenReport {
    let mut used = BTreeSet::new();
    let mut unrecognized = BTreeSet::new();

    for caps in ANY_TOKEN_RE.captures_iter(template) {
        match Placeholder::from_key(&caps[1]) {
            Some(key) => {
                used.insert(key);
            }
            None => {
                unrecognized.insert(caps[0].to_string());
            }
        }
    }

    TokenReport {
        unused: Placeholder::ALL
            .into_iter()
            .filter(|p| !used.contains(p))
            .collect(),
        used: used.into_iter().collect(),
        unrecognized: unrecognized.into_iter().collect(),
    }
}
