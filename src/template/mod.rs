//! Template storage.
//!
//! Templates are plain UTF-8 files in a single directory, selected by file
//! name. Listing never fails; loading fails with a source error when the file
//! cannot be read.

mod store;

#[cfg(test)]
mod tests;

pub use store::{
    DEFAULT_TEMPLATE_PATTERN, TemplateDescriptor, TemplateStore, list_templates, load_template,
};
pub(crate) use store::compile_pattern;
