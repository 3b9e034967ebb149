//! Placeholder validation and substitution.
//!
//! Templates carry `{key}` tokens for six recognized keys:
//!
//! ```text
//! Dear {manager_name},
//!
//! I am {name}, applying for the {job_title} role at {company_name}.
//! My background in {skills} fits your commitment to {company_values}.
//! ```
//!
//! Values are inserted literally. Anything else in braces is left alone.

mod engine;
mod fields;


pub use engine::{TokenReport, scan_tokens, substitute};
pub use fields::{FieldMap, Placeholder};
