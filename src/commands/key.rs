/// `key` mode: look up a dot-separated path and print its value.
use serde_yaml::Value;

use crate::cli::OutputCtx;
use crate::cli::output::write_document;
use crate::cmdb::{CmdbError, query};

/// Run key mode.
///
/// An unreachable path prints `null` rather than failing.
///
/// # Errors
///
/// Returns `CmdbError::Render` when the resolved value cannot be serialized
/// in the selected format.
pub fn run(doc: &Value, key: &str, ctx: &OutputCtx) -> Result<(), CmdbError> {
    let value = query::lookup(doc, key);
    write_document(&value, ctx)
}
