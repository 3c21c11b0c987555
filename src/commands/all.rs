/// Default mode: dump the whole document minus the `mapping` bookkeeping key.
use serde_yaml::Value;

use crate::cli::OutputCtx;
use crate::cli::output::write_document;
use crate::cmdb::{CmdbError, query};

/// Run all-applications mode.
///
/// # Errors
///
/// Returns `CmdbError::MissingMapping` when the document carries no
/// top-level `mapping` key, and `CmdbError::Render` on serialization
/// failure.
pub fn run(doc: &Value, ctx: &OutputCtx) -> Result<(), CmdbError> {
    let view = query::all_apps(doc, &ctx.cmdb_file)?;
    write_document(&view, ctx)
}
