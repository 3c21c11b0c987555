/// `app` mode: print one application's settings plus shared common settings.
use serde_yaml::Value;

use crate::cli::OutputCtx;
use crate::cli::output::write_document;
use crate::cmdb::{CmdbError, query};

/// Run app mode.
///
/// An unknown application yields an empty mapping under `apps`, not an error.
///
/// # Errors
///
/// Returns `CmdbError::Render` when the slice cannot be serialized in the
/// selected format.
pub fn run(doc: &Value, app: &str, ctx: &OutputCtx) -> Result<(), CmdbError> {
    let slice = query::app_slice(doc, app);
    write_document(&slice, ctx)
}
