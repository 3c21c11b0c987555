/// Command dispatch: routes the resolved `Mode` to its implementation.
pub mod all;
pub mod app;
pub mod key;
pub mod table;

use serde_yaml::Value;

use crate::cli::OutputCtx;
use crate::cli::args::Mode;
use crate::cmdb::CmdbError;

/// Dispatch a resolved [`Mode`] against a loaded document.
///
/// # Errors
///
/// Returns `CmdbError` on any query or render failure.
pub fn dispatch(mode: &Mode, doc: &Value, ctx: &OutputCtx) -> Result<(), CmdbError> {
    match mode {
        Mode::Key(key) => key::run(doc, key, ctx),
        Mode::App(app) => app::run(doc, app, ctx),
        Mode::Table => {
            table::run(doc, ctx);
            Ok(())
        }
        Mode::AllApps => all::run(doc, ctx),
    }
}
