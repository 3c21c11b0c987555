/// Document loading: file read, YAML parse, failure classification.
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use super::errors::CmdbError;

/// Read and parse a CMDB document.
///
/// Anchors and aliases in the input are expanded into plain values during
/// parsing, so the returned document is always self-contained. No schema
/// validation happens beyond what parsing itself requires.
///
/// # Errors
///
/// `FileAccess` when the file cannot be read, `Syntax` for malformed YAML,
/// `Alias` for an alias referencing an undefined anchor, and `Format` for
/// any other parser failure.
pub fn load_document(path: &Path) -> Result<Value, CmdbError> {
    let text = fs::read_to_string(path).map_err(|source| CmdbError::FileAccess {
        path: path.display().to_string(),
        source,
    })?;

    serde_yaml::from_str(&text).map_err(|source| classify(path, source))
}

/// Map a `serde_yaml` failure onto the load error taxonomy.
///
/// serde_yaml reports every failure through one opaque error type, so
/// classification goes by shape: an undefined alias always mentions
/// "unknown anchor", positioned errors are syntax errors, and anything
/// without a source location (e.g. multi-document input) falls through to
/// the generic format category.
fn classify(path: &Path, source: serde_yaml::Error) -> CmdbError {
    let path = path.display().to_string();
    if source.to_string().contains("unknown anchor") {
        CmdbError::Alias { path, source }
    } else if source.location().is_some() {
        CmdbError::Syntax { path, source }
    } else {
        CmdbError::Format { path, source }
    }
}
