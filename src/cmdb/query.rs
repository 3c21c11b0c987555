/// Query engine: path lookup, application slice, all-applications view.
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::errors::CmdbError;

/// Descend the document along a dot-separated key path.
///
/// Each segment is looked up as a mapping key. An absent key, or a further
/// segment requested below a scalar or sequence, resolves to `Null` for the
/// remainder of the walk rather than failing; the value reached after the
/// final segment is returned as-is.
#[must_use]
pub fn lookup(doc: &Value, key: &str) -> Value {
    let mut current = doc;
    for segment in key.split('.') {
        current = match current {
            Value::Mapping(map) => map.get(segment).unwrap_or(&Value::Null),
            _ => &Value::Null,
        };
    }
    current.clone()
}

/// Build the app-slice view: shared `common` settings plus the one named
/// application under `apps`.
///
/// A missing `apps` section or an unknown application degrades to an empty
/// mapping rather than failing; a missing `common` key does the same.
#[must_use]
pub fn app_slice(doc: &Value, app: &str) -> Value {
    let common = doc.get("common").cloned().unwrap_or_else(empty_mapping);
    let app_data = match doc.get("apps") {
        Some(Value::Mapping(apps)) => apps.get(app).cloned().unwrap_or_else(empty_mapping),
        _ => empty_mapping(),
    };

    let mut apps = Mapping::new();
    apps.insert(Value::String(app.to_owned()), app_data);

    let mut slice = Mapping::new();
    slice.insert(Value::String("common".to_owned()), common);
    slice.insert(Value::String("apps".to_owned()), Value::Mapping(apps));
    Value::Mapping(slice)
}

/// Build the all-applications view: the whole document minus the top-level
/// `mapping` bookkeeping key, remaining keys in document order.
///
/// # Errors
///
/// `MissingMapping` when the document has no top-level `mapping` key (or is
/// not a mapping at all). The key is written into every stack document by
/// tooling; its absence means this is not a stack file, and silently
/// dumping it whole would hide that.
pub fn all_apps(doc: &Value, cmdb_file: &Path) -> Result<Value, CmdbError> {
    let missing = || CmdbError::MissingMapping {
        path: cmdb_file.display().to_string(),
    };

    let Value::Mapping(map) = doc else {
        return Err(missing());
    };
    let mut view = map.clone();
    view.shift_remove("mapping").ok_or_else(missing)?;
    Ok(Value::Mapping(view))
}

fn empty_mapping() -> Value {
    Value::Mapping(Mapping::new())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn doc() -> Value {
        serde_yaml::from_str(concat!(
            "common:\n",
            "  region: us-east-2\n",
            "  bake:\n",
            "    base_ami: ami-a8d2d7ce\n",
            "apps:\n",
            "  jump:\n",
            "    app_branch: master\n",
            "  v2api:\n",
            "    app_branch: tags/2.0.0\n",
            "mapping:\n",
            "  x: 1\n",
        ))
        .expect("fixture should parse")
    }

    fn stack_path() -> PathBuf {
        PathBuf::from("stacks/dev1.yml")
    }

    #[test]
    fn test_lookup_nested_scalar() {
        assert_eq!(
            lookup(&doc(), "common.bake.base_ami"),
            Value::String("ami-a8d2d7ce".to_owned())
        );
    }

    #[test]
    fn test_lookup_single_segment_returns_subtree() {
        let result = lookup(&doc(), "common");
        assert!(matches!(result, Value::Mapping(_)));
        assert_eq!(
            result.get("region"),
            Some(&Value::String("us-east-2".to_owned()))
        );
    }

    #[test]
    fn test_lookup_absent_segment_is_null() {
        assert_eq!(lookup(&doc(), "common.nope"), Value::Null);
    }

    #[test]
    fn test_lookup_continues_past_absent_segment() {
        assert_eq!(lookup(&doc(), "common.nope.deeper.still"), Value::Null);
    }

    #[test]
    fn test_lookup_through_scalar_is_null() {
        assert_eq!(lookup(&doc(), "common.region.zone"), Value::Null);
    }

    #[test]
    fn test_lookup_on_non_mapping_root_is_null() {
        assert_eq!(lookup(&Value::Null, "anything"), Value::Null);
    }

    #[test]
    fn test_app_slice_shape() {
        let slice = app_slice(&doc(), "jump");
        let Value::Mapping(map) = &slice else {
            panic!("slice should be a mapping");
        };
        let keys: Vec<&Value> = map.keys().collect();
        assert_eq!(
            keys,
            [
                &Value::String("common".to_owned()),
                &Value::String("apps".to_owned())
            ]
        );
        assert_eq!(
            slice.get("apps").and_then(|a| a.get("jump")).and_then(|j| j.get("app_branch")),
            Some(&Value::String("master".to_owned()))
        );
        assert_eq!(
            slice.get("common").and_then(|c| c.get("region")),
            Some(&Value::String("us-east-2".to_owned()))
        );
    }

    #[test]
    fn test_app_slice_excludes_other_apps() {
        let slice = app_slice(&doc(), "jump");
        assert_eq!(slice.get("apps").and_then(|a| a.get("v2api")), None);
    }

    #[test]
    fn test_app_slice_unknown_app_is_empty_mapping() {
        let slice = app_slice(&doc(), "ghost");
        assert_eq!(
            slice.get("apps").and_then(|a| a.get("ghost")),
            Some(&Value::Mapping(Mapping::new()))
        );
    }

    #[test]
    fn test_app_slice_without_common_or_apps() {
        let bare: Value = serde_yaml::from_str("other: 1\n").expect("fixture");
        let slice = app_slice(&bare, "jump");
        assert_eq!(slice.get("common"), Some(&Value::Mapping(Mapping::new())));
        assert_eq!(
            slice.get("apps").and_then(|a| a.get("jump")),
            Some(&Value::Mapping(Mapping::new()))
        );
    }

    #[test]
    fn test_all_apps_strips_mapping_key() {
        let view = all_apps(&doc(), &stack_path()).expect("mapping key present");
        assert_eq!(view.get("mapping"), None);
        assert!(view.get("common").is_some());
        assert!(view.get("apps").is_some());
    }

    #[test]
    fn test_all_apps_preserves_key_order() {
        let view = all_apps(&doc(), &stack_path()).expect("mapping key present");
        let Value::Mapping(map) = &view else {
            panic!("view should be a mapping");
        };
        let keys: Vec<&Value> = map.keys().collect();
        assert_eq!(
            keys,
            [
                &Value::String("common".to_owned()),
                &Value::String("apps".to_owned())
            ]
        );
    }

    #[test]
    fn test_all_apps_missing_mapping_is_fatal() {
        let bare: Value = serde_yaml::from_str("common: {}\napps: {}\n").expect("fixture");
        let err = all_apps(&bare, &stack_path()).unwrap_err();
        assert!(matches!(err, CmdbError::MissingMapping { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("dev1.yml"));
    }

    #[test]
    fn test_all_apps_non_mapping_document_is_fatal() {
        let err = all_apps(&Value::Null, &stack_path()).unwrap_err();
        assert!(matches!(err, CmdbError::MissingMapping { .. }));
    }

    #[test]
    fn test_source_document_is_not_mutated() {
        let original = doc();
        let _ = all_apps(&original, &stack_path()).expect("mapping key present");
        assert!(original.get("mapping").is_some());
    }
}
