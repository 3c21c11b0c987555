/// `table` mode: print the per-application version table.
///
/// This mode bypasses the generic renderer: the two-column fixed-width
/// layout is a contract of its own and no output format flag applies.
use serde_yaml::Value;

use crate::cli::OutputCtx;

/// Print the version table, one row per application in document key order.
pub fn run(doc: &Value, ctx: &OutputCtx) {
    let basename = ctx
        .cmdb_file
        .file_name()
        .unwrap_or_else(|| ctx.cmdb_file.as_os_str())
        .to_string_lossy();

    println!("\n Version table for {basename} \n");
    for (name, version) in version_rows(doc) {
        println!("{}", format_row(&name, &version));
    }
}

/// Collect `(application, version)` rows from `apps` in document key order.
/// A missing or non-mapping `apps` section yields an empty table.
fn version_rows(doc: &Value) -> Vec<(String, String)> {
    let Some(Value::Mapping(apps)) = doc.get("apps") else {
        return Vec::new();
    };
    apps.iter()
        .map(|(name, settings)| {
            (
                scalar_text(name).unwrap_or_default(),
                display_version(settings),
            )
        })
        .collect()
}

/// Derive the display version: `app_branch` (the literal `None` when absent
/// or not a scalar) with a single leading `tags/` prefix stripped.
fn display_version(settings: &Value) -> String {
    match settings.get("app_branch").and_then(scalar_text) {
        Some(branch) => branch.strip_prefix("tags/").unwrap_or(&branch).to_owned(),
        None => "None".to_owned(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn format_row(name: &str, version: &str) -> String {
    format!("{name:>15}{version:>15}")
}
