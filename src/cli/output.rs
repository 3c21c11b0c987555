/// Output rendering: YAML and JSON serialization of derived documents.
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_yaml::Value;

use super::args::OutputFormat;
use crate::cmdb::CmdbError;

/// Spaces per indentation level in YAML output.
const INDENT: usize = 4;

/// Output context shared by all commands.
pub struct OutputCtx {
    /// Serialization format for rendered documents.
    pub format: OutputFormat,
    /// Path of the loaded CMDB file, used in the table header and diagnostics.
    pub cmdb_file: PathBuf,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, cmdb_file: PathBuf) -> Self {
        Self { format, cmdb_file }
    }
}

/// Serialize a derived document and print it to stdout.
///
/// # Errors
///
/// Returns `CmdbError::Render` when the value cannot be represented in the
/// selected format (e.g. a non-string mapping key in JSON mode).
pub fn write_document(doc: &Value, ctx: &OutputCtx) -> Result<(), CmdbError> {
    let text = render(doc, ctx.format).map_err(|source| CmdbError::Render {
        path: ctx.cmdb_file.display().to_string(),
        source,
    })?;
    println!("{text}");
    Ok(())
}

/// Render a document to a string in the selected format.
///
/// # Errors
///
/// JSON serialization fails on values JSON cannot represent; YAML rendering
/// is infallible.
pub fn render(doc: &Value, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(doc),
        OutputFormat::Yaml => Ok(to_yaml(doc)),
    }
}

fn to_json(doc: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// --- YAML emission ---
//
// serde_yaml's emitter is fixed at 2-space indentation, so block-style
// output is produced here directly. Aliases never appear: the loader already
// expanded every anchor into plain values, and the emitter only ever writes
// values inline.

fn to_yaml(doc: &Value) -> String {
    let mut out = String::new();
    emit_node(doc, 0, &mut out);
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn emit_node(value: &Value, level: usize, out: &mut String) {
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            for (key, entry) in map {
                push_indent(level, out);
                out.push_str(&flow_text(key));
                out.push(':');
                emit_entry(entry, level, out);
            }
        }
        Value::Sequence(seq) if !seq.is_empty() => {
            for item in seq {
                push_indent(level, out);
                out.push('-');
                emit_entry(item, level, out);
            }
        }
        Value::Tagged(tagged) => emit_node(&tagged.value, level, out),
        other => {
            push_indent(level, out);
            out.push_str(&flow_text(other));
            out.push('\n');
        }
    }
}

/// Write the value part after a `key:` or `-` introducer: scalars and empty
/// containers stay on the same line, non-empty containers open an indented
/// block on the next line.
fn emit_entry(value: &Value, level: usize, out: &mut String) {
    if has_block_body(value) {
        out.push('\n');
        emit_node(value, level + 1, out);
    } else {
        out.push(' ');
        out.push_str(&flow_text(value));
        out.push('\n');
    }
}

fn has_block_body(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => !map.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Tagged(tagged) => has_block_body(&tagged.value),
        _ => false,
    }
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level * INDENT {
        out.push(' ');
    }
}

/// Single-line rendering of a value: scalars, empty containers, and the
/// flow form of containers used when a mapping key is itself a collection.
fn flow_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => string_text(s),
        Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(flow_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", flow_text(k), flow_text(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => flow_text(&tagged.value),
    }
}

fn string_text(s: &str) -> String {
    if is_plain_safe(s) {
        s.to_owned()
    } else {
        quoted(s)
    }
}

/// Whether a string can be emitted as a plain (unquoted) YAML scalar without
/// changing meaning on re-parse. Deliberately conservative: anything that
/// could resolve as null/bool/number, or that contains structural characters,
/// gets double-quoted instead.
fn is_plain_safe(s: &str) -> bool {
    if s.is_empty() || s.trim() != s {
        return false;
    }
    if matches!(
        s,
        "~" | "null"
            | "Null"
            | "NULL"
            | "true"
            | "True"
            | "TRUE"
            | "false"
            | "False"
            | "FALSE"
            | "yes"
            | "Yes"
            | "YES"
            | "no"
            | "No"
            | "NO"
            | "on"
            | "On"
            | "ON"
            | "off"
            | "Off"
            | "OFF"
    ) {
        return false;
    }
    // Covers ints, floats, exponent forms, inf and nan spellings.
    if s.parse::<f64>().is_ok() {
        return false;
    }
    // Sexagesimal-ish and radix-prefixed forms some 1.1 parsers accept.
    if s.len() > 2 && (s.starts_with("0x") || s.starts_with("0o")) {
        return false;
    }
    if s.starts_with([
        '!', '&', '*', '#', '?', '|', '>', '%', '@', '`', '"', '\'', '-', ':',
    ]) {
        return false;
    }
    if s.contains([',', '[', ']', '{', '}'])
        || s.contains(": ")
        || s.ends_with(':')
        || s.contains(" #")
    {
        return false;
    }
    !s.chars().any(char::is_control)
}

fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
