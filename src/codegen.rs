//! Source rendering for generated record declarations.
//!
//! Renders a `csv_record!` invocation from a list of field names and type
//! labels. Every field is tagged with its column so the output keeps
//! decoding the same columns even if fields are later reordered.

use crate::constants::{GENERATED_DERIVES, INDENT};
use std::fmt::Write;

/// Render a record declaration.
///
/// `fields` holds `(field name, type label)` pairs in column order.
pub fn render_type_declaration<N, L>(name: &str, fields: &[(N, L)]) -> String
where
    N: AsRef<str>,
    L: AsRef<str>,
{
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "csvscan::csv_record! {{");
    let _ = writeln!(out, "{INDENT}#[derive({})]", GENERATED_DERIVES.join(", "));
    let _ = writeln!(out, "{INDENT}pub struct {name} {{");
    for (column, (field, label)) in fields.iter().enumerate() {
        let _ = writeln!(
            out,
            "{INDENT}{INDENT}pub {}: {} => {column},",
            field.as_ref(),
            label.as_ref()
        );
    }
    let _ = writeln!(out, "{INDENT}}}");
    out.push('}');

    out
}

/// Wrap rendered source in `pub mod <module> { .. }`
pub fn render_module(module: &str, body: &str) -> String {
    let mut out = format!("pub mod {module} {{\n");
    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push('}');
    out
}

/// Whether `name` can be used as a record type name
pub fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
}
