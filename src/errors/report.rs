use std::fmt::Write;

use crate::get_line;

use super::errors::{Error, ErrorTip};

/// Renders an error against its source text.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `{`, expected ')')
/// -> funciones.taf
///    |
/// 20 | macorróca chátené doble ( chátené x {
///    | ------------------------------------^
/// ```
pub fn render_diagnostic(error: &Error, source: &str, file_name: &str) -> String {
    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file_name);
    let _ = writeln!(out, "{:>padding$}", "|");

    let line_text = get_line(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(|c| c == ' ' || c == '\t');
    (trimmed, string.chars().count() - trimmed.chars().count())
}
