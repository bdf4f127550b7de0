//! Log sanitizing for user-authored strings (SNBT blobs, command templates)
//! so a hostile or sloppy catalog entry cannot break log lines apart.

/// Longest preview of a user string embedded in a log line.
const MAX_PREVIEW: usize = 200;

/// Render `s` as a single log-safe line: newlines, carriage returns, tabs and
/// backslashes become their escaped spellings, other control characters become
/// `\xNN`, and anything past [`MAX_PREVIEW`] characters is cut with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_PREVIEW) {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
