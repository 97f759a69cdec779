// src/core/sanitize.rs

/// Whitespace the site pads cells with: ASCII blanks plus NUL and vertical tab.
fn is_pad(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Trim cell padding from both ends; inner whitespace is left alone.
pub fn trim_cell(s: &str) -> &str {
    s.trim_matches(is_pad)
}

/// Collapse runs of whitespace into a single space and trim. Used for log output only.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Escape a string for embedding in a double-quoted AppleScript literal.
pub fn applescript_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\r' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}
