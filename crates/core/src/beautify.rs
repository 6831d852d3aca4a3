//! Cosmetic script formatting.
//!
//! A best-effort readability pass applied to each script fragment before it
//! is stored: line breaks are inserted after statement-terminating
//! semicolons and closing braces that do not already precede one, and the
//! whole fragment is trimmed. The pass is pure text substitution with no
//! awareness of string literals, comments, or regex bodies; literal `;` or
//! `}` inside those are split too. That imprecision is accepted.

/// Inserts line breaks after `;` and `}` where none follow, then trims.
///
/// Idempotent for fragments without semicolons or braces inside string
/// literals: a second application changes nothing.
pub fn beautify_script(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let mut out = String::with_capacity(code.len() + 16);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if (c == ';' || c == '}') && !followed_by_newline(&chars[i + 1..]) {
            out.push('\n');
        }
    }

    out.trim().to_string()
}

/// True when a newline appears before any non-whitespace character.
fn followed_by_newline(rest: &[char]) -> bool {
    for &c in rest {
        if c == '\n' {
            return true;
        }
        if !c.is_whitespace() {
            return false;
        }
    }
    false
}
