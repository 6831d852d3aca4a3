//! Document rewriting.
//!
//! After extraction and asset relocation, each page is rewritten for the
//! static-site layout: style blocks collapse to a shared stylesheet link,
//! script blocks are removed entirely, the external script references are
//! injected before the closing body tag, and leading indentation common to
//! the whole document is stripped.

use regex::Regex;

use crate::extract::{script_block_pattern, style_block_pattern};

/// Stylesheet link that replaces each extracted style block.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="style.css">"#;

/// External script references injected before the closing body tag, in the
/// order pages load them. The order is fixed for a whole run.
pub const SCRIPT_INCLUDES: [&str; 3] = [
    r#"<script src="scripts/chatbot.js"></script>"#,
    r#"<script src="scripts/calculator.js"></script>"#,
    r#"<script src="scripts/main.js"></script>"#,
];

/// Rewrites a document body for the static-site layout.
///
/// Pages without a closing body tag receive no script references; the
/// injection is silently dropped.
pub fn rewrite_document(html: &str) -> String {
    let body = style_block_pattern().replace_all(html, STYLESHEET_LINK);
    let body = script_block_pattern().replace_all(&body, "");
    let body = inject_script_includes(&body);
    dedent(&body).trim().to_string()
}

/// Injects the external script reference tags before each closing body tag
/// (case-insensitive).
fn inject_script_includes(html: &str) -> String {
    let closing_body = Regex::new(r"(?i)</body>").unwrap();
    let replacement = format!("{}\n</body>", SCRIPT_INCLUDES.join("\n"));
    closing_body.replace_all(html, replacement.as_str()).to_string()
}

/// Strips the longest whitespace prefix common to every non-blank line.
fn dedent(text: &str) -> String {
    let mut margin: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - trimmed.len()];
        margin = Some(match margin {
            None => indent.to_string(),
            Some(current) => common_prefix(&current, indent),
        });
        if margin.as_deref() == Some("") {
            break;
        }
    }

    match margin {
        Some(margin) if !margin.is_empty() => text
            .lines()
            .map(|line| line.strip_prefix(&margin).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => text.to_string(),
    }
}

fn common_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_block_becomes_link() {
        let html = "<head><style>body { margin: 0; }</style></head><body></body>";
        let result = rewrite_document(html);
        assert!(result.contains(STYLESHEET_LINK));
        assert!(!result.contains("<style"));
        assert!(!result.contains("margin: 0"));
    }

    #[test]
    fn test_script_blocks_removed() {
        let html = "<body><script>alert(1);</script><p>kept</p></body>";
        let result = rewrite_document(html);
        assert!(!result.contains("<script>alert"));
        assert!(result.contains("<p>kept</p>"));
    }

    #[test]
    fn test_includes_injected_before_closing_body() {
        let html = "<body><p>content</p></body>";
        let result = rewrite_document(html);

        for include in SCRIPT_INCLUDES {
            assert_eq!(result.matches(include).count(), 1);
        }
        let body_end = result.find("</body>").unwrap();
        let content = result.find("<p>content</p>").unwrap();
        for include in SCRIPT_INCLUDES {
            let pos = result.find(include).unwrap();
            assert!(pos > content && pos < body_end);
        }
    }

    #[test]
    fn test_include_order_is_fixed() {
        let result = rewrite_document("<body></body>");
        let positions: Vec<usize> = SCRIPT_INCLUDES.iter().map(|tag| result.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_closing_body_case_insensitive() {
        let result = rewrite_document("<BODY><p>x</p></BODY>");
        assert!(result.contains("scripts/main.js"));
    }

    #[test]
    fn test_no_body_tag_drops_injection() {
        let result = rewrite_document("<div><p>fragment</p></div>");
        assert!(!result.contains("scripts/main.js"));
    }

    #[test]
    fn test_page_without_blocks_still_gets_includes() {
        let html = "<html><body><p>plain</p></body></html>";
        let result = rewrite_document(html);
        for include in SCRIPT_INCLUDES {
            assert!(result.contains(include));
        }
    }

    #[test]
    fn test_dedent_strips_uniform_indentation() {
        let text = "    <html>\n      <body>\n    </html>";
        assert_eq!(dedent(text), "<html>\n  <body>\n</html>");
    }

    #[test]
    fn test_dedent_noop_without_common_margin() {
        let text = "<html>\n  <body>";
        assert_eq!(dedent(text), text);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let result = rewrite_document("\n\n  <body></body>  \n");
        assert!(result.starts_with("<body>"));
        assert!(result.ends_with("</body>"));
    }
}
