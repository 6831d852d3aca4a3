//! Inline block extraction.
//!
//! Style and script blocks are matched with non-greedy patterns that span
//! line boundaries and ignore tag attributes. Matching is textual, not
//! structural: blocks are found independently of nesting depth or document
//! validity, and malformed markup degrades rather than fails.

use regex::Regex;

/// Pattern matching a whole style block, capturing its interior text.
pub(crate) fn style_block_pattern() -> Regex {
    Regex::new(r"(?is)<style[^>]*>(.*?)</style>").unwrap()
}

/// Pattern matching a whole script block, capturing its interior text.
pub(crate) fn script_block_pattern() -> Regex {
    Regex::new(r"(?is)<script[^>]*>(.*?)</script>").unwrap()
}

/// Extracts the interior text of every style block, in document order.
///
/// Contents are returned unmodified, including interior markup.
pub fn extract_styles(html: &str) -> Vec<String> {
    style_block_pattern()
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extracts the interior text of every script block, in document order.
pub fn extract_scripts(html: &str) -> Vec<String> {
    script_block_pattern()
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}
