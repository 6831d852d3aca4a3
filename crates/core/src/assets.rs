//! Local image relocation.
//!
//! Scans a document body for `img` `src` values and copies the ones that
//! point at existing local files into the assets directory, rewriting every
//! literal occurrence of the original reference to `assets/<basename>`.
//! Remote references are invariant, and a missing file or failed copy leaves
//! the original reference untouched with no error surfaced. Name collisions
//! between documents overwrite silently.

use std::fs;
use std::path::Path;

use regex::Regex;
use url::Url;

/// Pattern matching an `img` tag's `src` attribute value.
fn img_src_pattern() -> Regex {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).unwrap()
}

/// True when the reference points outside the local filesystem: any value
/// that parses as an absolute URL, which covers `http(s)://...` and inline
/// `data:` payloads.
fn is_remote(reference: &str) -> bool {
    Url::parse(reference).is_ok()
}

/// Copies locally-referenced images into `assets_dir` and rewrites their
/// references in the body.
///
/// Relative references resolve against `base_dir`, the directory of the
/// owning document. Returns the rewritten body and the basenames of the
/// files that were copied.
pub fn relocate_assets(html: &str, base_dir: &Path, assets_dir: &Path) -> (String, Vec<String>) {
    let mut body = html.to_string();
    let mut copied: Vec<String> = Vec::new();

    for caps in img_src_pattern().captures_iter(html) {
        let reference = &caps[1];
        if is_remote(reference) {
            continue;
        }

        let source = base_dir.join(reference);
        if !source.is_file() {
            continue;
        }
        let Some(file_name) = source.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        if fs::copy(&source, assets_dir.join(&file_name)).is_err() {
            continue;
        }

        let new_reference = format!("assets/{file_name}");
        body = body.replace(reference, &new_reference);
        if !copied.contains(&file_name) {
            copied.push(file_name);
        }
    }

    (body, copied)
}
