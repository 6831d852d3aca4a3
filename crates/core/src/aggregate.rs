//! Shared-file aggregation.
//!
//! Collected fragments are concatenated into their final shared files once,
//! at the end of the run: one stylesheet for every style fragment, and one
//! file per script bucket. All three bucket files are written even when a
//! bucket is empty, so pages can reference them unconditionally.

use std::fs;
use std::path::Path;

use crate::Result;
use crate::classify::{Bucket, ScriptBuckets};

/// Writes the shared stylesheet: every fragment trimmed and followed by a
/// blank line, in extraction order across all documents.
pub fn write_stylesheet(path: &Path, fragments: &[String]) -> Result<()> {
    let mut merged = String::new();
    for fragment in fragments {
        merged.push_str(fragment.trim());
        merged.push_str("\n\n");
    }
    fs::write(path, merged)?;
    Ok(())
}

/// Writes one shared script file per bucket, fragments joined by a blank
/// line in classification order.
pub fn write_scripts(scripts_dir: &Path, buckets: &ScriptBuckets) -> Result<()> {
    for bucket in Bucket::ALL {
        let merged = buckets.fragments(bucket).join("\n\n");
        fs::write(scripts_dir.join(bucket.file_name()), merged)?;
    }
    Ok(())
}
