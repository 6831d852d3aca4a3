//! Output packaging.
//!
//! Walks the finished output tree and writes every file into a single
//! Deflate-compressed zip archive, named by its path relative to the output
//! root. Entries use forward slashes regardless of platform and are added
//! in sorted order so the archive layout is reproducible.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::Result;

/// Packages the contents of `out_dir` into a zip archive at `archive_path`.
///
/// Every file present at walk time is included; there are no exclusion
/// rules. Returns the number of entries written. Any I/O or zip error is
/// fatal.
pub fn archive_dir(out_dir: &Path, archive_path: &Path) -> Result<usize> {
    let mut files = Vec::new();
    collect_files(out_dir, &mut files)?;
    files.sort();

    let mut writer = ZipWriter::new(File::create(archive_path)?);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in &files {
        let Ok(relative) = path.strip_prefix(out_dir) else {
            continue;
        };
        writer.start_file(entry_name(relative), options)?;
        writer.write_all(&fs::read(path)?)?;
    }

    writer.finish()?;
    Ok(files.len())
}

/// Archive entry name for a relative path, forward-slash separated.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}
