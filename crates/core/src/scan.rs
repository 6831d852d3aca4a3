//! Source document discovery.
//!
//! Two entry points are supported: scanning a directory for every `.html`
//! file it contains (the usual case), or naming exactly one file which is
//! rewritten as `index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, SitesplitError};

/// Where input documents come from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Every file directly inside the directory whose name ends in `.html`
    /// (case-insensitive).
    Directory(PathBuf),
    /// Exactly one named file, rewritten as `index.html`.
    File(PathBuf),
}

/// A single input page and the filename it will be written under.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Location of the input document.
    pub path: PathBuf,
    /// Filename the rewritten page is saved as in the output directory.
    pub output_name: String,
}

impl Source {
    /// Produces the ordered sequence of documents to process.
    ///
    /// Directory sources list matching files sorted by name so repeated runs
    /// see the same order. A missing named file is fatal; a missing or
    /// unreadable directory surfaces as an I/O error.
    pub fn resolve(&self) -> Result<Vec<SourceDocument>> {
        match self {
            Source::Directory(dir) => scan_documents(dir),
            Source::File(path) => {
                if !path.is_file() {
                    return Err(SitesplitError::SourceNotFound(path.clone()));
                }
                Ok(vec![SourceDocument {
                    path: path.clone(),
                    output_name: "index.html".to_string(),
                }])
            }
        }
    }
}

/// Lists the HTML documents in `dir`, sorted by filename.
pub fn scan_documents(dir: &Path) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.to_lowercase().ends_with(".html") {
            documents.push(SourceDocument { path: path.clone(), output_name: name.to_string() });
        }
    }

    documents.sort_by(|a, b| a.output_name.cmp(&b.output_name));
    Ok(documents)
}
