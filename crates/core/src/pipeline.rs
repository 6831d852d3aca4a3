//! Pipeline orchestration.
//!
//! Ties the components together into the single forward pass: prepare the
//! workspace, restructure each page while accumulating fragments, then write
//! the shared files and package the archive. The accumulators are plain
//! fields on [`Pipeline`]: one writer, read once at the end.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use sitesplit_core::{BuildConfig, Source, run_build};
//!
//! let config = BuildConfig {
//!     project: "site".to_string(),
//!     source: Source::Directory(PathBuf::from(".")),
//!     ..Default::default()
//! };
//! let report = run_build(&config)?;
//! println!("{} page(s) written", report.pages.len());
//! # Ok::<(), sitesplit_core::SitesplitError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::{write_scripts, write_stylesheet};
use crate::archive::archive_dir;
use crate::assets::relocate_assets;
use crate::beautify::beautify_script;
use crate::classify::{Bucket, ScriptBuckets, classify_script};
use crate::extract::{extract_scripts, extract_styles};
use crate::rewrite::rewrite_document;
use crate::scan::{Source, SourceDocument};
use crate::workspace::Workspace;
use crate::{Result, SitesplitError};

/// Configuration for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project name: output directory and archive stem.
    pub project: String,
    /// Where input documents come from.
    pub source: Source,
    /// Directory the output tree and archive are written into.
    pub work_dir: PathBuf,
    /// Whether to package the output tree into a zip archive.
    pub archive: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            project: "site".to_string(),
            source: Source::Directory(PathBuf::from(".")),
            work_dir: PathBuf::from("."),
            archive: true,
        }
    }
}

/// Per-page outcome of the restructuring step.
#[derive(Debug, Clone, Serialize)]
pub struct PageStats {
    /// Output filename of the page.
    pub name: String,
    /// Style blocks extracted from the page.
    pub styles: usize,
    /// Script blocks extracted from the page.
    pub scripts: usize,
    /// Basenames of the assets copied while processing the page.
    pub assets: Vec<String>,
}

/// Fragment counts per script bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BucketCounts {
    pub chatbot: usize,
    pub calculator: usize,
    pub main: usize,
}

/// End-of-run build summary.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Output directory root.
    pub out_dir: PathBuf,
    /// Archive location, when one was written.
    pub archive_path: Option<PathBuf>,
    /// Output filenames of the rewritten pages, in processing order.
    pub pages: Vec<String>,
    /// Total style fragments merged into the shared stylesheet.
    pub style_fragments: usize,
    /// Script fragments per bucket.
    pub script_fragments: BucketCounts,
    /// Basenames of relocated assets.
    pub assets: Vec<String>,
    /// Documents that could not be read and were skipped.
    pub skipped: Vec<String>,
}

impl BuildReport {
    /// Gets the report as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(SitesplitError::from)
    }
}

/// The restructuring pipeline: a fresh workspace plus the in-memory
/// fragment accumulators, driven page by page.
pub struct Pipeline {
    config: BuildConfig,
    workspace: Workspace,
    styles: Vec<String>,
    buckets: ScriptBuckets,
    pages: Vec<String>,
    assets: Vec<String>,
    skipped: Vec<String>,
}

impl Pipeline {
    /// Prepares a fresh workspace for the configured project.
    pub fn new(config: BuildConfig) -> Result<Self> {
        let workspace = Workspace::new(&config.work_dir, &config.project);
        workspace.prepare()?;
        Ok(Self {
            config,
            workspace,
            styles: Vec::new(),
            buckets: ScriptBuckets::default(),
            pages: Vec::new(),
            assets: Vec::new(),
            skipped: Vec::new(),
        })
    }

    /// The prepared output layout.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Restructures one page.
    ///
    /// Extracts style and script fragments into the accumulators, relocates
    /// the page's local images, and writes the rewritten document into the
    /// workspace. Extraction runs before asset relocation, so stored
    /// fragments keep the original reference strings.
    pub fn process(&mut self, doc: &SourceDocument, html: &str) -> Result<PageStats> {
        let styles = extract_styles(html);
        let style_count = styles.len();
        self.styles.extend(styles);

        let scripts = extract_scripts(html);
        let script_count = scripts.len();
        for script in scripts {
            let formatted = beautify_script(&script);
            let bucket = classify_script(&formatted);
            self.buckets.push(bucket, formatted);
        }

        let base_dir = doc.path.parent().unwrap_or(Path::new("."));
        let (body, copied) = relocate_assets(html, base_dir, &self.workspace.assets_dir);
        for name in &copied {
            if !self.assets.contains(name) {
                self.assets.push(name.clone());
            }
        }

        let cleaned = rewrite_document(&body);
        fs::write(self.workspace.page_path(&doc.output_name), cleaned)?;
        self.pages.push(doc.output_name.clone());

        Ok(PageStats { name: doc.output_name.clone(), styles: style_count, scripts: script_count, assets: copied })
    }

    /// Records a document that could not be read and was skipped.
    pub fn skip(&mut self, doc: &SourceDocument) {
        self.skipped.push(doc.output_name.clone());
    }

    /// Writes the shared stylesheet and bucket files, packages the archive
    /// when configured to, and returns the build summary.
    pub fn finish(self) -> Result<BuildReport> {
        write_stylesheet(&self.workspace.style_path, &self.styles)?;
        write_scripts(&self.workspace.scripts_dir, &self.buckets)?;

        let archive_path = if self.config.archive {
            let path = self.config.work_dir.join(format!("{}.zip", self.config.project));
            archive_dir(&self.workspace.out_dir, &path)?;
            Some(path)
        } else {
            None
        };

        Ok(BuildReport {
            out_dir: self.workspace.out_dir.clone(),
            archive_path,
            pages: self.pages,
            style_fragments: self.styles.len(),
            script_fragments: BucketCounts {
                chatbot: self.buckets.count(Bucket::Chatbot),
                calculator: self.buckets.count(Bucket::Calculator),
                main: self.buckets.count(Bucket::Main),
            },
            assets: self.assets,
            skipped: self.skipped,
        })
    }
}

/// Runs the whole pipeline: scan, restructure each page, write the shared
/// files, archive.
///
/// In directory mode an unreadable document is skipped and recorded in the
/// report; in single-file mode the same condition is fatal.
pub fn run_build(config: &BuildConfig) -> Result<BuildReport> {
    let documents = config.source.resolve()?;
    let mut pipeline = Pipeline::new(config.clone())?;

    for doc in &documents {
        match fs::read_to_string(&doc.path) {
            Ok(html) => {
                pipeline.process(doc, &html)?;
            }
            Err(err) => match &config.source {
                Source::File(_) => return Err(SitesplitError::from(err)),
                Source::Directory(_) => pipeline.skip(doc),
            },
        }
    }

    pipeline.finish()
}
