//! Output workspace layout and preparation.
//!
//! The workspace is the project-named output directory tree recreated fresh
//! on every run: the root holds the rewritten pages and `style.css`, with
//! `scripts/` and `assets/` subdirectories for the generated shared files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Resolved output layout for a single build.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Output directory root, named after the project.
    pub out_dir: PathBuf,
    /// Destination for the per-bucket script files.
    pub scripts_dir: PathBuf,
    /// Destination for relocated image assets.
    pub assets_dir: PathBuf,
    /// Path of the shared stylesheet.
    pub style_path: PathBuf,
}

impl Workspace {
    /// Resolves the layout for `project` under `work_dir` without touching
    /// the filesystem.
    pub fn new(work_dir: &Path, project: &str) -> Self {
        let out_dir = work_dir.join(project);
        Self {
            scripts_dir: out_dir.join("scripts"),
            assets_dir: out_dir.join("assets"),
            style_path: out_dir.join("style.css"),
            out_dir,
        }
    }

    /// Removes any previous build output and creates a fresh directory tree.
    ///
    /// Failure to remove or create any part of the tree is fatal; no
    /// partial-state recovery is attempted.
    pub fn prepare(&self) -> Result<()> {
        if self.out_dir.exists() {
            fs::remove_dir_all(&self.out_dir)?;
        }
        fs::create_dir_all(&self.scripts_dir)?;
        fs::create_dir_all(&self.assets_dir)?;
        Ok(())
    }

    /// Output path for a rewritten page.
    pub fn page_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }
}
