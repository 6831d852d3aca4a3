pub mod aggregate;
pub mod archive;
pub mod assets;
pub mod beautify;
pub mod classify;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod rewrite;
pub mod scan;
pub mod workspace;

pub use aggregate::{write_scripts, write_stylesheet};
pub use archive::archive_dir;
pub use assets::relocate_assets;
pub use beautify::beautify_script;
pub use classify::{Bucket, ScriptBuckets, classify_script};
pub use error::{Result, SitesplitError};
pub use extract::{extract_scripts, extract_styles};
pub use pipeline::{BucketCounts, BuildConfig, BuildReport, PageStats, Pipeline, run_build};
pub use rewrite::{SCRIPT_INCLUDES, STYLESHEET_LINK, rewrite_document};
pub use scan::{Source, SourceDocument, scan_documents};
pub use workspace::Workspace;
