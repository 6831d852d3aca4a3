mod echo;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use sitesplit_core::{BuildConfig, Pipeline, Source};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Restructure monolithic HTML pages into a static-site layout
#[derive(Parser, Debug)]
#[command(name = "sitesplit")]
#[command(author = "Sitesplit Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Split inline styles, scripts, and assets out of HTML pages", long_about = None)]
struct Args {
    /// Directory scanned for .html pages (ignored when --file is given)
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Restructure exactly one page, written as index.html
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Project name: output directory and archive stem
    #[arg(short, long, default_value = "site", value_name = "NAME")]
    project: String,

    /// Directory the output tree and archive are written into
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    out_dir: PathBuf,

    /// Skip writing the zip archive
    #[arg(long)]
    no_archive: bool,

    /// Print the build report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable step-by-step progress output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let started = Instant::now();

    if args.verbose {
        echo::print_banner();
    }

    let source = match &args.file {
        Some(file) => Source::File(file.clone()),
        None => Source::Directory(args.dir.clone()),
    };
    let single_page = args.file.is_some();
    let config = BuildConfig {
        project: args.project.clone(),
        source,
        work_dir: args.out_dir.clone(),
        archive: !args.no_archive,
    };

    if args.verbose {
        echo::print_step(1, 3, "Preparing workspace");
    }

    let documents = config.source.resolve().context("Failed to resolve input documents")?;
    let mut pipeline = Pipeline::new(config).context("Failed to prepare workspace")?;

    if args.verbose {
        echo::print_step(2, 3, &format!("Restructuring {} page(s)", documents.len()));
    }

    for doc in &documents {
        match fs::read_to_string(&doc.path) {
            Ok(html) => {
                let stats = pipeline
                    .process(doc, &html)
                    .with_context(|| format!("Failed to restructure {}", doc.path.display()))?;
                if args.verbose {
                    eprintln!(
                        "  {} {} ({} style(s), {} script(s), {} asset(s))",
                        "Page:".dimmed(),
                        stats.name.bright_white(),
                        stats.styles,
                        stats.scripts,
                        stats.assets.len()
                    );
                }
            }
            Err(err) => {
                if single_page {
                    return Err(err).with_context(|| format!("Failed to read {}", doc.path.display()));
                }
                echo::print_warning(&format!("Skipping {}: {}", doc.path.display(), err));
                pipeline.skip(doc);
            }
        }
    }

    if args.verbose {
        echo::print_step(3, 3, "Writing shared files and archive");
    }

    let report = pipeline.finish().context("Failed to finalize build")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to render report")?
        );
    } else {
        echo::print_success(&format!("Build complete: {}", report.out_dir.display().bright_white()));
        if let Some(archive) = &report.archive_path {
            echo::print_info(&format!("Archive: {}", archive.display()));
        }
        eprintln!("  {} {}", "Pages:".dimmed(), report.pages.join(", ").bright_white());
        if !report.skipped.is_empty() {
            echo::print_warning(&format!("Skipped: {}", report.skipped.join(", ")));
        }
    }

    if args.verbose {
        echo::print_timing("Total", started.elapsed());
    }

    Ok(())
}
