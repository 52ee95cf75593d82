//! Running the inspector over files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use redundoc_check::{DeleteFix, Inspector, Problem, apply_edits};
use redundoc_ingest::{discover_sources, read_source};
use redundoc_model::SourceFile;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path as discovered under the root.
    pub path: PathBuf,
    /// Problems in text order.
    pub problems: Vec<Problem>,
    /// The file was rewritten with every problem deleted.
    pub fixed: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// One entry per inspected file, in discovery order.
    pub files: Vec<FileReport>,
    /// Files that could not be read or fixed. They do not stop the run.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Total problems over all files.
    pub fn problem_count(&self) -> usize {
        self.files.iter().map(|file| file.problems.len()).sum()
    }

    /// Returns true when any file has a problem.
    pub fn has_problems(&self) -> bool {
        self.problem_count() > 0
    }
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// File extensions matched while walking directories.
    pub extensions: Vec<String>,
    /// Delete flagged comments and tags in place.
    pub fix: bool,
}

/// Inspects every source under `roots`.
///
/// Missing roots abort the run; per-file failures are collected in
/// [`CheckReport::errors`].
pub fn check_paths(
    roots: &[PathBuf],
    inspector: &Inspector,
    options: &CheckOptions,
) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    for root in roots {
        let span = info_span!("check", root = %root.display());
        let _guard = span.enter();

        let sources = discover_sources(root, options.extensions.as_slice())
            .with_context(|| format!("discover sources in {}", root.display()))?;
        debug!(count = sources.len(), "discovered sources");

        for path in sources {
            match check_file(&path, inspector, options.fix) {
                Ok(file) => report.files.push(file),
                Err(error) => {
                    warn!("{error:#}");
                    report.errors.push(format!("{error:#}"));
                }
            }
        }
    }
    info!(
        files = report.files.len(),
        problems = report.problem_count(),
        "check finished"
    );
    Ok(report)
}

fn check_file(path: &Path, inspector: &Inspector, fix: bool) -> Result<FileReport> {
    let source = read_source(path)?;
    let problems = inspector.inspect(&source);
    let fixed = fix && !problems.is_empty();
    if fixed {
        fix_file(&source, &problems)?;
    }
    Ok(FileReport {
        path: path.to_path_buf(),
        problems,
        fixed,
    })
}

fn fix_file(source: &SourceFile, problems: &[Problem]) -> Result<()> {
    let path = &source.path;
    let edits = DeleteFix::plan_all(source, problems)
        .with_context(|| format!("plan fixes for {}", path.display()))?;
    let fixed = apply_edits(&source.text, &edits)
        .with_context(|| format!("apply fixes to {}", path.display()))?;
    fs::write(path, fixed).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), edits = edits.len(), "fixed");
    Ok(())
}
