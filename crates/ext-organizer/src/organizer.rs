use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::copy::{copy_with_metadata, ensure_dir, verify_copy, CopyError, CopyOutcome};
use crate::reporter::Reporter;
use ext_organizer_core::{summary_lines, Category, ClassificationResult};

/// Conditions that stop a run before any file is touched.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("source directory '{}' does not exist or is not a directory", path.display())]
    SourceNotDirectory { path: PathBuf },
    #[error("cannot create destination directory '{}': {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct OrganizeOptions {
    /// Re-hash source and copy after each copy.
    pub verify: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub file_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizeReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub categories: ClassificationResult,
    pub copied: usize,
    pub same_file: usize,
    pub skipped_entries: usize,
    pub failures: Vec<FileFailure>,
    pub finished_at: DateTime<Utc>,
}

impl OrganizeReport {
    fn new(source: &Path, destination: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            categories: ClassificationResult::new(),
            copied: 0,
            same_file: 0,
            skipped_entries: 0,
            failures: Vec::new(),
            finished_at: Utc::now(),
        }
    }

    /// Regular files seen, whether or not their copy succeeded.
    pub fn total_files(&self) -> usize {
        self.categories.total()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn fail(&mut self, file_name: &str, message: String) {
        self.failures.push(FileFailure {
            file_name: file_name.to_string(),
            message,
        });
    }
}

/// Copy every regular file directly inside `source` into
/// `destination/<category>/`, reporting progress and a closing summary.
///
/// Only an unusable source or destination yields `Err`; per-file problems are
/// reported and recorded in the returned report.
pub fn organize<R: Reporter + ?Sized>(
    source: &Path,
    destination: &Path,
    options: &OrganizeOptions,
    reporter: &mut R,
) -> Result<OrganizeReport, OrganizeError> {
    if !source.is_dir() {
        let err = OrganizeError::SourceNotDirectory {
            path: source.to_path_buf(),
        };
        reporter.error(&err.to_string());
        return Err(err);
    }

    if let Err(source_err) = ensure_dir(destination) {
        let err = OrganizeError::CreateDestination {
            path: destination.to_path_buf(),
            source: source_err,
        };
        reporter.error(&err.to_string());
        return Err(err);
    }
    reporter.info(&format!("Destination directory: '{}'", destination.display()));

    let mut report = OrganizeReport::new(source, destination);

    let entries = WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.loop_ancestor().is_some() => {
                let name = e
                    .path()
                    .and_then(Path::file_name)
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                reporter.info(&format!("Skipping directory: '{}'", name));
                report.skipped_entries += 1;
                continue;
            }
            Err(e) => {
                reporter.warn(&format!("Cannot read entry in '{}': {}", source.display(), e));
                report.skipped_entries += 1;
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();

        if !entry.file_type().is_file() {
            let kind = if entry.file_type().is_dir() {
                "directory"
            } else {
                "non-file entry"
            };
            reporter.info(&format!("Skipping {}: '{}'", kind, name));
            report.skipped_entries += 1;
            continue;
        }

        let plan = plan_copy(entry.path(), entry.file_name().to_os_string(), destination);
        report.categories.record(plan.category.clone());

        match execute_copy(&plan, options) {
            Ok(CopyOutcome::Copied) => {
                reporter.info(&format!(
                    "Copied '{}' to '{}'",
                    name,
                    plan.target_dir.display()
                ));
                report.copied += 1;
            }
            Ok(CopyOutcome::SameFile) => {
                reporter.warn(&format!(
                    "'{}' is already at its destination. Skipping.",
                    name
                ));
                report.same_file += 1;
            }
            Err(StepError::CategoryDir(e)) => {
                let message = format!(
                    "Cannot create folder '{}' for '{}': {}",
                    plan.target_dir.display(),
                    name,
                    e
                );
                reporter.error(&message);
                report.fail(&name, message);
            }
            Err(StepError::Copy(CopyError::PermissionDenied(_))) => {
                let message = format!("No permission to copy '{}'. Skipping.", name);
                reporter.error(&message);
                report.fail(&name, message);
            }
            Err(StepError::Copy(e)) => {
                let message = format!("Error copying '{}': {}", name, e);
                reporter.error(&message);
                report.fail(&name, message);
            }
        }
    }

    report.finished_at = Utc::now();

    if report.categories.is_empty() {
        reporter.info("No files found to organize.");
        return Ok(report);
    }

    summary_lines(&report.categories)
        .iter()
        .for_each(|line| reporter.info(line));

    Ok(report)
}

/// Process exit status for a finished run: non-zero only when the run was aborted.
pub fn exit_code(result: &Result<OrganizeReport, OrganizeError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Pure planning: where one file goes, without touching the filesystem
struct CopyPlan {
    source_path: PathBuf,
    category: Category,
    target_dir: PathBuf,
    target_path: PathBuf,
}

fn plan_copy(source_path: &Path, file_name: OsString, destination: &Path) -> CopyPlan {
    let category = Category::from_path(source_path);
    let target_dir = destination.join(&category);
    let target_path = target_dir.join(file_name);

    CopyPlan {
        source_path: source_path.to_path_buf(),
        category,
        target_dir,
        target_path,
    }
}

enum StepError {
    CategoryDir(io::Error),
    Copy(CopyError),
}

fn execute_copy(plan: &CopyPlan, options: &OrganizeOptions) -> Result<CopyOutcome, StepError> {
    ensure_dir(&plan.target_dir).map_err(StepError::CategoryDir)?;

    let outcome = copy_with_metadata(&plan.source_path, &plan.target_path).map_err(StepError::Copy)?;

    if options.verify && outcome == CopyOutcome::Copied {
        verify_copy(&plan.source_path, &plan.target_path).map_err(StepError::Copy)?;
    }

    Ok(outcome)
}
