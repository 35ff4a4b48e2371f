//! Baseline creation and integrity checking over a monitored directory.

use crate::content::FileContent;
use crate::diff::{DiffLine, diff_lines};
use crate::error::Result;
use crate::hash::Digest;
use crate::snapshot::{
    Baseline, ContentSnapshot, DEFAULT_BASELINE_FILE, DEFAULT_CONTENTS_FILE, SnapshotStore,
};
use crate::walk::walk_files;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for a checker instance.
///
/// Everything the checker touches is explicit here so that independent
/// instances (and tests) can run against separate directories and artifacts.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Directory to monitor.
    pub directory: PathBuf,
    /// Path of the baseline artifact.
    pub baseline_path: PathBuf,
    /// Path of the content snapshot artifact.
    pub contents_path: PathBuf,
}

impl CheckerConfig {
    /// Configuration for `directory` with default artifact names in the
    /// current working directory.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
            baseline_path: PathBuf::from(DEFAULT_BASELINE_FILE),
            contents_path: PathBuf::from(DEFAULT_CONTENTS_FILE),
        }
    }
}

/// Summary of a baseline creation.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineStats {
    /// Number of files recorded in the baseline.
    pub files_recorded: usize,
}

/// A modified file with its line-level changes.
///
/// An empty `diff` on a modified file means the changes are not detectable
/// (binary or unreadable content on one or both sides); the digest, not the
/// diff, decides that a file is modified.
#[derive(Debug, Clone, Serialize)]
pub struct FileChange {
    pub path: String,
    pub diff: Vec<DiffLine>,
}

/// Result of an integrity check, classified against the baseline.
///
/// All three lists are sorted by path key. A file appears in at most one of
/// them; unchanged files are not reported.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub modified: Vec<FileChange>,
    pub new_files: Vec<String>,
    pub deleted: Vec<String>,
}

impl Report {
    /// Whether nothing changed relative to the baseline.
    pub fn is_intact(&self) -> bool {
        self.modified.is_empty() && self.new_files.is_empty() && self.deleted.is_empty()
    }
}

/// Orchestrates baseline creation and integrity checks.
#[derive(Debug)]
pub struct Checker {
    config: CheckerConfig,
    store: SnapshotStore,
}

impl Checker {
    /// Create a checker over the given configuration.
    pub fn new(config: CheckerConfig) -> Self {
        let store = SnapshotStore::new(&config.baseline_path, &config.contents_path);
        Self { config, store }
    }

    /// The checker's configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Record the current state of the monitored directory as the baseline.
    ///
    /// Walks the directory, digests every file, snapshots text content, and
    /// persists both artifacts, fully replacing any prior baseline. A file
    /// that vanishes between enumeration and hashing is skipped.
    pub fn create_baseline(&self) -> Result<BaselineStats> {
        let mut baseline = Baseline::new();
        let mut contents = ContentSnapshot::new();

        for entry in walk_files(&self.config.directory)? {
            let (key, path) = entry?;
            let Some(digest) = Digest::of_file(&path)? else {
                continue;
            };
            baseline.insert(key.clone(), digest);
            contents.insert(key, FileContent::read(&path).into_lines());
        }

        self.store.save(&baseline, &contents)?;

        Ok(BaselineStats {
            files_recorded: baseline.len(),
        })
    }

    /// Compare the current state of the monitored directory to the baseline.
    ///
    /// Fails with `Error::MissingBaseline` before any traversal if the
    /// snapshot artifacts are absent. Never mutates the baseline.
    pub fn check(&self) -> Result<Report> {
        let (old_baseline, old_contents) = self.store.load()?;

        // Recompute digests for everything currently on disk
        let mut current: BTreeMap<String, (Digest, PathBuf)> = BTreeMap::new();
        for entry in walk_files(&self.config.directory)? {
            let (key, path) = entry?;
            if let Some(digest) = Digest::of_file(&path)? {
                current.insert(key, (digest, path));
            }
        }

        let mut report = Report::default();

        for (key, (digest, path)) in &current {
            match old_baseline.get(key) {
                Some(old_digest) if old_digest != digest => {
                    let old_lines = old_contents.get(key).map(Vec::as_slice).unwrap_or(&[]);
                    let new_content = FileContent::read(path);
                    report.modified.push(FileChange {
                        path: key.clone(),
                        diff: diff_lines(old_lines, new_content.lines()),
                    });
                }
                Some(_) => {} // Unchanged, not reported
                None => report.new_files.push(key.clone()),
            }
        }

        for key in old_baseline.keys() {
            if !current.contains_key(key) {
                report.deleted.push(key.clone());
            }
        }

        Ok(report)
    }
}
