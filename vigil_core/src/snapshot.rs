//! Persistence of the baseline and content snapshot artifacts.

use crate::error::{Error, Result};
use crate::hash::Digest;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Expected state of the monitored tree: path key -> content digest.
pub type Baseline = BTreeMap<String, Digest>;

/// Recorded text content: path key -> line sequence (empty for binary files).
pub type ContentSnapshot = BTreeMap<String, Vec<String>>;

/// Default file name for the baseline artifact.
pub const DEFAULT_BASELINE_FILE: &str = "file_baseline.json";

/// Default file name for the content snapshot artifact.
pub const DEFAULT_CONTENTS_FILE: &str = "file_contents.json";

/// Persists the two snapshot artifacts as pretty-printed JSON.
///
/// The baseline and content snapshot are always written together and fully
/// replace any prior versions. Each artifact is written to a temporary file
/// in its destination directory and atomically renamed into place, so a crash
/// mid-write leaves the previous version intact rather than a truncated one.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    baseline_path: PathBuf,
    contents_path: PathBuf,
}

impl SnapshotStore {
    /// Create a store over the given artifact paths.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(baseline_path: P, contents_path: Q) -> Self {
        Self {
            baseline_path: baseline_path.into(),
            contents_path: contents_path.into(),
        }
    }

    /// Path of the baseline artifact.
    pub fn baseline_path(&self) -> &Path {
        &self.baseline_path
    }

    /// Path of the content snapshot artifact.
    pub fn contents_path(&self) -> &Path {
        &self.contents_path
    }

    /// Whether both artifacts exist on disk.
    pub fn exists(&self) -> bool {
        self.baseline_path.exists() && self.contents_path.exists()
    }

    /// Persist both artifacts, overwriting any prior versions.
    pub fn save(&self, baseline: &Baseline, contents: &ContentSnapshot) -> Result<()> {
        write_json_atomic(&self.baseline_path, baseline)?;
        write_json_atomic(&self.contents_path, contents)?;
        Ok(())
    }

    /// Load both artifacts.
    ///
    /// Fails with `Error::MissingBaseline` if either artifact does not exist;
    /// a check is only valid against a complete snapshot pair.
    pub fn load(&self) -> Result<(Baseline, ContentSnapshot)> {
        for path in [&self.baseline_path, &self.contents_path] {
            if !path.exists() {
                return Err(Error::missing_baseline(path));
            }
        }

        let baseline: Baseline = serde_json::from_str(&fs::read_to_string(&self.baseline_path)?)?;
        let contents: ContentSnapshot =
            serde_json::from_str(&fs::read_to_string(&self.contents_path)?)?;

        Ok((baseline, contents))
    }
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    let temp_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(temp_dir)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(temp_dir)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path)?;

    Ok(())
}
