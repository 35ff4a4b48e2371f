//! # Vigil Core
//!
//! A directory-snapshot integrity checker using BLAKE3 hashing.
//!
//! This library records cryptographic digests and text contents of every file
//! under a monitored directory, then compares later states against that
//! baseline, classifying files as modified, new, or deleted and producing
//! line-level diffs for modified text files.
//!
//! ## Features
//!
//! - BLAKE3 digests computed in fixed-size streaming blocks
//! - Best-effort text snapshots: binary or unreadable files degrade, never fail
//! - Two human-inspectable JSON artifacts, written atomically
//! - LCS-based line diffs for modified files
//! - Structured reports, rendering left to the caller
//!
//! ## Example
//!
//! ```no_run
//! use vigil_core::{Checker, CheckerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let checker = Checker::new(CheckerConfig::new("./watched"));
//!
//! // Record the current state as the expected baseline
//! let stats = checker.create_baseline()?;
//! println!("Recorded {} files", stats.files_recorded);
//!
//! // Later: compare the directory against the baseline
//! let report = checker.check()?;
//! if report.is_intact() {
//!     println!("All files intact");
//! } else {
//!     for change in &report.modified {
//!         println!("modified: {}", change.path);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod content;
mod diff;
mod error;
mod hash;
mod snapshot;
mod walk;

pub use checker::{BaselineStats, Checker, CheckerConfig, FileChange, Report};
pub use content::FileContent;
pub use diff::{DiffLine, diff_lines};
pub use error::{Error, Result};
pub use hash::{DIGEST_SIZE, Digest, HASH_BLOCK_SIZE};
pub use snapshot::{
    Baseline, ContentSnapshot, DEFAULT_BASELINE_FILE, DEFAULT_CONTENTS_FILE, SnapshotStore,
};
pub use walk::walk_files;
