//! Line-level diffing between content snapshots.

use serde::Serialize;

/// One changed line in a textual comparison.
///
/// Unchanged lines carry no signal for the integrity report and are never
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DiffLine {
    /// Line present in the new content but not the old.
    Added(String),
    /// Line present in the old content but not the new.
    Removed(String),
}

impl DiffLine {
    /// The line text, regardless of classification.
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Added(text) | DiffLine::Removed(text) => text,
        }
    }
}

/// Compute a minimal line-level edit script between `old` and `new`.
///
/// Classic longest-common-subsequence alignment: lines outside the LCS are
/// emitted as `Removed` (from `old`) or `Added` (from `new`) in the order
/// they occur along the alignment, removals first at a replacement point.
/// Identical inputs produce an empty script.
pub fn diff_lines(old: &[String], new: &[String]) -> Vec<DiffLine> {
    // lcs[i][j] = LCS length of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut changes = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            changes.push(DiffLine::Removed(old[i].clone()));
            i += 1;
        } else {
            changes.push(DiffLine::Added(new[j].clone()));
            j += 1;
        }
    }
    changes.extend(old[i..].iter().cloned().map(DiffLine::Removed));
    changes.extend(new[j..].iter().cloned().map(DiffLine::Added));

    changes
}
