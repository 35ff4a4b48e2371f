//! Output formatting for CLI commands.
//!
//! Provides abstraction layer for rendering results as human-readable text
//! (with colored diff lines) or as JSON documents.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Write};
use vigil_core::{BaselineStats, DiffLine, Report};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writer for command output with format abstraction.
pub struct OutputWriter {
    format: OutputFormat,
    stdout: io::Stdout,
}

impl OutputWriter {
    /// Create a new OutputWriter.
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            stdout: io::stdout(),
        }
    }

    /// Write output using the configured format.
    ///
    /// The `text_fn` closure is called only in text mode to generate the
    /// human-readable output.
    pub fn write<T: Serialize>(&self, data: &T, text_fn: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(data)?;
                writeln!(&self.stdout, "{}", json)?;
            }
            OutputFormat::Text => {
                let text = text_fn();
                if !text.is_empty() {
                    write!(&self.stdout, "{}", text)?;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Data Transfer Objects (DTOs) for JSON output
// ============================================================================

/// Output for the `baseline` command.
#[derive(Debug, Serialize)]
pub struct BaselineOutput {
    pub success: bool,
    pub files_recorded: usize,
    pub baseline_path: String,
    pub contents_path: String,
}

impl BaselineOutput {
    pub fn new(stats: &BaselineStats, baseline_path: String, contents_path: String) -> Self {
        Self {
            success: true,
            files_recorded: stats.files_recorded,
            baseline_path,
            contents_path,
        }
    }
}

/// Output for the `check` command.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub intact: bool,
    #[serde(flatten)]
    pub report: Report,
}

impl CheckOutput {
    pub fn new(report: Report) -> Self {
        Self {
            success: true,
            intact: report.is_intact(),
            report,
        }
    }
}

// ============================================================================
// Text rendering
// ============================================================================

/// Render a baseline summary as human-readable text.
pub fn render_baseline(output: &BaselineOutput) -> String {
    format!(
        "Baseline and content snapshot created ({} files).\n  baseline: {}\n  contents: {}\n",
        output.files_recorded, output.baseline_path, output.contents_path
    )
}

/// Render an integrity report as human-readable text.
///
/// Modified files show their line diff with `[-]` lines in red and `[+]`
/// lines in green; modified files without a textual diff are flagged as not
/// detectable. New and deleted files are listed by path.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("Integrity Check Report\n");
    out.push_str("----------------------\n");

    for change in &report.modified {
        let _ = writeln!(out, "\n[MODIFIED] {}", change.path.bold());
        if change.diff.is_empty() {
            out.push_str("  Changes not detectable (binary or unreadable file).\n");
        } else {
            for line in &change.diff {
                match line {
                    DiffLine::Removed(text) => {
                        let _ = writeln!(out, "  {}", format!("[-] {}", text).red());
                    }
                    DiffLine::Added(text) => {
                        let _ = writeln!(out, "  {}", format!("[+] {}", text).green());
                    }
                }
            }
        }
    }

    if !report.deleted.is_empty() {
        out.push_str("\n[DELETED FILES]\n");
        for path in &report.deleted {
            let _ = writeln!(out, "  - {}", path);
        }
    }

    if !report.new_files.is_empty() {
        out.push_str("\n[NEW FILES]\n");
        for path in &report.new_files {
            let _ = writeln!(out, "  - {}", path);
        }
    }

    if report.is_intact() {
        out.push_str("\nAll files intact. No changes detected.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::FileChange;

    fn sample_report() -> Report {
        Report {
            modified: vec![
                FileChange {
                    path: "a.txt".to_string(),
                    diff: vec![
                        DiffLine::Removed("hello".to_string()),
                        DiffLine::Added("hello world".to_string()),
                    ],
                },
                FileChange {
                    path: "b.bin".to_string(),
                    diff: vec![],
                },
            ],
            new_files: vec!["c.txt".to_string()],
            deleted: vec!["gone.txt".to_string()],
        }
    }

    #[test]
    fn test_render_intact_report() {
        colored::control::set_override(false);
        let text = render_report(&Report::default());
        assert!(text.contains("All files intact. No changes detected."));
        assert!(!text.contains("[MODIFIED]"));
    }

    #[test]
    fn test_render_full_report() {
        colored::control::set_override(false);
        let text = render_report(&sample_report());

        assert!(text.contains("[MODIFIED] a.txt"));
        assert!(text.contains("[-] hello"));
        assert!(text.contains("[+] hello world"));
        assert!(text.contains("[MODIFIED] b.bin"));
        assert!(text.contains("Changes not detectable"));
        assert!(text.contains("[NEW FILES]"));
        assert!(text.contains("- c.txt"));
        assert!(text.contains("[DELETED FILES]"));
        assert!(text.contains("- gone.txt"));
        assert!(!text.contains("All files intact"));
    }

    #[test]
    fn test_check_output_json_shape() {
        let output = CheckOutput::new(sample_report());
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["intact"], false);
        assert_eq!(json["modified"][0]["path"], "a.txt");
        assert_eq!(json["modified"][0]["diff"][0]["kind"], "removed");
        assert_eq!(json["new_files"][0], "c.txt");
        assert_eq!(json["deleted"][0], "gone.txt");
    }

    #[test]
    fn test_render_baseline_summary() {
        let output = BaselineOutput {
            success: true,
            files_recorded: 3,
            baseline_path: "file_baseline.json".to_string(),
            contents_path: "file_contents.json".to_string(),
        };
        let text = render_baseline(&output);
        assert!(text.contains("3 files"));
        assert!(text.contains("file_baseline.json"));
    }
}
