//! CLI output formatting for the import result.
//!
//! # Output Format
//!
//! ```text
//! ==> Saved public/images/blog/fail2ban/jail.webp (42 KB)
//!
//! Paste into the post:
//!
//!     <Figure src="/images/blog/fail2ban/jail.webp" alt="Jail config" />
//!
//! Note: <Figure> only renders in .mdx posts. If fail2ban is a plain .md file, rename it to .mdx.
//! ```
//!
//! # Architecture
//!
//! Results are rendered by `format_*` functions returning `Vec<String>`,
//! which tests compare line by line. The `print_*` wrappers are the only
//! code here that touches stdout.

use crate::import::ImportReport;
use crate::snippet::SnippetKind;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the summary of a completed import.
pub fn format_import_report(report: &ImportReport) -> Vec<String> {
    let mut lines = vec![
        format!("==> Saved {} ({} KB)", report.relative_path, report.size_kb),
        String::new(),
        "Paste into the post:".to_string(),
        String::new(),
        format!("{}{}", indent(1), report.snippet),
    ];

    if report.kind == SnippetKind::Figure {
        lines.push(String::new());
        lines.push(format!(
            "Note: <Figure> only renders in .mdx posts. If {} is a plain .md file, rename it to .mdx.",
            report.post
        ));
    }

    lines
}

/// Format the message for a cancelled import.
pub fn format_cancelled() -> Vec<String> {
    vec!["==> Cancelled, nothing was written.".to_string()]
}

pub fn print_import_report(report: &ImportReport) {
    for line in format_import_report(report) {
        println!("{}", line);
    }
}

pub fn print_cancelled() {
    for line in format_cancelled() {
        println!("{}", line);
    }
}
