//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display
//! for every entity (project, skill, page) is its semantic identity —
//! positional index plus title — with filesystem paths as secondary
//! context on indented `Source:` lines.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Projects
//! 001 Interactive learning site (frontend)
//!     Source: projects/010-interactive-learning.toml
//!     Tech: JavaScript, HTML, CSS
//!
//! Skills
//! 001 JavaScript (85%)
//!
//! Profile
//!     Jordan Reyes — Full-stack developer
//!     3 entrance messages, CV: cv.pdf
//! ```
//!
//! ## Generate
//!
//! ```text
//! index.html
//! portfolio.html
//! Generated 2 pages, 1 asset
//! ```

use crate::catalog::Manifest;
use crate::generate::GenerateSummary;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Tweet classifier (ml)
/// 001 JavaScript (85%)
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

pub fn format_scan(manifest: &Manifest, source: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    if manifest.projects.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, project) in manifest.projects.iter().enumerate() {
        let mut detail = project.category.clone();
        if project.has_demo {
            detail.push_str(", demo");
        }
        lines.push(entity_header(i + 1, &project.title, Some(&detail)));
        if !project.source.is_empty() {
            lines.push(format!("{}Source: {}", indent(1), project.source));
        }
        if !project.technologies.is_empty() {
            lines.push(format!(
                "{}Tech: {}",
                indent(1),
                project.technologies.join(", ")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Skills".to_string());
    if manifest.skills.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, skill) in manifest.skills.iter().enumerate() {
        let level = format!("{}%", skill.level);
        lines.push(entity_header(i + 1, &skill.name, Some(&level)));
    }

    lines.push(String::new());
    lines.push("Profile".to_string());
    lines.push(format!(
        "{}{} — {}",
        indent(1),
        manifest.profile.name,
        manifest.profile.headline
    ));
    let mut profile_detail = format!(
        "{}{} entrance messages",
        indent(1),
        manifest.profile.entrance_messages.len()
    );
    if let Some(cv) = &manifest.profile.cv_file {
        profile_detail.push_str(&format!(", CV: {cv}"));
    }
    lines.push(profile_detail);
    if let Some(about) = &manifest.about {
        lines.push(format!("{}About: {} (about.md)", indent(1), about.title));
    }
    lines.push(format!("{}Source: {}", indent(1), source.display()));

    lines
}

pub fn format_generate(summary: &GenerateSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary.pages.clone();
    let assets = match summary.assets {
        0 => String::new(),
        1 => ", 1 asset".to_string(),
        n => format!(", {n} assets"),
    };
    lines.push(format!(
        "Generated {} page{}{}",
        summary.pages.len(),
        if summary.pages.len() == 1 { "" } else { "s" },
        assets
    ));
    lines
}

pub fn print_scan_output(manifest: &Manifest, source: &Path) {
    for line in format_scan(manifest, source) {
        println!("{line}");
    }
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate(summary) {
        println!("{line}");
    }
}
