//! Static site generation.
//!
//! Stage 2 of the vitrine build pipeline. Takes the scan manifest and
//! writes the final static site:
//!
//! ```text
//! dist/
//! ├── index.html       # Entrance page (typing mount, transition overlay)
//! ├── portfolio.html   # Navbar, hero, about, skills, projects, contact
//! └── cv.pdf, ...      # content/assets/ copied verbatim
//! ```
//!
//! Styling is inlined into each page: CSS custom properties generated
//! from the config (colors, timing variables) followed by the embedded
//! static sheets. The projects grid is pre-rendered with the `all`
//! filter through the exact markup functions the interaction engine
//! re-renders with at runtime.
//!
//! The generated pages carry no scripting. Runtime behavior is the
//! engine's job ([`crate::ui`]); a page served as-is is the degraded but
//! fully readable fallback.

use crate::catalog::Manifest;
use crate::config;
use crate::markup;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const STYLE_CSS: &str = include_str!("../static/style.css");
const ENTRANCE_CSS: &str = include_str!("../static/entrance.css");

/// What the generate stage produced, for CLI reporting.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Page filenames written, in order.
    pub pages: Vec<String>,
    /// Asset files copied from `content/assets/`.
    pub assets: usize,
}

/// Generate the site from a scan manifest on disk.
pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    source_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_from_manifest(&manifest, output_dir, source_dir)
}

/// Generate the site from an in-memory manifest.
pub fn generate_from_manifest(
    manifest: &Manifest,
    output_dir: &Path,
    source_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let mut summary = GenerateSummary::default();

    let base_css = format!(
        "{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        config::generate_timing_css(&manifest.config.timings),
    );

    let entrance_css = format!("{base_css}\n\n{ENTRANCE_CSS}");
    let entrance = markup::entrance_document(manifest, &entrance_css);
    fs::write(output_dir.join("index.html"), entrance.into_string())?;
    summary.pages.push("index.html".to_string());

    let portfolio_css = format!("{base_css}\n\n{STYLE_CSS}");
    let portfolio = markup::portfolio_document(manifest, &portfolio_css);
    fs::write(output_dir.join("portfolio.html"), portfolio.into_string())?;
    summary.pages.push("portfolio.html".to_string());

    let assets_dir = source_dir.join("assets");
    if assets_dir.is_dir() {
        summary.assets = copy_dir_recursive(&assets_dir, output_dir)?;
    }

    Ok(summary)
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_manifest;
    use tempfile::TempDir;

    #[test]
    fn generates_both_pages() {
        let manifest = sample_manifest();
        let out = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();

        let summary = generate_from_manifest(&manifest, out.path(), src.path()).unwrap();
        assert_eq!(summary.pages, vec!["index.html", "portfolio.html"]);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("portfolio.html").is_file());
    }

    #[test]
    fn portfolio_page_embeds_config_css_and_full_grid() {
        let mut manifest = sample_manifest();
        manifest.config.colors.light.accent = "#123abc".to_string();
        let out = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();

        generate_from_manifest(&manifest, out.path(), src.path()).unwrap();
        let html = std::fs::read_to_string(out.path().join("portfolio.html")).unwrap();
        assert!(html.contains("--color-accent: #123abc"));
        assert_eq!(
            html.matches("class=\"project-card").count(),
            manifest.projects.len()
        );
        // Every form error slot is present for the engine to address.
        assert!(html.contains("id=\"name-error\""));
        assert!(html.contains("id=\"privacy-error\""));
    }

    #[test]
    fn entrance_page_has_typing_mount_and_overlay() {
        let manifest = sample_manifest();
        let out = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();

        generate_from_manifest(&manifest, out.path(), src.path()).unwrap();
        let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("id=\"typing-text\""));
        assert!(html.contains("id=\"entrance-btn\""));
        assert!(html.contains("id=\"transition-overlay\""));
    }

    #[test]
    fn assets_are_copied_verbatim() {
        let manifest = sample_manifest();
        let out = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();
        std::fs::create_dir_all(src.path().join("assets/icons")).unwrap();
        std::fs::write(src.path().join("assets/cv.pdf"), b"%PDF-stub").unwrap();
        std::fs::write(src.path().join("assets/icons/star.svg"), "<svg/>").unwrap();

        let summary = generate_from_manifest(&manifest, out.path(), src.path()).unwrap();
        assert_eq!(summary.assets, 2);
        assert!(out.path().join("cv.pdf").is_file());
        assert!(out.path().join("icons/star.svg").is_file());
    }

    #[test]
    fn generate_reads_manifest_from_disk() {
        let manifest = sample_manifest();
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("manifest.json");
        std::fs::write(
            &manifest_path,
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .unwrap();

        let out = TempDir::new().unwrap();
        let summary = generate(&manifest_path, out.path(), tmp.path()).unwrap();
        assert_eq!(summary.pages.len(), 2);
    }
}
