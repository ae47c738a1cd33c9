//! Content scanning and manifest generation.
//!
//! Stage 1 of the vitrine build pipeline. Scans a content directory to
//! discover the project catalog, profile, skills, and about page, producing
//! a structured manifest that the generate stage and the interaction engine
//! both consume.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── profile.toml                 # Identity, entrance messages, skills
//! ├── about.md                     # About section body (optional)
//! ├── assets/                      # CV document, favicon → copied to dist/
//! └── projects/
//!     ├── 010-first.toml           # One project per file
//!     ├── 020-second.toml          # NNN- prefix = catalog order
//!     └── wip-idea.toml            # Unnumbered = excluded from the catalog
//! ```
//!
//! ## Naming Convention
//!
//! Project files carry a numeric prefix (`NNN-name.toml`) for explicit
//! ordering; the filesystem is the source of truth, there is no separate
//! ordering key. Files without a prefix are drafts and do not enter the
//! catalog.
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - No duplicate project ids
//! - No duplicate ordering prefixes
//! - Skill levels within 0–100
//! - At least one entrance message

use crate::config::{self, SiteConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid project file {path}: {source}")]
    ProjectToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid profile file {path}: {source}")]
    ProfileToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("duplicate project id {id} in {path}")]
    DuplicateId { id: u32, path: PathBuf },
    #[error("duplicate ordering prefix {order} in {path}")]
    DuplicateOrder { order: u32, path: PathBuf },
    #[error("skill '{name}' has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u32 },
    #[error("entrance_messages must not be empty")]
    NoEntranceMessages,
}

/// Manifest output from the scan stage.
///
/// Serialized to JSON between stages and handed to the interaction engine
/// at startup; both sides see the exact same catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutPage>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Distinct project categories in first-appearance (catalog) order.
    ///
    /// Drives filter-button generation; the set is closed once scanning
    /// completes.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for project in &self.projects {
            if seen.insert(project.category.as_str()) {
                out.push(project.category.as_str());
            }
        }
        out
    }
}

/// Site owner identity and page content that is not a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// CV asset filename inside `assets/`, if the site offers a download.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_file: Option<String>,
    /// Messages the entrance page types and erases in a loop.
    pub entrance_messages: Vec<String>,
    /// Subject choices for the contact form select.
    pub subjects: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Software Developer".to_string(),
            tagline: None,
            email: None,
            github: None,
            cv_file: None,
            entrance_messages: vec![
                "Welcome to my corner of the web".to_string(),
                "Portfolio and selected work".to_string(),
                "Let's build something".to_string(),
            ],
            subjects: vec![
                "Job opportunity".to_string(),
                "Project collaboration".to_string(),
                "Other".to_string(),
            ],
        }
    }
}

/// One in-page section of the portfolio, in document order.
///
/// Section ids double as element ids and anchor targets; the first entry
/// is the scroll-spy default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    /// The portfolio's fixed section layout.
    pub fn defaults() -> Vec<Section> {
        [
            ("home", "Home"),
            ("about", "About"),
            ("skills", "Skills"),
            ("projects", "Projects"),
            ("contact", "Contact"),
        ]
        .iter()
        .map(|(id, label)| Section {
            id: (*id).to_string(),
            label: (*label).to_string(),
        })
        .collect()
    }
}

/// A skill with the bar level the reveal animation fills to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Bar width in percent, 0–100.
    pub level: u32,
}

/// One portfolio project.
///
/// The catalog is fixed at scan time: nothing creates, mutates, or removes
/// projects at runtime — only the rendered view changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Unique integer identifier.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Filter key, e.g. `frontend`, `ml`, `distributed`. Free-form; the
    /// category set is whatever the catalog contains.
    pub category: String,
    /// Ordered technology tags, rendered in this order.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Icon-class reference (opaque string, e.g. `fas fa-robot`).
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub links: ProjectLinks,
    /// Gates the demo link and the "Live demo" badge.
    #[serde(default)]
    pub has_demo: bool,
    /// Source file relative to the content root, filled in by the scanner.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

fn default_icon() -> String {
    "fas fa-code".to_string()
}

/// Project link targets. `#` is the placeholder for "no destination".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectLinks {
    pub demo: String,
    pub github: String,
}

impl Default for ProjectLinks {
    fn default() -> Self {
        Self {
            demo: "#".to_string(),
            github: "#".to_string(),
        }
    }
}

/// The about section, parsed from `about.md`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPage {
    /// Title from the first `# heading`, or a stock fallback.
    pub title: String,
    /// Raw markdown body; converted to HTML at generate time.
    pub body: String,
}

/// Profile file as written by the user; skills ride along and are split
/// out into the manifest.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProfileFile {
    name: String,
    headline: String,
    tagline: Option<String>,
    email: Option<String>,
    github: Option<String>,
    cv_file: Option<String>,
    entrance_messages: Vec<String>,
    subjects: Vec<String>,
    skills: Vec<Skill>,
}

impl Default for ProfileFile {
    fn default() -> Self {
        let profile = Profile::default();
        Self {
            name: profile.name,
            headline: profile.headline,
            tagline: None,
            email: None,
            github: None,
            cv_file: None,
            entrance_messages: profile.entrance_messages,
            subjects: profile.subjects,
            skills: Vec::new(),
        }
    }
}

pub fn scan(root: &Path) -> Result<Manifest, CatalogError> {
    let site_config = config::load_config(root)?;
    let (profile, skills) = load_profile(root)?;
    let projects = load_projects(&root.join("projects"))?;
    let about = load_about(root)?;

    Ok(Manifest {
        profile,
        sections: Section::defaults(),
        skills,
        projects,
        about,
        config: site_config,
    })
}

fn load_profile(root: &Path) -> Result<(Profile, Vec<Skill>), CatalogError> {
    let path = root.join("profile.toml");
    let file: ProfileFile = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|source| CatalogError::ProfileToml {
            path: path.clone(),
            source,
        })?
    } else {
        ProfileFile::default()
    };

    if file.entrance_messages.is_empty() {
        return Err(CatalogError::NoEntranceMessages);
    }
    for skill in &file.skills {
        if skill.level > 100 {
            return Err(CatalogError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
    }

    let profile = Profile {
        name: file.name,
        headline: file.headline,
        tagline: file.tagline,
        email: file.email,
        github: file.github,
        cv_file: file.cv_file,
        entrance_messages: file.entrance_messages,
        subjects: file.subjects,
    };
    Ok((profile, file.skills))
}

fn load_projects(dir: &Path) -> Result<Vec<Project>, CatalogError> {
    if !dir.is_dir() {
        // No projects directory is a valid (empty) catalog.
        return Ok(Vec::new());
    }

    let mut numbered: Vec<(u32, PathBuf)> = Vec::new();
    let mut orders = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_toml = path.is_file()
            && path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("toml"))
                .unwrap_or(false);
        if !is_toml {
            continue;
        }
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        // Unnumbered files are drafts and stay out of the catalog.
        let Some(order) = parse_order_prefix(&stem) else {
            continue;
        };
        if !orders.insert(order) {
            return Err(CatalogError::DuplicateOrder { order, path });
        }
        numbered.push((order, path));
    }
    numbered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut projects = Vec::new();
    let mut ids = BTreeSet::new();
    for (_, path) in numbered {
        let content = fs::read_to_string(&path)?;
        let mut project: Project =
            toml::from_str(&content).map_err(|source| CatalogError::ProjectToml {
                path: path.clone(),
                source,
            })?;
        if !ids.insert(project.id) {
            return Err(CatalogError::DuplicateId {
                id: project.id,
                path,
            });
        }
        project.source = path
            .file_name()
            .map(|f| format!("projects/{}", f.to_string_lossy()))
            .unwrap_or_default();
        projects.push(project);
    }
    Ok(projects)
}

fn load_about(root: &Path) -> Result<Option<AboutPage>, CatalogError> {
    let path = root.join("about.md");
    if !path.exists() {
        return Ok(None);
    }
    let body = fs::read_to_string(&path)?;
    let title = body
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .unwrap_or_else(|| "About".to_string());
    Ok(Some(AboutPage { title, body }))
}

/// Parse the `NNN-name` ordering convention on a project file stem.
///
/// - `"010-first"` → `Some(10)`
/// - `"010"` → `Some(10)` (number-only is allowed)
/// - `"wip-idea"`, `"first"` → `None`
pub fn parse_order_prefix(stem: &str) -> Option<u32> {
    let prefix = match stem.find('-') {
        Some(dash) => &stem[..dash],
        None => stem,
    };
    prefix.parse::<u32>().ok()
}
