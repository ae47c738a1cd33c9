//! Shared test utilities for the vitrine test suite.
//!
//! Provides the fixture loader, an in-memory manifest mirroring the
//! fixture content, manifest lookup helpers that panic with an inventory
//! on miss, and [`RecordingPage`] — the `Page` double every engine test
//! drives. The recording page keeps a map of scripted elements and
//! answers reads from whatever the engine last wrote.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{AboutPage, Manifest, Profile, Project, ProjectLinks, Section, Skill};
use crate::config::SiteConfig;
use crate::page::{ElementId, Mount, Page, PageError, Region, Viewport, ids};
use crate::ui::form::FieldId;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other
/// tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// In-memory manifest (mirrors fixtures/content)
// =========================================================================

fn project(
    id: u32,
    title: &str,
    category: &str,
    technologies: &[&str],
    icon: &str,
    has_demo: bool,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("{title} description."),
        category: category.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        icon: icon.to_string(),
        links: ProjectLinks {
            demo: if has_demo {
                "https://example.org/demo".to_string()
            } else {
                "#".to_string()
            },
            github: "https://example.org/code".to_string(),
        },
        has_demo,
        source: String::new(),
    }
}

/// A complete manifest without touching the filesystem.
pub fn sample_manifest() -> Manifest {
    Manifest {
        profile: Profile {
            name: "Jordan Reyes".to_string(),
            headline: "Full-stack developer".to_string(),
            tagline: Some("Interfaces, data, and everything between".to_string()),
            email: Some("jordan@example.org".to_string()),
            github: Some("https://github.com/jordanreyes".to_string()),
            cv_file: Some("cv.pdf".to_string()),
            entrance_messages: vec![
                "Welcome to my corner of the web".to_string(),
                "Portfolio of Jordan Reyes".to_string(),
                "Developer with a soft spot for interfaces".to_string(),
            ],
            subjects: vec![
                "Job opportunity".to_string(),
                "Project collaboration".to_string(),
                "Other".to_string(),
            ],
        },
        sections: Section::defaults(),
        skills: vec![
            Skill { name: "JavaScript".to_string(), level: 85 },
            Skill { name: "Python".to_string(), level: 80 },
            Skill { name: "Rust".to_string(), level: 70 },
            Skill { name: "SQL".to_string(), level: 75 },
        ],
        projects: vec![
            project(1, "Interactive learning site", "frontend", &["JavaScript", "HTML", "CSS"], "fas fa-graduation-cap", true),
            project(2, "Robot storyteller", "frontend", &["JavaScript", "UX", "Speech synthesis"], "fas fa-robot", true),
            project(3, "Lexical triangle hunt", "ml", &["Python", "API", "SQLite"], "fas fa-search", false),
            project(4, "Daily activity planner", "frontend", &["PHP", "SQL"], "fas fa-calendar-day", true),
            project(5, "Tweet classifier", "ml", &["Python", "NLP"], "fas fa-brain", false),
            project(6, "CSV stitcher", "distributed", &["Python", "Bash"], "fas fa-file-csv", false),
        ],
        about: Some(AboutPage {
            title: "About me".to_string(),
            body: "# About me\n\nI build interfaces and study human-computer interaction.".to_string(),
        }),
        config: SiteConfig::default(),
    }
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a project by title. Panics if not found.
pub fn find_project<'a>(manifest: &'a Manifest, title: &str) -> &'a Project {
    manifest
        .projects
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = manifest.projects.iter().map(|p| p.title.as_str()).collect();
            panic!("project '{title}' not found. Available: {titles:?}")
        })
}

/// All project titles in manifest order.
pub fn project_titles(manifest: &Manifest) -> Vec<&str> {
    manifest.projects.iter().map(|p| p.title.as_str()).collect()
}

// =========================================================================
// Recording page double
// =========================================================================

#[derive(Debug, Default, Clone)]
struct FakeElement {
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    html: String,
    value: Option<String>,
    checked: Option<bool>,
    region: Option<Region>,
}

/// A `Page` implementation backed by a map of scripted elements.
///
/// Constructors pre-mount the structure a scenario needs; everything the
/// engine writes is readable back through `html_of`/`text_of`/`style_of`
/// and the public journals (`scrolled_to`, `downloads`, `navigations`).
#[derive(Debug, Default)]
pub struct RecordingPage {
    elements: BTreeMap<String, FakeElement>,
    pub viewport: Viewport,
    pub device_memory: Option<f64>,
    pub focused: Option<String>,
    pub scrolled_to: Vec<f64>,
    pub navigations: Vec<String>,
    pub downloads: Vec<String>,
    pub missing_assets: BTreeSet<String>,
    pub root_styles: BTreeMap<String, String>,
    pub mount_positions: BTreeMap<String, Mount>,
}

impl RecordingPage {
    /// A bare page: just a body. Everything else is absent.
    pub fn new() -> Self {
        let mut page = Self::default();
        page.mount_plain(ids::BODY);
        page
    }

    /// The contact-form structure: fields, error slots, submit control.
    pub fn with_form() -> Self {
        let mut page = Self::new();
        for field in FieldId::ALL {
            page.mount_plain(field.as_str());
            page.mount_plain(&format!("{}-error", field.as_str()));
            if !field.is_checkbox() {
                page.set_attr(
                    &ElementId::from(field.as_str()),
                    "placeholder",
                    &format!("{} placeholder", field.label()),
                );
            }
        }
        page.mount_plain(ids::CONTACT_FORM);
        page.mount_plain(ids::SUBMIT_BTN);
        page.mount_plain(ids::SUBMIT_LABEL);
        page.mount_plain(ids::SUBMIT_SPINNER);
        page
    }

    /// The full portfolio structure the generated page provides.
    pub fn with_portfolio() -> Self {
        let mut page = Self::with_form();
        page.mount_plain(ids::NAVBAR);
        page.mount_plain(ids::HAMBURGER);
        page.mount_plain(ids::NAV_MENU);
        page.mount_plain(ids::PROJECTS_GRID);
        page.mount_plain(ids::PARTICLES);
        page.mount_plain(ids::SKILLS_GRID);
        page.mount_plain(ids::CV_DOWNLOAD_BTN);
        for section in Section::defaults() {
            page.mount_plain(&section.id);
            let link = ids::nav_link(&section.id);
            page.mount_plain(link.as_str());
            page.set_attr(&link, "href", &format!("#{}", section.id));
        }
        for index in 0..4 {
            page.mount_plain(ids::skill_card(index).as_str());
            page.mount_plain(ids::skill_bar(index).as_str());
        }
        for category in ["all", "frontend", "ml", "distributed"] {
            page.mount_plain(ids::filter_button(category).as_str());
        }
        page
    }

    /// The entrance-page structure.
    pub fn with_entrance() -> Self {
        let mut page = Self::new();
        page.mount_plain(ids::ENTRANCE_CONTAINER);
        page.mount_plain(ids::PARTICLES_CONTAINER);
        page.mount_plain(ids::TYPING_TEXT);
        page.mount_plain(ids::ENTRANCE_BTN);
        page.mount_plain(ids::TRANSITION_OVERLAY);
        page
    }

    /// Pre-mount an empty element under `id`.
    pub fn mount_plain(&mut self, id: &str) {
        self.elements.insert(id.to_string(), FakeElement::default());
    }

    pub fn set_field(&mut self, id: &str, value: &str) {
        self.set_field_value(&ElementId::from(id), value);
    }

    pub fn set_checkbox(&mut self, id: &str, checked: bool) {
        self.set_checked(&ElementId::from(id), checked);
    }

    pub fn set_region(&mut self, id: &str, region: Region) {
        if let Some(element) = self.elements.get_mut(id) {
            element.region = Some(region);
        }
    }

    /// The innerHTML the engine last rendered into `id` (empty when the
    /// element is absent or untouched).
    pub fn html_of(&self, id: &ElementId) -> String {
        self.elements
            .get(id.as_str())
            .map(|e| e.html.clone())
            .unwrap_or_default()
    }

    pub fn text_of(&self, id: &ElementId) -> String {
        self.elements
            .get(id.as_str())
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    pub fn style_of(&self, id: &ElementId, property: &str) -> Option<String> {
        self.elements
            .get(id.as_str())
            .and_then(|e| e.styles.get(property).cloned())
    }

    fn get_mut(&mut self, id: &ElementId) -> Option<&mut FakeElement> {
        self.elements.get_mut(id.as_str())
    }
}

impl Page for RecordingPage {
    fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id.as_str())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn device_memory(&self) -> Option<f64> {
        self.device_memory
    }

    fn region(&self, id: &ElementId) -> Option<Region> {
        self.elements.get(id.as_str()).and_then(|e| e.region)
    }

    fn replace_children(&mut self, id: &ElementId, markup: maud::Markup) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.html = markup.into_string();
                true
            }
            None => false,
        }
    }

    fn mount(&mut self, id: &ElementId, markup: maud::Markup, at: Mount) {
        let element = FakeElement {
            html: markup.into_string(),
            ..FakeElement::default()
        };
        self.elements.insert(id.as_str().to_string(), element);
        self.mount_positions.insert(id.as_str().to_string(), at);
    }

    fn remove(&mut self, id: &ElementId) -> bool {
        self.mount_positions.remove(id.as_str());
        self.elements.remove(id.as_str()).is_some()
    }

    fn set_text(&mut self, id: &ElementId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn add_class(&mut self, id: &ElementId, class: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.classes.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_class(&mut self, id: &ElementId, class: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.classes.remove(class);
                true
            }
            None => false,
        }
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.elements
            .get(id.as_str())
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    fn set_attr(&mut self, id: &ElementId, name: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.attrs.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_attr(&mut self, id: &ElementId, name: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => element.attrs.remove(name).is_some(),
            None => false,
        }
    }

    fn attr(&self, id: &ElementId, name: &str) -> Option<String> {
        self.elements
            .get(id.as_str())
            .and_then(|e| e.attrs.get(name).cloned())
    }

    fn set_style(&mut self, id: &ElementId, property: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.styles.insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_root_style(&mut self, property: &str, value: &str) {
        self.root_styles
            .insert(property.to_string(), value.to_string());
    }

    fn focus(&mut self, id: &ElementId) -> bool {
        if self.contains(id) {
            self.focused = Some(id.as_str().to_string());
            true
        } else {
            false
        }
    }

    fn scroll_to(&mut self, y: f64) {
        self.scrolled_to.push(y);
    }

    fn field_value(&self, id: &ElementId) -> Option<String> {
        self.elements
            .get(id.as_str())
            .map(|e| e.value.clone().unwrap_or_default())
    }

    fn set_field_value(&mut self, id: &ElementId, value: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.value = Some(value.to_string());
                true
            }
            None => false,
        }
    }

    fn checked(&self, id: &ElementId) -> Option<bool> {
        self.elements
            .get(id.as_str())
            .map(|e| e.checked.unwrap_or(false))
    }

    fn set_checked(&mut self, id: &ElementId, checked: bool) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.checked = Some(checked);
                true
            }
            None => false,
        }
    }

    fn navigate(&mut self, href: &str) {
        self.navigations.push(href.to_string());
    }

    fn download(&mut self, asset: &str) -> Result<(), PageError> {
        if self.missing_assets.contains(asset) {
            return Err(PageError::MissingAsset(asset.to_string()));
        }
        self.downloads.push(asset.to_string());
        Ok(())
    }
}
