//! The page handle the interaction engine operates on.
//!
//! The engine never touches a real DOM. Every manager receives a
//! [`Page`] implementation and addresses elements by [`ElementId`];
//! an embedder (a WASM shell, a test double) maps those ids onto its
//! live page structure and applies the edits.
//!
//! Two rules shape the trait:
//!
//! - **Absence is explicit, never fatal.** Each mutating operation
//!   returns whether the target existed. Managers must tolerate a page
//!   that lacks their structure — the contract is no-op, not crash.
//! - **Reads are snapshots.** `viewport`, `region`, `field_value` and
//!   friends report the page state at call time; the engine holds no
//!   cached copies that could go stale between events.

use maud::Markup;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("asset not available: {0}")]
    MissingAsset(String),
}

/// Stable identifier of an addressable page element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Well-known element ids shared between the markup templates and the
/// managers. Generated pages and engine agree on these by construction.
pub mod ids {
    use super::ElementId;
    use crate::ui::form::FieldId;

    pub const BODY: &str = "body";
    pub const NAVBAR: &str = "navbar";
    pub const HAMBURGER: &str = "hamburger";
    pub const NAV_MENU: &str = "nav-menu";
    pub const PROJECTS_GRID: &str = "projects-grid";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const SUBMIT_BTN: &str = "submit-btn";
    pub const SUBMIT_LABEL: &str = "submit-label";
    pub const SUBMIT_SPINNER: &str = "submit-spinner";
    pub const CV_DOWNLOAD_BTN: &str = "cv-download-btn";
    pub const PARTICLES: &str = "particles";
    pub const SKILLS_GRID: &str = "skills-grid";
    pub const NOTIFICATION: &str = "notification";
    pub const NOTIFICATION_CLOSE: &str = "notification-close";
    pub const SKIP_LINK: &str = "skip-link";

    // Entrance page
    pub const TYPING_TEXT: &str = "typing-text";
    pub const ENTRANCE_BTN: &str = "entrance-btn";
    pub const ENTRANCE_CONTAINER: &str = "entrance-container";
    pub const TRANSITION_OVERLAY: &str = "transition-overlay";
    pub const PARTICLES_CONTAINER: &str = "particles-container";
    pub const FLOATING_SHAPES: &str = "floating-shapes";

    /// Nav link for a section, e.g. `nav-link-about`.
    pub fn nav_link(section: &str) -> ElementId {
        ElementId::new(format!("nav-link-{section}"))
    }

    /// Filter button for a category; `"all"` maps to `filter-all`.
    pub fn filter_button(category: &str) -> ElementId {
        ElementId::new(format!("filter-{category}"))
    }

    /// Form field input element.
    pub fn field(field: FieldId) -> ElementId {
        ElementId::new(field.as_str())
    }

    /// Inline error slot for a form field, e.g. `name-error`.
    pub fn field_error(field: FieldId) -> ElementId {
        ElementId::new(format!("{}-error", field.as_str()))
    }

    /// Skill card wrapper, indexed in catalog order.
    pub fn skill_card(index: usize) -> ElementId {
        ElementId::new(format!("skill-card-{index}"))
    }

    /// Skill progress bar, indexed in catalog order.
    pub fn skill_bar(index: usize) -> ElementId {
        ElementId::new(format!("skill-bar-{index}"))
    }
}

/// Viewport metrics at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
        }
    }
}

/// Viewport-relative bounding box of an element (the
/// `getBoundingClientRect` analog).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Where `mount` inserts a new root-level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// Before everything else in the body (skip link).
    BodyStart,
    /// After everything else in the body (notifications, shape layers).
    BodyEnd,
}

/// The live page, as far as the engine is concerned.
///
/// Mutating methods return `true` when the target element existed. An
/// implementation must treat unknown ids as harmless no-ops.
pub trait Page {
    fn contains(&self, id: &ElementId) -> bool;
    fn viewport(&self) -> Viewport;
    /// Device memory hint in GiB, when the host exposes one.
    fn device_memory(&self) -> Option<f64> {
        None
    }
    fn region(&self, id: &ElementId) -> Option<Region>;

    /// Replace the element's children with rendered markup.
    fn replace_children(&mut self, id: &ElementId, markup: Markup) -> bool;
    /// Insert a new root-level element identified by `id`. Replaces any
    /// previous mount under the same id.
    fn mount(&mut self, id: &ElementId, markup: Markup, at: Mount);
    /// Remove a mounted or static element entirely.
    fn remove(&mut self, id: &ElementId) -> bool;

    fn set_text(&mut self, id: &ElementId, text: &str) -> bool;
    fn add_class(&mut self, id: &ElementId, class: &str) -> bool;
    fn remove_class(&mut self, id: &ElementId, class: &str) -> bool;
    fn has_class(&self, id: &ElementId, class: &str) -> bool;
    fn set_attr(&mut self, id: &ElementId, name: &str, value: &str) -> bool;
    fn remove_attr(&mut self, id: &ElementId, name: &str) -> bool;
    fn attr(&self, id: &ElementId, name: &str) -> Option<String>;
    fn set_style(&mut self, id: &ElementId, property: &str, value: &str) -> bool;
    /// Set a custom property on the document root (`:root`).
    fn set_root_style(&mut self, property: &str, value: &str);

    fn focus(&mut self, id: &ElementId) -> bool;
    fn scroll_to(&mut self, y: f64);

    /// Form reads and writes.
    fn field_value(&self, id: &ElementId) -> Option<String>;
    fn set_field_value(&mut self, id: &ElementId, value: &str) -> bool;
    fn checked(&self, id: &ElementId) -> Option<bool>;
    fn set_checked(&mut self, id: &ElementId, checked: bool) -> bool;

    /// Leave the current page for `href`.
    fn navigate(&mut self, href: &str);
    /// Trigger a browser-native download of a named asset.
    fn download(&mut self, asset: &str) -> Result<(), PageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_display_and_eq() {
        let id = ElementId::from("navbar");
        assert_eq!(id.to_string(), "navbar");
        assert_eq!(id, ElementId::new("navbar".to_string()));
    }

    #[test]
    fn derived_ids_follow_conventions() {
        assert_eq!(ids::nav_link("about").as_str(), "nav-link-about");
        assert_eq!(ids::filter_button("all").as_str(), "filter-all");
        assert_eq!(ids::skill_bar(2).as_str(), "skill-bar-2");
        assert_eq!(
            ids::field_error(crate::ui::form::FieldId::Email).as_str(),
            "email-error"
        );
    }
}
