//! Project catalog filtering and card rendering.
//!
//! The manager owns the only mutable piece of project state: the current
//! filter. The catalog itself is fixed at construction; rendering is a
//! pure function of `(catalog, filter)` — a full replacement of the grid
//! contents, idempotent under repeated calls, stable in catalog order.
//!
//! An unrecognized category is not an error: it simply matches nothing
//! and renders an empty grid. (Deliberately preserved behavior.)

use crate::catalog::Project;
use crate::markup;
use crate::page::{ElementId, Page, ids};
use crate::ui::Event;

/// The current filter selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// `"all"` selects everything; any other string is a category key.
    pub fn from_key(key: &str) -> Self {
        if key == "all" {
            Filter::All
        } else {
            Filter::Category(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category,
        }
    }
}

pub struct ProjectsManager {
    catalog: Vec<Project>,
    /// Filter-button targets: `all` plus every category, in catalog order.
    buttons: Vec<(ElementId, String)>,
    filter: Filter,
    stagger_step_ms: u64,
}

impl ProjectsManager {
    pub fn new(catalog: Vec<Project>, categories: &[&str], stagger_step_ms: u64) -> Self {
        let mut buttons = vec![(ids::filter_button("all"), "all".to_string())];
        buttons.extend(
            categories
                .iter()
                .map(|c| (ids::filter_button(c), (*c).to_string())),
        );
        Self {
            catalog,
            buttons,
            filter: Filter::All,
            stagger_step_ms,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// The filtered view: the full catalog for `All`, otherwise the
    /// order-preserving subsequence matching the category.
    pub fn filtered(&self) -> Vec<&Project> {
        match &self.filter {
            Filter::All => self.catalog.iter().collect(),
            Filter::Category(category) => self
                .catalog
                .iter()
                .filter(|p| &p.category == category)
                .collect(),
        }
    }

    /// Replace the filter and re-render grid and buttons.
    ///
    /// No validation against the category set: an unknown key yields an
    /// empty grid, and the button marking degrades to "none active"
    /// because no control carries that key.
    pub fn set_filter(&mut self, key: &str, page: &mut dyn Page) {
        self.filter = Filter::from_key(key);
        self.mark_active_button(page);
        self.render(page);
    }

    /// Render the current view into the grid container.
    ///
    /// Total replacement: stale cards from a previous filter cannot
    /// survive. A missing container is a no-op, not a failure.
    pub fn render(&self, page: &mut dyn Page) {
        let grid = ElementId::from(ids::PROJECTS_GRID);
        if !page.contains(&grid) {
            return;
        }
        let cards = markup::project_grid(self.filtered(), self.stagger_step_ms);
        page.replace_children(&grid, cards);
    }

    /// Exactly one button active at a time: clear every control, then
    /// mark the selected one.
    fn mark_active_button(&self, page: &mut dyn Page) {
        for (button, _) in &self.buttons {
            page.remove_class(button, "active");
            page.set_attr(button, "aria-pressed", "false");
        }
        let selected = ids::filter_button(self.filter.key());
        page.add_class(&selected, "active");
        page.set_attr(&selected, "aria-pressed", "true");
    }

    pub fn handle_event(&mut self, event: &Event, page: &mut dyn Page) {
        if let Event::Click {
            target: Some(target),
        } = event
        {
            let key = self
                .buttons
                .iter()
                .find(|(button, _)| button == target)
                .map(|(_, key)| key.clone());
            if let Some(key) = key {
                self.set_filter(&key, page);
            }
        }
    }
}
