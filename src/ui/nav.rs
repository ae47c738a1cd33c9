//! Navigation behavior: scroll styling, mobile menu, scroll-spy, and
//! smooth in-page scrolling.
//!
//! Scroll handling is throttled on two independent windows: a tight one
//! for the navbar style, a looser one for the spy, so a scroll storm
//! costs a bounded amount of work. The mobile menu closes on link activation,
//! outside clicks, and Escape, and locks body scrolling while open.

use crate::catalog::Section;
use crate::config::TimingConfig;
use crate::page::{ElementId, Page, Region, Viewport, ids};
use crate::ui::timing::Throttle;
use crate::ui::{Event, Key};
use std::time::{Duration, Instant};

/// Scroll offset past which the navbar takes its `scrolled` styling.
const SCROLLED_THRESHOLD: f64 = 50.0;
/// Vertical tolerance when deciding which section is "current".
const SPY_TOLERANCE: f64 = 200.0;
/// The contact section sits lower under the fixed navbar.
const CONTACT_SCROLL_OFFSET: f64 = 80.0;

pub struct NavigationManager {
    /// Section ids in document order; the first is the spy default.
    sections: Vec<String>,
    scroll_throttle: Throttle,
    spy_throttle: Throttle,
    menu_open: bool,
}

impl NavigationManager {
    pub fn new(sections: &[Section], timings: &TimingConfig) -> Self {
        Self {
            sections: sections.iter().map(|s| s.id.clone()).collect(),
            scroll_throttle: Throttle::new(Duration::from_millis(timings.scroll_throttle_ms)),
            spy_throttle: Throttle::new(Duration::from_millis(timings.spy_throttle_ms)),
            menu_open: false,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn handle_event(&mut self, event: &Event, page: &mut dyn Page, now: Instant) {
        match event {
            Event::Scroll { y } => {
                if self.scroll_throttle.admit(now) {
                    self.style_navbar(*y, page);
                }
                if self.spy_throttle.admit(now) {
                    self.update_active_link(page);
                }
            }
            Event::Click { target: Some(target) } => self.handle_click(target, page),
            Event::Click { target: None } => {
                if self.menu_open {
                    self.close_menu(page);
                }
            }
            Event::KeyDown { key: Key::Escape } => {
                if self.menu_open {
                    self.close_menu(page);
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, target: &ElementId, page: &mut dyn Page) {
        if target.as_str() == ids::HAMBURGER {
            if self.menu_open {
                self.close_menu(page);
            } else {
                self.open_menu(page);
            }
            return;
        }

        let is_nav_link = self
            .sections
            .iter()
            .any(|section| &ids::nav_link(section) == target);

        // In-page anchor activation scrolls smoothly; a bare `#` is ignored.
        if let Some(href) = page.attr(target, "href") {
            if let Some(section) = href.strip_prefix('#') {
                if !section.is_empty() {
                    self.scroll_to_section(section, page);
                }
            }
        }

        if self.menu_open {
            // Nav links close the menu, and so does any click that lands
            // outside the menu structure.
            let inside_menu = target.as_str() == ids::NAV_MENU;
            if is_nav_link || !inside_menu {
                self.close_menu(page);
            }
        }
    }

    fn style_navbar(&self, scroll_y: f64, page: &mut dyn Page) {
        let navbar = ElementId::from(ids::NAVBAR);
        if scroll_y > SCROLLED_THRESHOLD {
            page.add_class(&navbar, "scrolled");
        } else {
            page.remove_class(&navbar, "scrolled");
        }
    }

    /// Scroll-spy: mark the nav link of the currently visible section.
    fn update_active_link(&self, page: &mut dyn Page) {
        let current = self.current_section(page);
        for section in &self.sections {
            let link = ids::nav_link(section);
            page.remove_class(&link, "active");
            if section == &current {
                page.add_class(&link, "active");
            }
        }
    }

    /// First section (document order) fully inside the viewport with
    /// vertical tolerance; the first section is the default.
    fn current_section(&self, page: &dyn Page) -> String {
        let viewport = page.viewport();
        for section in &self.sections {
            if let Some(region) = page.region(&ElementId::from(section.as_str())) {
                if in_viewport(&region, &viewport, SPY_TOLERANCE) {
                    return section.clone();
                }
            }
        }
        self.sections.first().cloned().unwrap_or_default()
    }

    fn scroll_to_section(&self, section: &str, page: &mut dyn Page) {
        let Some(region) = page.region(&ElementId::from(section)) else {
            return;
        };
        let offset = if section == "contact" {
            CONTACT_SCROLL_OFFSET
        } else {
            0.0
        };
        let y = page.viewport().scroll_y + region.top - offset;
        page.scroll_to(y);
    }

    fn open_menu(&mut self, page: &mut dyn Page) {
        self.menu_open = true;
        page.add_class(&ElementId::from(ids::HAMBURGER), "active");
        page.add_class(&ElementId::from(ids::NAV_MENU), "active");
        page.set_attr(&ElementId::from(ids::HAMBURGER), "aria-expanded", "true");
        page.set_style(&ElementId::from(ids::BODY), "overflow", "hidden");
    }

    fn close_menu(&mut self, page: &mut dyn Page) {
        self.menu_open = false;
        page.remove_class(&ElementId::from(ids::HAMBURGER), "active");
        page.remove_class(&ElementId::from(ids::NAV_MENU), "active");
        page.set_attr(&ElementId::from(ids::HAMBURGER), "aria-expanded", "false");
        page.set_style(&ElementId::from(ids::BODY), "overflow", "");
    }
}

/// Full-containment visibility: the element's box must sit fully inside
/// the viewport, with `tolerance` slack on the vertical axis only.
fn in_viewport(region: &Region, viewport: &Viewport, tolerance: f64) -> bool {
    region.top >= -tolerance
        && region.left >= 0.0
        && region.bottom <= viewport.height + tolerance
        && region.right <= viewport.width
}
