//! Accessibility affordances: skip link, keyboard-mode styling, focus
//! management for the mobile menu, and ARIA label backfill.

use crate::catalog::Section;
use crate::markup;
use crate::page::{ElementId, Mount, Page, ids};
use crate::ui::form::FieldId;
use crate::ui::timing::Scheduler;
use crate::ui::{Event, Key, Task};
use std::time::{Duration, Instant};

/// Focus moves into the menu one transition frame after it opens.
const MENU_FOCUS_DELAY: Duration = Duration::from_millis(100);

pub struct AccessibilityManager {
    /// Skip-link target and first nav-link section.
    first_section: String,
}

impl AccessibilityManager {
    pub fn new(sections: &[Section]) -> Self {
        Self {
            first_section: sections
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_else(|| "home".to_string()),
        }
    }

    /// Mount the skip link and backfill missing ARIA labels.
    pub fn init(&self, page: &mut dyn Page) {
        page.mount(
            &ElementId::from(ids::SKIP_LINK),
            markup::skip_link(&self.first_section),
            Mount::BodyStart,
        );

        // Icon-only controls need a label.
        let hamburger = ElementId::from(ids::HAMBURGER);
        if page.contains(&hamburger) && page.attr(&hamburger, "aria-label").is_none() {
            page.set_attr(&hamburger, "aria-label", "Menu");
        }

        // Fields without a label fall back to their placeholder.
        for field in FieldId::ALL {
            let input = ids::field(field);
            if page.attr(&input, "aria-label").is_none() {
                if let Some(placeholder) = page.attr(&input, "placeholder") {
                    page.set_attr(&input, "aria-label", &placeholder);
                }
            }
        }
    }

    pub fn handle_event(
        &mut self,
        event: &Event,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        now: Instant,
    ) {
        match event {
            Event::KeyDown { key: Key::Tab } => {
                page.add_class(&ElementId::from(ids::BODY), "using-keyboard");
            }
            Event::MouseDown => {
                page.remove_class(&ElementId::from(ids::BODY), "using-keyboard");
            }
            Event::Click { target: Some(target) } if target.as_str() == ids::HAMBURGER => {
                // The navigation manager has already toggled the menu;
                // follow the opening transition with focus.
                if page.has_class(&ElementId::from(ids::NAV_MENU), "active") {
                    scheduler.schedule_in(now, MENU_FOCUS_DELAY, Task::MenuFocusFirst);
                }
            }
            _ => {}
        }
    }

    /// Route a scheduler task. Returns `true` when the task belonged here.
    pub fn handle_task(&mut self, task: &Task, page: &mut dyn Page) -> bool {
        match task {
            Task::MenuFocusFirst => {
                page.focus(&ids::nav_link(&self.first_section));
                true
            }
            _ => false,
        }
    }
}
