//! Reveal-on-scroll animations and skill bars.
//!
//! The embedder observes the elements returned by
//! [`ScrollAnimationsManager::observation_targets`] and reports
//! intersections as [`Event::ElementVisible`]. Sections gain their
//! `animate` class on first sight; the skills grid staggers its cards a
//! fixed step apart; each skill bar fills to its `data-width` once, a
//! short delay after its card is half-visible.

use crate::catalog::Section;
use crate::config::TimingConfig;
use crate::page::{ElementId, Page, ids};
use crate::ui::timing::Scheduler;
use crate::ui::{Event, Task};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Intersection ratio past which a skill card schedules its bar fill.
const FILL_VISIBILITY: f64 = 0.5;

pub struct ScrollAnimationsManager {
    section_ids: Vec<String>,
    skill_cards: Vec<ElementId>,
    revealed: HashSet<ElementId>,
    /// Bars already filled (or scheduled): each fills exactly once.
    filling: HashSet<usize>,
    stagger_started: bool,
    stagger_step: Duration,
    fill_delay: Duration,
}

impl ScrollAnimationsManager {
    pub fn new(sections: &[Section], skill_count: usize, timings: &TimingConfig) -> Self {
        Self {
            section_ids: sections.iter().map(|s| s.id.clone()).collect(),
            skill_cards: (0..skill_count).map(ids::skill_card).collect(),
            revealed: HashSet::new(),
            filling: HashSet::new(),
            stagger_started: false,
            stagger_step: Duration::from_millis(timings.stagger_step_ms),
            fill_delay: Duration::from_millis(timings.skill_fill_delay_ms),
        }
    }

    /// Everything the embedder should watch for intersections: the page
    /// sections plus every skill card. Registered once at startup.
    pub fn observation_targets(&self) -> Vec<ElementId> {
        self.section_ids
            .iter()
            .map(|s| ElementId::from(s.as_str()))
            .chain(self.skill_cards.iter().cloned())
            .collect()
    }

    pub fn handle_event(
        &mut self,
        event: &Event,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        now: Instant,
    ) {
        let Event::ElementVisible { target, ratio } = event else {
            return;
        };

        if let Some(card_index) = self.skill_cards.iter().position(|c| c == target) {
            // Any card coming into view kicks off the grid stagger once.
            if !self.stagger_started {
                self.stagger_started = true;
                for (index, card) in self.skill_cards.iter().enumerate() {
                    scheduler.schedule_in(
                        now,
                        self.stagger_step * index as u32,
                        Task::StaggerReveal {
                            target: card.clone(),
                        },
                    );
                }
            }
            if *ratio >= FILL_VISIBILITY && self.filling.insert(card_index) {
                scheduler.schedule_in(
                    now,
                    self.fill_delay,
                    Task::SkillFill { card_index },
                );
            }
            return;
        }

        // Generic reveal target: animate once, repeats are no-ops.
        if self.revealed.insert(target.clone()) {
            page.add_class(target, "animate");
        }
    }

    /// Route a scheduler task. Returns `true` when the task belonged here.
    pub fn handle_task(&mut self, task: &Task, page: &mut dyn Page) -> bool {
        match task {
            Task::StaggerReveal { target } => {
                page.add_class(target, "stagger-animation");
                true
            }
            Task::SkillFill { card_index } => {
                let bar = ids::skill_bar(*card_index);
                // The bar's target width lives in its own markup.
                if let Some(width) = page.attr(&bar, "data-width") {
                    page.set_style(&bar, "width", &format!("{width}%"));
                    page.add_class(&bar, "animate");
                }
                true
            }
            _ => false,
        }
    }
}
