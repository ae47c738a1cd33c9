//! Performance affordances: lazy image loading and animation reduction.
//!
//! Environment signals are optional and absent-safe: no device-memory
//! hint means no reduction, and the particle layer is only hidden when
//! the viewport is genuinely narrow at startup.

use crate::config::ParticleConfig;
use crate::page::{ElementId, Page, ids};
use crate::ui::Event;

/// Device-memory hint (GiB) below which animations are flattened.
const LOW_MEMORY_GIB: f64 = 4.0;

pub struct PerformanceManager {
    breakpoint: f64,
}

impl PerformanceManager {
    pub fn new(particles: &ParticleConfig) -> Self {
        Self {
            breakpoint: particles.breakpoint,
        }
    }

    /// Apply the startup policies.
    pub fn init(&self, page: &mut dyn Page) {
        if let Some(memory) = page.device_memory() {
            if memory < LOW_MEMORY_GIB {
                page.set_root_style("--transition-base", "0s");
                page.set_root_style("--transition-fast", "0s");
                page.set_root_style("--transition-slow", "0s");
            }
        }
        if page.viewport().width < self.breakpoint {
            page.set_style(&ElementId::from(ids::PARTICLES), "display", "none");
        }
    }

    /// Lazy loading: promote `data-src` to `src` the first time an image
    /// becomes visible. Removing the marker makes repeats no-ops.
    pub fn handle_event(&mut self, event: &Event, page: &mut dyn Page) {
        if let Event::ElementVisible { target, .. } = event {
            if let Some(src) = page.attr(target, "data-src") {
                page.set_attr(target, "src", &src);
                page.remove_attr(target, "data-src");
            }
        }
    }
}
