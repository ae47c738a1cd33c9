//! The entrance page engine.
//!
//! Runs the typing/erasing loop over the configured messages, the
//! decorative particle field and floating shapes, scroll parallax, and
//! the timed transition into the portfolio page. The module is
//! self-contained — the entrance and portfolio pages are independent
//! front-end modules, mirroring the two-page site structure.
//!
//! The typing loop is a five-phase machine driven by a single recurring
//! task whose delay varies with the phase: one `typing_ms` per typed
//! character, `typing_hold_ms` on a finished message, half-speed
//! erasing, and `typing_restart_ms` before the next message. The
//! rendered text is always the typed prefix plus a trailing cursor.

use crate::catalog::Manifest;
use crate::config::{ParticleConfig, TimingConfig};
use crate::page::{ElementId, Mount, Page, ids};
use crate::ui::particles::{self, count_for_width};
use crate::ui::timing::{Debounce, Scheduler};
use crate::ui::Task;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Delay between the enter click and the cover overlay, letting the
/// button ripple play first.
const ENTER_OVERLAY_DELAY: Duration = Duration::from_millis(300);
/// Where the transition lands.
const PORTFOLIO_HREF: &str = "portfolio.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypingPhase {
    /// Waiting for the start delay; nothing typed by the engine yet.
    Start,
    /// `n` characters of the current message are on screen, growing.
    Typing(usize),
    /// `n` characters are on screen, shrinking.
    Erasing(usize),
    /// Between messages, screen empty.
    Rest,
}

/// Which delay separates this tick from the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickDelay {
    Type,
    Hold,
    Erase,
    Rest,
}

/// Advance the typing machine by one tick.
///
/// Returns the next phase, how many characters to render now (if the
/// display changes), the delay class before the next tick, and whether
/// the message index advances.
fn step_typing(phase: TypingPhase, len: usize) -> (TypingPhase, Option<usize>, TickDelay, bool) {
    match phase {
        TypingPhase::Start | TypingPhase::Rest => (TypingPhase::Typing(0), Some(0), TickDelay::Type, false),
        TypingPhase::Typing(n) if n < len => {
            let shown = n + 1;
            let delay = if shown == len { TickDelay::Hold } else { TickDelay::Type };
            (TypingPhase::Typing(shown), Some(shown), delay, false)
        }
        // Message fully shown (or empty): start erasing.
        TypingPhase::Typing(_) => {
            if len == 0 {
                (TypingPhase::Typing(0), Some(0), TickDelay::Hold, false)
            } else {
                (TypingPhase::Erasing(len - 1), Some(len - 1), TickDelay::Erase, false)
            }
        }
        TypingPhase::Erasing(0) => (TypingPhase::Rest, None, TickDelay::Rest, true),
        TypingPhase::Erasing(n) => (TypingPhase::Erasing(n - 1), Some(n - 1), TickDelay::Erase, false),
    }
}

/// The entrance page's event loop state.
pub struct EntranceApp<P: Page> {
    page: P,
    scheduler: Scheduler<Task>,
    timings: TimingConfig,
    particles: ParticleConfig,
    messages: Vec<String>,
    message_index: usize,
    phase: TypingPhase,
    entered: bool,
    resize: Debounce,
    last_width: f64,
    rng: StdRng,
}

impl<P: Page> EntranceApp<P> {
    /// Build the entrance engine: particle field and floating shapes go
    /// up immediately, the typing loop starts after its initial delay.
    pub fn new(manifest: &Manifest, page: P, now: Instant) -> Self {
        Self::with_seed(manifest, page, now, rand::random())
    }

    /// Seeded variant for deterministic fields under test.
    pub fn with_seed(manifest: &Manifest, mut page: P, now: Instant, seed: u64) -> Self {
        let timings = manifest.config.timings.clone();
        let particles_cfg = manifest.config.particles.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let width = page.viewport().width;

        build_particle_field(&mut page, &mut rng, &particles_cfg, width);
        let shapes = particles::floating_shapes(&mut rng, particles_cfg.shape_count);
        page.mount(
            &ElementId::from(ids::FLOATING_SHAPES),
            particles::shapes_markup(&shapes),
            Mount::BodyEnd,
        );

        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(
            now,
            Duration::from_millis(timings.typing_start_delay_ms),
            Task::TypeTick,
        );

        let resize = Debounce::new(Duration::from_millis(timings.entrance_resize_debounce_ms));
        Self {
            page,
            scheduler,
            timings,
            particles: particles_cfg,
            messages: manifest.profile.entrance_messages.clone(),
            message_index: 0,
            phase: TypingPhase::Start,
            entered: false,
            resize,
            last_width: width,
            rng,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn dispatch(&mut self, event: &crate::ui::Event, now: Instant) {
        match event {
            crate::ui::Event::Click { target: Some(target) }
                if target.as_str() == ids::ENTRANCE_BTN =>
            {
                self.enter(now);
            }
            crate::ui::Event::Scroll { y } => {
                // Parallax: the container drifts at half scroll speed.
                self.page.set_style(
                    &ElementId::from(ids::ENTRANCE_CONTAINER),
                    "transform",
                    &format!("translateY({}px)", y * -0.5),
                );
            }
            crate::ui::Event::Resize { width } => {
                self.last_width = *width;
                self.resize
                    .trigger(&mut self.scheduler, now, Task::EntranceResizeSettled);
            }
            _ => {}
        }
    }

    /// Fire every task due at `now`.
    pub fn advance(&mut self, now: Instant) {
        for task in self.scheduler.due(now) {
            match task {
                Task::TypeTick => self.type_tick(now),
                Task::RippleCleanup => {
                    self.page
                        .remove_class(&ElementId::from(ids::ENTRANCE_BTN), "rippling");
                }
                Task::TransitionActivate => {
                    self.page
                        .add_class(&ElementId::from(ids::TRANSITION_OVERLAY), "active");
                    self.scheduler.schedule_in(
                        now,
                        Duration::from_millis(self.timings.transition_ms),
                        Task::TransitionNavigate,
                    );
                }
                Task::TransitionNavigate => self.page.navigate(PORTFOLIO_HREF),
                Task::EntranceResizeSettled => {
                    build_particle_field(
                        &mut self.page,
                        &mut self.rng,
                        &self.particles,
                        self.last_width,
                    );
                }
                _ => {}
            }
        }
    }

    /// Drive the engine forward through every deadline up to `until`.
    pub fn run_until(&mut self, until: Instant) {
        while let Some(deadline) = self.scheduler.next_deadline() {
            if deadline > until {
                break;
            }
            self.advance(deadline);
        }
    }

    fn enter(&mut self, now: Instant) {
        if self.entered {
            return;
        }
        self.entered = true;
        self.page
            .add_class(&ElementId::from(ids::ENTRANCE_BTN), "rippling");
        self.scheduler.schedule_in(
            now,
            Duration::from_millis(self.timings.ripple_ms),
            Task::RippleCleanup,
        );
        self.scheduler
            .schedule_in(now, ENTER_OVERLAY_DELAY, Task::TransitionActivate);
    }

    fn type_tick(&mut self, now: Instant) {
        let message = self.messages[self.message_index].clone();
        let len = message.chars().count();
        let (phase, render, delay, advance_message) = step_typing(self.phase, len);
        self.phase = phase;

        if let Some(shown) = render {
            let prefix: String = message.chars().take(shown).collect();
            self.page.replace_children(
                &ElementId::from(ids::TYPING_TEXT),
                crate::markup::typed_message(&prefix),
            );
        }
        if advance_message {
            self.message_index = (self.message_index + 1) % self.messages.len();
        }

        let delay = match delay {
            TickDelay::Type => self.timings.typing_ms,
            TickDelay::Hold => self.timings.typing_hold_ms,
            // Erasing runs at double typing speed.
            TickDelay::Erase => (self.timings.typing_ms / 2).max(1),
            TickDelay::Rest => self.timings.typing_restart_ms,
        };
        self.scheduler
            .schedule_in(now, Duration::from_millis(delay), Task::TypeTick);
    }
}

fn build_particle_field(
    page: &mut dyn Page,
    rng: &mut StdRng,
    config: &ParticleConfig,
    width: f64,
) {
    let count = count_for_width(
        width,
        config.entrance_wide,
        config.entrance_narrow,
        config.breakpoint,
    );
    let field = particles::entrance_field(rng, count);
    page.replace_children(
        &ElementId::from(ids::PARTICLES_CONTAINER),
        particles::field_markup(&field),
    );
}
