//! The interaction engine.
//!
//! Two independent front-end modules mirror the two generated pages:
//!
//! - [`entrance::EntranceApp`] — the entrance page's typing loop,
//!   particle field, and timed transition into the portfolio.
//! - [`PortfolioApp`] — seven cooperating managers over the portfolio
//!   page: navigation, scroll animations, project filtering, the contact
//!   form, CV download, performance, and accessibility, plus the shared
//!   notification center and the decorative particle layer.
//!
//! Everything is reactive: an embedder translates browser happenings
//! into [`Event`] values and calls [`PortfolioApp::dispatch`], fires
//! [`PortfolioApp::advance`] when timers come due, and applies the
//! resulting [`crate::page::Page`] edits. Execution is single-threaded
//! and cooperative; mutual exclusion over the shared state (the current
//! filter, the rule table) is structural, not locked.
//!
//! Managers are isolated at startup: a manager whose construction fails
//! is reported in the returned error list and skipped, and the rest of
//! the page keeps working.

pub mod a11y;
pub mod download;
pub mod entrance;
pub mod form;
pub mod nav;
pub mod notify;
pub mod particles;
pub mod perf;
pub mod projects;
pub mod reveal;
pub mod timing;

use crate::catalog::Manifest;
use crate::config::ParticleConfig;
use crate::page::{ElementId, Page, ids};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use thiserror::Error;

use self::a11y::AccessibilityManager;
use self::download::CvDownloadManager;
use self::form::{ContactFormManager, FieldId};
use self::nav::NavigationManager;
use self::notify::Notifier;
use self::perf::PerformanceManager;
use self::projects::ProjectsManager;
use self::reveal::ScrollAnimationsManager;
use self::timing::{Debounce, Scheduler};

/// A browser happening, translated by the embedder.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A click, resolved to the nearest addressed element (or nothing).
    Click { target: Option<ElementId> },
    MouseDown,
    KeyDown { key: Key },
    Scroll { y: f64 },
    Resize { width: f64 },
    VisibilityChange { hidden: bool },
    /// An observed element intersected the viewport.
    ElementVisible { target: ElementId, ratio: f64 },
    Blur { field: FieldId },
    Input { field: FieldId },
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

/// Typed timer payloads routed back to their owning manager.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    NotificationShow,
    NotificationDismiss,
    NotificationRemove,
    SubmitComplete,
    TypeTick,
    RippleCleanup,
    TransitionActivate,
    TransitionNavigate,
    StaggerReveal { target: ElementId },
    SkillFill { card_index: usize },
    MenuFocusFirst,
    ResizeSettled,
    EntranceResizeSettled,
}

/// A manager that could not be constructed. The app runs without it.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("contact form manager failed to initialize: {0}")]
    Form(#[from] regex::Error),
}

/// The portfolio page's event loop state: managers, notification center,
/// and the shared scheduler.
pub struct PortfolioApp<P: Page> {
    page: P,
    scheduler: Scheduler<Task>,
    notifier: Notifier,
    nav: NavigationManager,
    reveal: ScrollAnimationsManager,
    projects: ProjectsManager,
    download: CvDownloadManager,
    form: Option<ContactFormManager>,
    perf: PerformanceManager,
    a11y: AccessibilityManager,
    resize: Debounce,
    particles_cfg: ParticleConfig,
    last_width: f64,
    rng: StdRng,
}

impl<P: Page> PortfolioApp<P> {
    /// Construct every manager and run their startup work.
    ///
    /// Returns the app plus the list of managers that failed to come up;
    /// a failed manager is skipped, the rest initialize regardless.
    pub fn new(manifest: &Manifest, page: P, now: Instant) -> (Self, Vec<InitError>) {
        Self::with_seed(manifest, page, now, rand::random())
    }

    /// Seeded variant for deterministic particle layers under test.
    pub fn with_seed(
        manifest: &Manifest,
        mut page: P,
        _now: Instant,
        seed: u64,
    ) -> (Self, Vec<InitError>) {
        let mut errors = Vec::new();
        let timings = &manifest.config.timings;
        let categories = manifest.categories();

        let nav = NavigationManager::new(&manifest.sections, timings);
        let reveal = ScrollAnimationsManager::new(&manifest.sections, manifest.skills.len(), timings);
        let projects = ProjectsManager::new(
            manifest.projects.clone(),
            &categories,
            timings.stagger_step_ms,
        );
        let download = CvDownloadManager::new(manifest.profile.cv_file.clone());
        let form = match ContactFormManager::new(&manifest.config.contact, timings) {
            Ok(manager) => Some(manager),
            Err(err) => {
                errors.push(InitError::Form(err));
                None
            }
        };
        let perf = PerformanceManager::new(&manifest.config.particles);
        let a11y = AccessibilityManager::new(&manifest.sections);

        let mut rng = StdRng::seed_from_u64(seed);
        let width = page.viewport().width;
        build_particle_layer(&mut page, &mut rng, &manifest.config.particles, width);

        perf.init(&mut page);
        a11y.init(&mut page);
        projects.render(&mut page);
        page.add_class(&ElementId::from(ids::BODY), "loaded");

        let app = Self {
            page,
            scheduler: Scheduler::new(),
            notifier: Notifier::new(Duration::from_millis(timings.notification_ms)),
            nav,
            reveal,
            projects,
            download,
            form,
            perf,
            a11y,
            resize: Debounce::new(Duration::from_millis(timings.resize_debounce_ms)),
            particles_cfg: manifest.config.particles.clone(),
            last_width: width,
            rng,
        };
        (app, errors)
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// The form manager, when it initialized (submitter injection).
    pub fn form_mut(&mut self) -> Option<&mut ContactFormManager> {
        self.form.as_mut()
    }

    pub fn projects(&self) -> &ProjectsManager {
        &self.projects
    }

    /// Elements the embedder should observe for intersections, gathered
    /// once during initialization.
    pub fn observation_targets(&self) -> Vec<ElementId> {
        self.reveal.observation_targets()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Route one event through every interested manager, in construction
    /// order.
    pub fn dispatch(&mut self, event: &Event, now: Instant) {
        self.nav.handle_event(event, &mut self.page, now);
        self.reveal
            .handle_event(event, &mut self.page, &mut self.scheduler, now);
        self.projects.handle_event(event, &mut self.page);
        self.download.handle_event(
            event,
            &mut self.page,
            &mut self.scheduler,
            &mut self.notifier,
            now,
        );
        if let Some(form) = self.form.as_mut() {
            form.handle_event(
                event,
                &mut self.page,
                &mut self.scheduler,
                &mut self.notifier,
                now,
            );
        }
        self.perf.handle_event(event, &mut self.page);
        self.a11y
            .handle_event(event, &mut self.page, &mut self.scheduler, now);

        match event {
            Event::Click { target: Some(target) } => {
                self.notifier
                    .handle_click(target, &mut self.page, &mut self.scheduler, now);
            }
            Event::Resize { width } => {
                self.last_width = *width;
                self.resize
                    .trigger(&mut self.scheduler, now, Task::ResizeSettled);
            }
            Event::VisibilityChange { hidden } => {
                let body = ElementId::from(ids::BODY);
                if *hidden {
                    self.page.add_class(&body, "paused");
                } else {
                    self.page.remove_class(&body, "paused");
                }
            }
            _ => {}
        }
    }

    /// Fire every task due at `now`, routing each to its owner.
    pub fn advance(&mut self, now: Instant) {
        for task in self.scheduler.due(now) {
            if self.reveal.handle_task(&task, &mut self.page) {
                continue;
            }
            if self.a11y.handle_task(&task, &mut self.page) {
                continue;
            }
            if self
                .notifier
                .handle_task(&task, &mut self.page, &mut self.scheduler, now)
            {
                continue;
            }
            if let Some(form) = self.form.as_mut() {
                if form.handle_task(
                    &task,
                    &mut self.page,
                    &mut self.scheduler,
                    &mut self.notifier,
                    now,
                ) {
                    continue;
                }
            }
            if let Task::ResizeSettled = task {
                build_particle_layer(
                    &mut self.page,
                    &mut self.rng,
                    &self.particles_cfg,
                    self.last_width,
                );
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
}

fn build_particle_layer(
    page: &mut dyn Page,
    rng: &mut StdRng,
    config: &ParticleConfig,
    width: f64,
) {
    let count = particles::count_for_width(
        width,
        config.portfolio_wide,
        config.portfolio_narrow,
        config.breakpoint,
    );
    let field = particles::portfolio_field(rng, count);
    page.replace_children(
        &ElementId::from(ids::PARTICLES),
        particles::field_markup(&field),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{RecordingPage, sample_manifest};

    fn app() -> (PortfolioApp<RecordingPage>, Instant) {
        let manifest = sample_manifest();
        let page = RecordingPage::with_portfolio();
        let t0 = Instant::now();
        let (app, errors) = PortfolioApp::with_seed(&manifest, page, t0, 11);
        assert!(errors.is_empty());
        (app, t0)
    }

    #[test]
    fn startup_renders_grid_particles_and_loaded_marker() {
        let (app, _) = app();
        let manifest = sample_manifest();

        let grid = app.page().html_of(&ElementId::from(ids::PROJECTS_GRID));
        assert_eq!(
            grid.matches("class=\"project-card").count(),
            manifest.projects.len()
        );

        let particles = app.page().html_of(&ElementId::from(ids::PARTICLES));
        assert_eq!(particles.matches("class=\"particle\"").count(), 50);

        assert!(app.page().has_class(&ElementId::from(ids::BODY), "loaded"));
        assert!(app.page().contains(&ElementId::from(ids::SKIP_LINK)));
    }

    #[test]
    fn broken_form_pattern_isolates_only_the_form_manager() {
        let mut manifest = sample_manifest();
        manifest.config.contact.name_pattern = Some("([oops".to_string());
        let page = RecordingPage::with_portfolio();
        let t0 = Instant::now();

        let (mut app, errors) = PortfolioApp::with_seed(&manifest, page, t0, 11);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], InitError::Form(_)));
        assert!(app.form_mut().is_none());

        // The rest of the page still works: filtering re-renders.
        app.dispatch(
            &Event::Click { target: Some(ids::filter_button("ml")) },
            t0,
        );
        let grid = app.page().html_of(&ElementId::from(ids::PROJECTS_GRID));
        assert!(grid.contains("project-ml"));
        assert!(!grid.contains("project-frontend"));

        // Submitting does nothing rather than crashing.
        app.dispatch(&Event::Submit, t0);
    }

    #[test]
    fn visibility_change_toggles_paused_marker() {
        let (mut app, t0) = app();
        let body = ElementId::from(ids::BODY);

        app.dispatch(&Event::VisibilityChange { hidden: true }, t0);
        assert!(app.page().has_class(&body, "paused"));
        app.dispatch(&Event::VisibilityChange { hidden: false }, t0);
        assert!(!app.page().has_class(&body, "paused"));
    }

    #[test]
    fn rapid_resizes_rebuild_layer_once_with_final_width() {
        let (mut app, t0) = app();
        let ms = Duration::from_millis;

        app.dispatch(&Event::Resize { width: 1200.0 }, t0);
        app.dispatch(&Event::Resize { width: 500.0 }, t0 + ms(100));
        app.run_until(t0 + ms(600));

        let particles = app.page().html_of(&ElementId::from(ids::PARTICLES));
        assert_eq!(particles.matches("class=\"particle\"").count(), 25);
    }

    #[test]
    fn notification_close_click_is_routed() {
        let (mut app, t0) = app();
        // Trigger a notification via an invalid submit.
        app.dispatch(&Event::Submit, t0);
        let slot = ElementId::from(ids::NOTIFICATION);
        assert!(app.page().contains(&slot));

        app.dispatch(
            &Event::Click { target: Some(ElementId::from(ids::NOTIFICATION_CLOSE)) },
            t0 + Duration::from_millis(200),
        );
        app.run_until(t0 + Duration::from_millis(1000));
        assert!(!app.page().contains(&slot));
    }

    #[test]
    fn full_submit_round_trip_through_the_app() {
        let (mut app, t0) = app();
        {
            let page = app.page_mut();
            page.set_field("name", "Jordan Reyes");
            page.set_field("email", "jordan@example.org");
            page.set_field("subject", "Other");
            page.set_field("message", "This message is long enough.");
            page.set_checkbox("privacy", true);
        }

        app.dispatch(&Event::Submit, t0);
        app.run_until(t0 + Duration::from_millis(2500));

        let html = app.page().html_of(&ElementId::from(ids::NOTIFICATION));
        assert!(html.contains("Message sent!"));
        assert_eq!(
            app.page().field_value(&ElementId::from("name")),
            Some(String::new())
        );
    }

    #[test]
    fn observation_targets_are_exposed_for_registration() {
        let (app, _) = app();
        let targets = app.observation_targets();
        assert!(targets.contains(&ElementId::from("about")));
        assert!(targets.contains(&ids::skill_card(0)));
    }
}
