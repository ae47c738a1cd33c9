//! Transient notifications.
//!
//! One notification is visible at a time: showing a new one unmounts any
//! predecessor and cancels its timers. The lifecycle is mount → `show`
//! class after a short delay (lets the slide-in transition run) → exit
//! after the auto-dismiss duration or a manual close → removal once the
//! exit transition has played. Manual dismissal cancels the pending
//! auto-dismiss, so a closed notification never ghosts back.

use crate::markup;
use crate::page::{ElementId, Page, ids};
use crate::ui::Task;
use crate::ui::timing::{Scheduler, TimerId};
use std::fmt;
use std::time::{Duration, Instant};

/// Delay between mounting and the `show` class, giving the stylesheet a
/// frame to pick up the entry transition.
const MOUNT_DELAY: Duration = Duration::from_millis(100);
/// How long the exit transition plays before the element is removed.
const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Notification flavor; selects icon and color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Success => "success",
            Kind::Error => "error",
        })
    }
}

#[derive(Debug)]
pub struct Notifier {
    default_duration: Duration,
    show_timer: Option<TimerId>,
    dismiss_timer: Option<TimerId>,
}

impl Notifier {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            default_duration,
            show_timer: None,
            dismiss_timer: None,
        }
    }

    /// Show a notification, replacing any currently visible one.
    ///
    /// `duration` overrides the default auto-dismiss window (the form
    /// manager keeps its success message up longer).
    pub fn show(
        &mut self,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        kind: Kind,
        message: &str,
        duration: Option<Duration>,
        now: Instant,
    ) {
        // Remove the predecessor first, timers included.
        if let Some(id) = self.show_timer.take() {
            scheduler.cancel(id);
        }
        if let Some(id) = self.dismiss_timer.take() {
            scheduler.cancel(id);
        }
        let slot = ElementId::from(ids::NOTIFICATION);
        page.remove(&slot);

        page.mount(
            &slot,
            markup::notification(kind, message),
            crate::page::Mount::BodyEnd,
        );
        self.show_timer = Some(scheduler.schedule_in(now, MOUNT_DELAY, Task::NotificationShow));
        let auto = duration.unwrap_or(self.default_duration);
        self.dismiss_timer = Some(scheduler.schedule_in(now, auto, Task::NotificationDismiss));
    }

    /// Begin the exit transition (manual close or auto-dismiss).
    pub fn dismiss(
        &mut self,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        now: Instant,
    ) {
        if let Some(id) = self.dismiss_timer.take() {
            scheduler.cancel(id);
        }
        page.remove_class(&ElementId::from(ids::NOTIFICATION), "show");
        scheduler.schedule_in(now, EXIT_DELAY, Task::NotificationRemove);
    }

    /// Route a scheduler task. Returns `true` when the task belonged here.
    pub fn handle_task(
        &mut self,
        task: &Task,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        now: Instant,
    ) -> bool {
        match task {
            Task::NotificationShow => {
                self.show_timer = None;
                page.add_class(&ElementId::from(ids::NOTIFICATION), "show");
                true
            }
            Task::NotificationDismiss => {
                self.dismiss_timer = None;
                self.dismiss(page, scheduler, now);
                true
            }
            Task::NotificationRemove => {
                page.remove(&ElementId::from(ids::NOTIFICATION));
                true
            }
            _ => false,
        }
    }

    /// A click on the close control dismisses immediately.
    pub fn handle_click(
        &mut self,
        target: &ElementId,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        now: Instant,
    ) {
        if target.as_str() == ids::NOTIFICATION_CLOSE {
            self.dismiss(page, scheduler, now);
        }
    }
}
