//! CV download trigger.
//!
//! A thin manager: clicking the CV control asks the page handle for a
//! browser-native download and reports the outcome through the
//! notification center. A missing asset is caught and surfaced, never
//! propagated.

use crate::page::{Page, ids};
use crate::ui::Event;
use crate::ui::notify::{Kind, Notifier};
use crate::ui::timing::Scheduler;
use crate::ui::Task;
use std::time::Instant;

pub struct CvDownloadManager {
    asset: Option<String>,
}

impl CvDownloadManager {
    pub fn new(asset: Option<String>) -> Self {
        Self { asset }
    }

    pub fn handle_event(
        &mut self,
        event: &Event,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        notifier: &mut Notifier,
        now: Instant,
    ) {
        let Event::Click { target: Some(target) } = event else {
            return;
        };
        if target.as_str() != ids::CV_DOWNLOAD_BTN {
            return;
        }

        let Some(asset) = self.asset.clone() else {
            notifier.show(
                page,
                scheduler,
                Kind::Error,
                "No CV is available for download",
                None,
                now,
            );
            return;
        };

        match page.download(&asset) {
            Ok(()) => notifier.show(
                page,
                scheduler,
                Kind::Success,
                "CV downloaded successfully!",
                None,
                now,
            ),
            Err(err) => notifier.show(
                page,
                scheduler,
                Kind::Error,
                &format!("CV download failed: {err}"),
                None,
                now,
            ),
        }
    }
}
