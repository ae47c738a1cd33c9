//! Contact form validation and submission.
//!
//! The validator is a per-field display state machine over a fixed rule
//! table. A field is `untouched` until its first blur; blur and submit
//! run the rules synchronously and derive the error display from the
//! result; typing into a flagged field clears the error optimistically
//! without re-validating.
//!
//! Rule precedence per field, first failure wins: `required` →
//! `min_length` → `pattern`. The required and min-length failures use
//! generic wordings built from the field label; pattern and checkbox
//! failures use the rule's own message.
//!
//! Submission is a pluggable boundary: the engine validates, sanitizes
//! (HTML-escapes every string), and hands the payload to a [`Submitter`].
//! The stock [`SimulatedSubmitter`] performs no network call and simply
//! succeeds after a configured latency — the explicit stand-in for a real
//! backend.

use crate::config::{ContactConfig, TimingConfig};
use crate::page::{ElementId, Page, ids};
use crate::ui::Task;
use crate::ui::notify::{Kind, Notifier};
use crate::ui::timing::Scheduler;
use maud::html;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use thiserror::Error;

/// The form's fields, in validation and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
    Privacy,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Subject,
        FieldId::Message,
        FieldId::Privacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
            FieldId::Privacy => "privacy",
        }
    }

    /// Human label, as the form markup prints it.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
            FieldId::Privacy => "Privacy",
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FieldId::Privacy)
    }
}

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\s'-]+$").expect("built-in name pattern must compile")
});
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("built-in email pattern must compile")
});

/// Validation rule record for one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    /// Shown on pattern failures, and on unchecked required checkboxes.
    pub message: &'static str,
}

/// The form's rule table, in field order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(FieldId, FieldRule)>,
}

impl RuleSet {
    /// Build the rule table, compiling any configured pattern overrides.
    pub fn from_config(contact: &ContactConfig) -> Result<Self, regex::Error> {
        let name_pattern = match &contact.name_pattern {
            Some(pattern) => Regex::new(pattern)?,
            None => NAME_PATTERN.clone(),
        };
        let email_pattern = match &contact.email_pattern {
            Some(pattern) => Regex::new(pattern)?,
            None => EMAIL_PATTERN.clone(),
        };
        Ok(Self {
            rules: vec![
                (
                    FieldId::Name,
                    FieldRule {
                        required: true,
                        min_length: Some(2),
                        pattern: Some(name_pattern),
                        message: "Please enter a valid name",
                    },
                ),
                (
                    FieldId::Email,
                    FieldRule {
                        required: true,
                        min_length: None,
                        pattern: Some(email_pattern),
                        message: "Please enter a valid email address",
                    },
                ),
                (
                    FieldId::Subject,
                    FieldRule {
                        required: true,
                        min_length: None,
                        pattern: None,
                        message: "Please select a subject",
                    },
                ),
                (
                    FieldId::Message,
                    FieldRule {
                        required: true,
                        min_length: Some(10),
                        pattern: None,
                        message: "Your message must be at least 10 characters",
                    },
                ),
                (
                    FieldId::Privacy,
                    FieldRule {
                        required: true,
                        min_length: None,
                        pattern: None,
                        message: "You must accept the privacy policy",
                    },
                ),
            ],
        })
    }

    pub fn rule(&self, field: FieldId) -> &FieldRule {
        &self
            .rules
            .iter()
            .find(|(f, _)| *f == field)
            .expect("rule table covers every field")
            .1
    }
}

/// Current value of a field as read from the page.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

/// Run one field's rules against a value. `Err` carries the display
/// message of the first failing rule.
pub fn validate_value(field: FieldId, rule: &FieldRule, value: &FieldValue) -> Result<(), String> {
    match value {
        FieldValue::Checkbox(checked) => {
            if rule.required && !checked {
                return Err(rule.message.to_string());
            }
        }
        FieldValue::Text(raw) => {
            let trimmed = raw.trim();
            if rule.required && trimmed.is_empty() {
                return Err(format!("The \"{}\" field is required", field.label()));
            }
            if let Some(min) = rule.min_length {
                if trimmed.chars().count() < min {
                    return Err(format!("This field must contain at least {min} characters"));
                }
            }
            if let Some(pattern) = &rule.pattern {
                if !pattern.is_match(trimmed) {
                    return Err(rule.message.to_string());
                }
            }
        }
    }
    Ok(())
}

/// HTML-escape a raw string value at the submission boundary.
///
/// Rendering through maud reuses the same escaper the templates use, so
/// a payload can never carry live markup past this point.
pub fn sanitize(raw: &str) -> String {
    html! { (raw) }.into_string()
}

/// The escaped payload handed to the [`Submitter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission failed: {0}")]
    Failed(String),
}

/// The pluggable submission boundary.
///
/// `submit` runs synchronously when the form passes validation; the
/// engine surfaces the outcome after `delay`. A real backend integration
/// implements this trait and replaces the stock simulator without
/// touching any validation logic.
pub trait Submitter {
    fn submit(&mut self, form: &SanitizedForm) -> Result<(), SubmitError>;
    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// No backend exists: accept everything after a fixed latency.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&mut self, _form: &SanitizedForm) -> Result<(), SubmitError> {
        Ok(())
    }

    fn delay(&self) -> Duration {
        self.latency
    }
}

/// How long the success notification stays up (longer than the default).
const SUCCESS_NOTICE: Duration = Duration::from_millis(8000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormState {
    Idle,
    Submitting,
}

pub struct ContactFormManager {
    rules: RuleSet,
    submitter: Box<dyn Submitter>,
    state: FormState,
    /// Fields currently showing an error.
    flagged: HashSet<FieldId>,
    /// Outcome captured at submit time, surfaced when the latency elapses.
    pending: Option<Result<(), SubmitError>>,
}

impl ContactFormManager {
    pub fn new(contact: &ContactConfig, timings: &TimingConfig) -> Result<Self, regex::Error> {
        let rules = RuleSet::from_config(contact)?;
        let latency = Duration::from_millis(timings.submit_latency_ms);
        Ok(Self {
            rules,
            submitter: Box::new(SimulatedSubmitter::new(latency)),
            state: FormState::Idle,
            flagged: HashSet::new(),
            pending: None,
        })
    }

    /// Swap the submission boundary (tests, real backends).
    pub fn set_submitter(&mut self, submitter: Box<dyn Submitter>) {
        self.submitter = submitter;
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    fn read_value(&self, field: FieldId, page: &dyn Page) -> FieldValue {
        let id = ids::field(field);
        if field.is_checkbox() {
            FieldValue::Checkbox(page.checked(&id).unwrap_or(false))
        } else {
            FieldValue::Text(page.field_value(&id).unwrap_or_default())
        }
    }

    /// Validate one field and update its error display. Returns validity.
    pub fn validate_field(&mut self, field: FieldId, page: &mut dyn Page) -> bool {
        let value = self.read_value(field, page);
        match validate_value(field, self.rules.rule(field), &value) {
            Ok(()) => {
                self.clear_field(field, page);
                true
            }
            Err(message) => {
                self.show_error(field, &message, page);
                false
            }
        }
    }

    fn show_error(&mut self, field: FieldId, message: &str, page: &mut dyn Page) {
        let input = ids::field(field);
        let error = ids::field_error(field);
        page.add_class(&input, "error");
        page.set_text(&error, message);
        page.add_class(&error, "show");
        page.set_attr(&input, "aria-invalid", "true");
        page.set_attr(&input, "aria-describedby", error.as_str());
        self.flagged.insert(field);
    }

    /// Full clear: the field validated clean, or the form was reset.
    fn clear_field(&mut self, field: FieldId, page: &mut dyn Page) {
        let input = ids::field(field);
        let error = ids::field_error(field);
        page.remove_class(&input, "error");
        page.set_text(&error, "");
        page.remove_class(&error, "show");
        page.set_attr(&input, "aria-invalid", "false");
        page.remove_attr(&input, "aria-describedby");
        self.flagged.remove(&field);
    }

    /// Optimistic clear on input: hide the error without re-validating.
    /// Only applies to fields currently flagged.
    fn clear_optimistic(&mut self, field: FieldId, page: &mut dyn Page) {
        if !self.flagged.remove(&field) {
            return;
        }
        let input = ids::field(field);
        let error = ids::field_error(field);
        page.remove_class(&input, "error");
        page.remove_class(&error, "show");
        page.set_attr(&input, "aria-invalid", "false");
    }

    fn read_sanitized(&self, page: &dyn Page) -> SanitizedForm {
        let text = |field: FieldId| match self.read_value(field, page) {
            FieldValue::Text(raw) => sanitize(raw.trim()),
            FieldValue::Checkbox(_) => String::new(),
        };
        SanitizedForm {
            name: text(FieldId::Name),
            email: text(FieldId::Email),
            subject: text(FieldId::Subject),
            message: text(FieldId::Message),
            privacy: matches!(
                self.read_value(FieldId::Privacy, page),
                FieldValue::Checkbox(true)
            ),
        }
    }

    fn handle_submit(
        &mut self,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        notifier: &mut Notifier,
        now: Instant,
    ) {
        if self.state == FormState::Submitting {
            return;
        }

        let mut first_invalid = None;
        for field in FieldId::ALL {
            if !self.validate_field(field, page) && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }
        if let Some(field) = first_invalid {
            notifier.show(
                page,
                scheduler,
                Kind::Error,
                "Please fix the errors in the form",
                None,
                now,
            );
            page.focus(&ids::field(field));
            return;
        }

        self.state = FormState::Submitting;
        page.set_attr(&ElementId::from(ids::SUBMIT_BTN), "disabled", "disabled");
        page.set_style(&ElementId::from(ids::SUBMIT_LABEL), "display", "none");
        page.set_style(&ElementId::from(ids::SUBMIT_SPINNER), "display", "flex");

        let form = self.read_sanitized(page);
        self.pending = Some(self.submitter.submit(&form));
        scheduler.schedule_in(now, self.submitter.delay(), Task::SubmitComplete);
    }

    fn complete_submit(
        &mut self,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        notifier: &mut Notifier,
        now: Instant,
    ) {
        self.state = FormState::Idle;
        page.remove_attr(&ElementId::from(ids::SUBMIT_BTN), "disabled");
        page.set_style(&ElementId::from(ids::SUBMIT_LABEL), "display", "inline");
        page.set_style(&ElementId::from(ids::SUBMIT_SPINNER), "display", "none");

        match self.pending.take().unwrap_or(Ok(())) {
            Ok(()) => {
                notifier.show(
                    page,
                    scheduler,
                    Kind::Success,
                    "Message sent! I will get back to you shortly.",
                    Some(SUCCESS_NOTICE),
                    now,
                );
                for field in FieldId::ALL {
                    if field.is_checkbox() {
                        page.set_checked(&ids::field(field), false);
                    } else {
                        page.set_field_value(&ids::field(field), "");
                    }
                    self.clear_field(field, page);
                }
            }
            Err(err) => {
                notifier.show(
                    page,
                    scheduler,
                    Kind::Error,
                    &format!("Sending failed: {err}. Please try again."),
                    None,
                    now,
                );
            }
        }
    }

    pub fn handle_event(
        &mut self,
        event: &crate::ui::Event,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        notifier: &mut Notifier,
        now: Instant,
    ) {
        match event {
            crate::ui::Event::Blur { field } => {
                self.validate_field(*field, page);
            }
            crate::ui::Event::Input { field } => {
                self.clear_optimistic(*field, page);
            }
            crate::ui::Event::Submit => {
                self.handle_submit(page, scheduler, notifier, now);
            }
            _ => {}
        }
    }

    /// Route a scheduler task. Returns `true` when the task belonged here.
    pub fn handle_task(
        &mut self,
        task: &Task,
        page: &mut dyn Page,
        scheduler: &mut Scheduler<Task>,
        notifier: &mut Notifier,
        now: Instant,
    ) -> bool {
        match task {
            Task::SubmitComplete => {
                self.complete_submit(page, scheduler, notifier, now);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Event;
    use crate::test_helpers::RecordingPage;

    fn rules() -> RuleSet {
        RuleSet::from_config(&ContactConfig::default()).unwrap()
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn name_rule_cases() {
        let rules = rules();
        let rule = rules.rule(FieldId::Name);
        assert!(validate_value(FieldId::Name, rule, &text("")).is_err());
        assert!(validate_value(FieldId::Name, rule, &text("A")).is_err());
        assert!(validate_value(FieldId::Name, rule, &text("Jean-Paul")).is_ok());
        assert!(validate_value(FieldId::Name, rule, &text("J3an")).is_err());
        // Unicode letters are fine.
        assert!(validate_value(FieldId::Name, rule, &text("Łucja O'Brien")).is_ok());
    }

    #[test]
    fn email_rule_cases() {
        let rules = rules();
        let rule = rules.rule(FieldId::Email);
        assert!(validate_value(FieldId::Email, rule, &text("a@b.com")).is_ok());
        assert!(validate_value(FieldId::Email, rule, &text("not-an-email")).is_err());
        assert!(validate_value(FieldId::Email, rule, &text("")).is_err());
        assert!(validate_value(FieldId::Email, rule, &text("two words@x.io")).is_err());
    }

    #[test]
    fn message_rule_boundary() {
        let rules = rules();
        let rule = rules.rule(FieldId::Message);
        assert!(validate_value(FieldId::Message, rule, &text("123456789")).is_err());
        assert!(validate_value(FieldId::Message, rule, &text("1234567890")).is_ok());
        // Trimming applies before the length check.
        assert!(validate_value(FieldId::Message, rule, &text("  123456789  ")).is_err());
    }

    #[test]
    fn privacy_requires_checked() {
        let rules = rules();
        let rule = rules.rule(FieldId::Privacy);
        let err = validate_value(FieldId::Privacy, rule, &FieldValue::Checkbox(false));
        assert_eq!(err.unwrap_err(), "You must accept the privacy policy");
        assert!(validate_value(FieldId::Privacy, rule, &FieldValue::Checkbox(true)).is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = rules();
        let rule = rules.rule(FieldId::Name);
        // Empty: the required message, not the pattern message.
        let err = validate_value(FieldId::Name, rule, &text("   ")).unwrap_err();
        assert!(err.contains("required"));
        // Too short: the min-length message, not the pattern message.
        let err = validate_value(FieldId::Name, rule, &text("A")).unwrap_err();
        assert!(err.contains("at least 2"));
    }

    #[test]
    fn pattern_override_from_config() {
        let contact = ContactConfig {
            name_pattern: Some("^[A-Z]+$".to_string()),
            email_pattern: None,
        };
        let rules = RuleSet::from_config(&contact).unwrap();
        let rule = rules.rule(FieldId::Name);
        assert!(validate_value(FieldId::Name, rule, &text("ABC")).is_ok());
        assert!(validate_value(FieldId::Name, rule, &text("abc")).is_err());
    }

    #[test]
    fn bad_pattern_override_fails_construction() {
        let contact = ContactConfig {
            name_pattern: Some("([unclosed".to_string()),
            email_pattern: None,
        };
        assert!(RuleSet::from_config(&contact).is_err());
    }

    #[test]
    fn sanitize_escapes_markup() {
        assert_eq!(
            sanitize("<b>hi</b> & bye"),
            "&lt;b&gt;hi&lt;/b&gt; &amp; bye"
        );
        assert_eq!(sanitize("plain"), "plain");
    }

    // =========================================================================
    // Manager flow tests
    // =========================================================================

    struct Harness {
        form: ContactFormManager,
        page: RecordingPage,
        scheduler: Scheduler<Task>,
        notifier: Notifier,
        t0: Instant,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                form: ContactFormManager::new(
                    &ContactConfig::default(),
                    &TimingConfig::default(),
                )
                .unwrap(),
                page: RecordingPage::with_form(),
                scheduler: Scheduler::new(),
                notifier: Notifier::new(Duration::from_millis(5000)),
                t0: Instant::now(),
            }
        }

        fn fill_valid(&mut self) {
            self.page.set_field("name", "Jordan Reyes");
            self.page.set_field("email", "jordan@example.org");
            self.page.set_field("subject", "Project collaboration");
            self.page.set_field("message", "I would like to work with you.");
            self.page.set_checkbox("privacy", true);
        }

        fn dispatch(&mut self, event: Event) {
            let now = self.t0;
            self.form.handle_event(
                &event,
                &mut self.page,
                &mut self.scheduler,
                &mut self.notifier,
                now,
            );
        }

        fn advance(&mut self, at: Instant) {
            for task in self.scheduler.due(at) {
                let handled = self.form.handle_task(
                    &task,
                    &mut self.page,
                    &mut self.scheduler,
                    &mut self.notifier,
                    at,
                );
                if !handled {
                    self.notifier.handle_task(
                        &task,
                        &mut self.page,
                        &mut self.scheduler,
                        at,
                    );
                }
            }
        }
    }

    #[test]
    fn blur_flags_invalid_field_with_aria() {
        let mut harness = Harness::new();
        harness.page.set_field("email", "nope");
        harness.dispatch(Event::Blur {
            field: FieldId::Email,
        });

        let email = ids::field(FieldId::Email);
        let error = ids::field_error(FieldId::Email);
        assert!(harness.page.has_class(&email, "error"));
        assert!(harness.page.has_class(&error, "show"));
        assert_eq!(
            harness.page.attr(&email, "aria-invalid").as_deref(),
            Some("true")
        );
        assert_eq!(
            harness.page.attr(&email, "aria-describedby").as_deref(),
            Some("email-error")
        );
        assert_eq!(
            harness.page.text_of(&error),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn input_clears_shown_error_without_revalidating() {
        let mut harness = Harness::new();
        harness.page.set_field("email", "nope");
        harness.dispatch(Event::Blur {
            field: FieldId::Email,
        });
        // Still invalid, but typing clears the flag optimistically.
        harness.dispatch(Event::Input {
            field: FieldId::Email,
        });

        let email = ids::field(FieldId::Email);
        let error = ids::field_error(FieldId::Email);
        assert!(!harness.page.has_class(&email, "error"));
        assert!(!harness.page.has_class(&error, "show"));
        assert_eq!(
            harness.page.attr(&email, "aria-invalid").as_deref(),
            Some("false")
        );
    }

    #[test]
    fn input_on_untouched_field_is_a_no_op() {
        let mut harness = Harness::new();
        harness.dispatch(Event::Input {
            field: FieldId::Name,
        });
        let name = ids::field(FieldId::Name);
        assert!(harness.page.attr(&name, "aria-invalid").is_none());
    }

    #[test]
    fn invalid_submit_focuses_first_invalid_and_never_submits() {
        let mut harness = Harness::new();
        harness.fill_valid();
        harness.page.set_field("name", "");
        harness.page.set_field("email", "broken");
        harness.dispatch(Event::Submit);

        assert!(!harness.form.is_submitting());
        // Focus lands on the first invalid field in order: name.
        assert_eq!(harness.page.focused.as_deref(), Some("name"));
        // One error notification is up.
        let html = harness.page.html_of(&ElementId::from(ids::NOTIFICATION));
        assert!(html.contains("Please fix the errors in the form"));
        // The submit control was never disabled.
        let btn = ElementId::from(ids::SUBMIT_BTN);
        assert!(harness.page.attr(&btn, "disabled").is_none());
    }

    #[test]
    fn valid_submit_transitions_through_submitting_to_success() {
        let mut harness = Harness::new();
        harness.fill_valid();
        harness.dispatch(Event::Submit);

        let btn = ElementId::from(ids::SUBMIT_BTN);
        assert!(harness.form.is_submitting());
        assert_eq!(harness.page.attr(&btn, "disabled").as_deref(), Some("disabled"));
        assert_eq!(
            harness.page.style_of(&ElementId::from(ids::SUBMIT_SPINNER), "display"),
            Some("flex".to_string())
        );

        // The simulated latency elapses.
        let done = harness.t0 + Duration::from_millis(2000);
        harness.advance(done);

        assert!(!harness.form.is_submitting());
        assert!(harness.page.attr(&btn, "disabled").is_none());
        // Fields were reset to untouched.
        assert_eq!(harness.page.field_value(&ids::field(FieldId::Name)), Some(String::new()));
        assert_eq!(harness.page.checked(&ids::field(FieldId::Privacy)), Some(false));
        // Exactly one success notification is mounted.
        let html = harness.page.html_of(&ElementId::from(ids::NOTIFICATION));
        assert!(html.contains("Message sent!"));
    }

    #[test]
    fn submit_is_ignored_while_submitting() {
        let mut harness = Harness::new();
        harness.fill_valid();
        harness.dispatch(Event::Submit);
        assert_eq!(harness.scheduler.len(), 1);
        harness.dispatch(Event::Submit);
        // No second completion was scheduled.
        assert_eq!(harness.scheduler.len(), 1);
    }

    #[test]
    fn submitter_receives_sanitized_values() {
        struct Capture(std::rc::Rc<std::cell::RefCell<Option<SanitizedForm>>>);
        impl Submitter for Capture {
            fn submit(&mut self, form: &SanitizedForm) -> Result<(), SubmitError> {
                *self.0.borrow_mut() = Some(form.clone());
                Ok(())
            }
        }

        let mut harness = Harness::new();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
        harness.form.set_submitter(Box::new(Capture(seen.clone())));

        harness.fill_valid();
        harness.page.set_field("message", "Hello <script>alert(1)</script> there");
        harness.dispatch(Event::Submit);

        let form = seen.borrow().clone().expect("submitter was called");
        assert_eq!(form.name, "Jordan Reyes");
        assert!(form.message.contains("&lt;script&gt;"));
        assert!(!form.message.contains("<script>"));
        assert!(form.privacy);
    }

    #[test]
    fn failed_submission_keeps_field_values() {
        struct Failing;
        impl Submitter for Failing {
            fn submit(&mut self, _form: &SanitizedForm) -> Result<(), SubmitError> {
                Err(SubmitError::Failed("boom".to_string()))
            }
        }

        let mut harness = Harness::new();
        harness.form.set_submitter(Box::new(Failing));
        harness.fill_valid();
        harness.dispatch(Event::Submit);
        harness.advance(harness.t0);

        assert!(!harness.form.is_submitting());
        // Values survive a failed send.
        assert_eq!(
            harness.page.field_value(&ids::field(FieldId::Name)),
            Some("Jordan Reyes".to_string())
        );
        let html = harness.page.html_of(&ElementId::from(ids::NOTIFICATION));
        assert!(html.contains("Sending failed"));
    }
}
