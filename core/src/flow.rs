//! Generic lifecycle of a user-triggered form submission.
//!
//! # Design
//! Contact, job application and resume upload all share one state machine:
//!
//! ```text
//! Idle | Failed --begin--> Submitting --finish(Ok)--> Idle
//!                                     --finish(Err)-> Failed
//! ```
//!
//! `begin` is guarded by the form's required-field check and by the
//! in-flight check. A rejected `begin` changes no state and never reaches
//! the send step. `finish(Ok)` resets the form to `F::default()`;
//! `finish(Err)` keeps it so the user can retry without re-typing.
//!
//! Hosts that drive their own I/O call `begin` and `finish` around it;
//! everyone else passes the send step to `submit`.

use std::fmt::Display;

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Failed,
}

impl FlowState {
    pub fn accepts_submit(self) -> bool {
        self != FlowState::Submitting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing toast text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A form the flow can validate, reset and describe.
pub trait FormFields: Default {
    /// Names of required fields that are blank. Empty means submittable.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn validation_notice(&self) -> Notice {
        Notice::error("Error", "Please fill in all required fields.")
    }

    fn success_notice(&self) -> Notice;

    fn failure_notice(&self) -> Notice;
}

/// Why `begin` refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A submission is already in flight.
    InFlight,
    /// Required fields are blank.
    Invalid { missing: Vec<&'static str> },
    /// `finish` was called without a matching `begin`.
    NotStarted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<R> {
    Rejected(Rejection),
    Succeeded(R),
    /// The send step failed; carries its error message.
    Failed(String),
}

impl<R> SubmitOutcome<R> {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionFlow<F> {
    form: F,
    state: FlowState,
    notice: Option<Notice>,
}

impl<F: FormFields> SubmissionFlow<F> {
    pub fn new() -> Self {
        Self::with_form(F::default())
    }

    pub fn with_form(form: F) -> Self {
        Self {
            form,
            state: FlowState::Idle,
            notice: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss the current notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn begin(&mut self) -> Result<(), Rejection> {
        if !self.state.accepts_submit() {
            debug!("submission already in flight");
            return Err(Rejection::InFlight);
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "submission blocked by required fields");
            self.notice = Some(self.form.validation_notice());
            return Err(Rejection::Invalid { missing });
        }

        self.state = FlowState::Submitting;
        self.notice = None;
        Ok(())
    }

    pub fn finish<R, E: Display>(&mut self, result: Result<R, E>) -> SubmitOutcome<R> {
        if self.state != FlowState::Submitting {
            return SubmitOutcome::Rejected(Rejection::NotStarted);
        }

        match result {
            Ok(value) => {
                self.form = F::default();
                self.state = FlowState::Idle;
                self.notice = Some(self.form.success_notice());
                SubmitOutcome::Succeeded(value)
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                self.state = FlowState::Failed;
                self.notice = Some(self.form.failure_notice());
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    /// Validate, run `send` against the current form, and settle the state.
    pub fn submit<R, E, S>(&mut self, send: S) -> SubmitOutcome<R>
    where
        E: Display,
        S: FnOnce(&F) -> Result<R, E>,
    {
        if let Err(rejection) = self.begin() {
            return SubmitOutcome::Rejected(rejection);
        }
        let result = send(&self.form);
        self.finish(result)
    }
}

impl<F: FormFields> Default for SubmissionFlow<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Note {
        text: String,
    }

    impl FormFields for Note {
        fn missing_fields(&self) -> Vec<&'static str> {
            if self.text.trim().is_empty() {
                vec!["text"]
            } else {
                Vec::new()
            }
        }

        fn success_notice(&self) -> Notice {
            Notice::success("Saved", "Your note was saved.")
        }

        fn failure_notice(&self) -> Notice {
            Notice::error("Error", "Could not save.")
        }
    }

    fn filled() -> SubmissionFlow<Note> {
        SubmissionFlow::with_form(Note {
            text: "hello".to_string(),
        })
    }

    #[test]
    fn starts_idle_without_notice() {
        let flow: SubmissionFlow<Note> = SubmissionFlow::new();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.notice().is_none());
    }

    #[test]
    fn blank_form_never_calls_send() {
        let mut flow: SubmissionFlow<Note> = SubmissionFlow::new();
        flow.form_mut().text = "   ".to_string();
        let mut called = false;
        let outcome = flow.submit(|_| {
            called = true;
            Ok::<_, String>(())
        });
        assert!(!called);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Rejection::Invalid {
                missing: vec!["text"]
            })
        );
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Error);
        assert_eq!(flow.form().text, "   ");
    }

    #[test]
    fn success_resets_form() {
        let mut flow = filled();
        let outcome = flow.submit(|form| Ok::<_, String>(form.text.len()));
        assert_eq!(outcome, SubmitOutcome::Succeeded(5));
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.form(), &Note::default());
        assert_eq!(flow.notice().unwrap().title, "Saved");
    }

    #[test]
    fn failure_keeps_form() {
        let mut flow = filled();
        let outcome = flow.submit(|_| Err::<(), _>("offline"));
        assert_eq!(outcome, SubmitOutcome::Failed("offline".to_string()));
        assert_eq!(flow.state(), FlowState::Failed);
        assert_eq!(flow.form().text, "hello");
        assert_eq!(flow.notice().unwrap().description, "Could not save.");
    }

    #[test]
    fn failed_flow_can_resubmit() {
        let mut flow = filled();
        flow.submit(|_| Err::<(), _>("offline"));
        let outcome = flow.submit(|_| Ok::<_, String>(()));
        assert!(outcome.is_success());
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn blank_resubmit_after_success_stays_idle() {
        let mut flow = filled();
        assert!(flow.submit(|_| Ok::<_, String>(())).is_success());
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Success);

        let outcome = flow.submit(|_| Ok::<_, String>(()));
        assert!(matches!(outcome, SubmitOutcome::Rejected(Rejection::Invalid { .. })));
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn second_begin_while_in_flight_is_rejected() {
        let mut flow = filled();
        flow.begin().unwrap();
        assert!(flow.is_submitting());
        assert_eq!(flow.begin(), Err(Rejection::InFlight));
        let outcome = flow.submit(|_| Ok::<_, String>(()));
        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::InFlight));

        assert!(flow.finish(Ok::<_, String>(())).is_success());
        assert!(!flow.is_submitting());
    }

    #[test]
    fn begin_clears_previous_notice() {
        let mut flow = filled();
        flow.submit(|_| Err::<(), _>("offline"));
        assert!(flow.notice().is_some());
        flow.begin().unwrap();
        assert!(flow.notice().is_none());
    }

    #[test]
    fn finish_without_begin_is_rejected() {
        let mut flow = filled();
        let outcome = flow.finish(Ok::<_, String>(()));
        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::NotStarted));
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.form().text, "hello");
    }

    #[test]
    fn take_notice_dismisses() {
        let mut flow = filled();
        flow.submit(|_| Ok::<_, String>(()));
        assert!(flow.take_notice().is_some());
        assert!(flow.notice().is_none());
    }
}
