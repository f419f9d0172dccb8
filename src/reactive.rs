//! Reactive commit message validation.
//!
//! A [`ReactiveValidator`] sits between an editable text region and the action
//! that submits it. Every change notification re-runs the [`Classifier`]
//! against the current text, updates a warning, and enables or disables the
//! submit control. A direct submit attempt is re-checked and vetoed while the
//! text is invalid.
//!
//! The environment is reached only through three collaborators:
//! [`TextSource`], [`SubmitControl`] and [`Feedback`]. Drivers (a git hook, an
//! interactive terminal session, tests) implement them and forward change and
//! submit events.

use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::message::{normalize_message, Classifier, ParsedMessage, ValidationError};

/// Message raised when a submit attempt is vetoed.
pub const BLOCKED_SUBMIT_ALERT: &str = "Invalid commit message! Please fix before committing.";

/// Read access to the text being edited.
pub trait TextSource {
    /// Returns the current raw text, or `None` while the region does not exist.
    fn current_text(&self) -> Option<String>;
}

/// The action that submits the text.
pub trait SubmitControl {
    /// Returns `true` if the control currently exists.
    fn is_present(&self) -> bool;

    /// Enables or disables the control.
    fn set_enabled(&mut self, enabled: bool);
}

/// User-facing messages next to the text region.
pub trait Feedback {
    /// Shows `message` in the single warning slot, replacing any previous one.
    fn show_warning(&mut self, message: &str);

    /// Removes the warning slot.
    fn clear_warning(&mut self);

    /// Informs the user that a submit attempt was blocked.
    fn alert(&mut self, message: &str);
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// The text is valid; submission may go ahead.
    Proceed,
    /// The text is invalid; submission was suppressed.
    Blocked,
}

/// How long to wait for the text region to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay between attempts.
    pub interval: Duration,
    /// Number of attempts before giving up (at least one is always made).
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 30,
        }
    }
}

impl RetryPolicy {
    /// A policy that checks once and does not wait.
    pub fn immediate() -> Self {
        Self {
            interval: Duration::ZERO,
            max_attempts: 1,
        }
    }
}

/// Errors raised while attaching to a text source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The text region never appeared.
    #[error("Text source did not become available after {attempts} attempt(s)")]
    SourceUnavailable {
        /// Attempts made.
        attempts: u32,
    },
}

/// Re-validates text on every change and gates submission.
pub struct ReactiveValidator<S, C, F> {
    classifier: Classifier,
    source: S,
    control: C,
    feedback: F,
    touched: bool,
    last_result: Option<Result<ParsedMessage, ValidationError>>,
}

impl<S, C, F> ReactiveValidator<S, C, F>
where
    S: TextSource,
    C: SubmitControl,
    F: Feedback,
{
    /// Creates a validator over the given collaborators.
    pub fn new(classifier: Classifier, source: S, control: C, feedback: F) -> Self {
        Self {
            classifier,
            source,
            control,
            feedback,
            touched: false,
            last_result: None,
        }
    }

    /// Waits for the text region and runs the initial evaluation.
    pub fn attach(&mut self, policy: &RetryPolicy) -> Result<(), AttachError> {
        let attempts = policy.max_attempts.max(1);

        for attempt in 1..=attempts {
            if self.source.current_text().is_some() {
                tracing::info!(attempt, "Text source available, validating");
                self.evaluate();
                return Ok(());
            }

            tracing::debug!(attempt, "Text source not available yet, retrying");
            if attempt < attempts && !policy.interval.is_zero() {
                thread::sleep(policy.interval);
            }
        }

        Err(AttachError::SourceUnavailable { attempts })
    }

    /// Handles a content change notification.
    pub fn on_change(&mut self) -> bool {
        self.touched = true;
        self.evaluate()
    }

    /// Handles a direct submit attempt.
    pub fn on_submit(&mut self) -> SubmitDecision {
        self.touched = true;
        if self.evaluate() {
            tracing::info!("Submit allowed");
            SubmitDecision::Proceed
        } else {
            tracing::warn!("Blocked invalid commit");
            self.feedback.alert(BLOCKED_SUBMIT_ALERT);
            SubmitDecision::Blocked
        }
    }

    /// Returns the most recent classification, if any text has been evaluated.
    ///
    /// Empty untouched input is not classified and leaves this unchanged.
    pub fn last_result(&self) -> Option<&Result<ParsedMessage, ValidationError>> {
        self.last_result.as_ref()
    }

    /// Returns `true` once a change or submit has been observed.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Borrows the submit control.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Borrows the feedback surface.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Consumes the validator, returning its collaborators.
    pub fn into_parts(self) -> (S, C, F) {
        (self.source, self.control, self.feedback)
    }

    /// Classifies the current text and updates the warning and control.
    fn evaluate(&mut self) -> bool {
        let raw = self.source.current_text().unwrap_or_default();
        let message = normalize_message(&raw);

        if message.is_empty() && !self.touched {
            self.feedback.clear_warning();
            self.set_control_enabled(true);
            return true;
        }

        let result = self.classifier.classify(&message);
        let valid = match &result {
            Ok(parsed) => {
                tracing::debug!(commit_type = %parsed.commit_type, scope = %parsed.scope, "Message valid");
                self.feedback.clear_warning();
                self.set_control_enabled(true);
                true
            }
            Err(err) => {
                tracing::debug!(reason = err.code(), "Message invalid");
                self.feedback.show_warning(&format!("❌ {err}"));
                self.set_control_enabled(false);
                false
            }
        };

        self.last_result = Some(result);
        valid
    }

    fn set_control_enabled(&mut self, enabled: bool) {
        if self.control.is_present() {
            self.control.set_enabled(enabled);
        } else {
            tracing::debug!("Submit control not present");
        }
    }
}
