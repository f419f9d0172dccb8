//! Compose command: writes a commit message with live validation.
//!
//! Every line typed is a content change and is validated immediately. An
//! empty line (or end of input) is a submit attempt: a valid message is
//! printed to stdout, an invalid one is blocked and editing continues.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use super::terminal::{SubmitGate, TerminalFeedback};
use crate::config::SettingsStore;
use crate::message::Classifier;
use crate::reactive::{ReactiveValidator, RetryPolicy, SubmitDecision, TextSource};

/// Line that discards everything typed so far.
const CLEAR_COMMAND: &str = ":clear";

/// Compose command options.
#[derive(Parser)]
pub struct ComposeCommand {}

/// In-memory editor buffer shared with the validator.
#[derive(Clone, Default)]
pub struct EditorBuffer {
    text: Rc<RefCell<String>>,
}

impl EditorBuffer {
    fn append_line(&self, line: &str) {
        let mut text = self.text.borrow_mut();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
    }

    fn clear(&self) {
        self.text.borrow_mut().clear();
    }

    fn contents(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextSource for EditorBuffer {
    fn current_text(&self) -> Option<String> {
        Some(self.contents())
    }
}

/// How a compose session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// A valid message was submitted.
    Submitted(String),
    /// Input ended while the message was invalid.
    Abandoned,
}

impl ComposeCommand {
    /// Runs an interactive session on stdin.
    pub fn execute(self, store: &SettingsStore) -> Result<()> {
        let config = store.load()?;
        eprintln!(
            "✏️  Type your commit message. Empty line submits, '{CLEAR_COMMAND}' starts over."
        );

        let stdin = std::io::stdin();
        let outcome = run_session(
            Classifier::new(&config),
            stdin.lock(),
            std::io::stderr(),
        )?;

        match outcome {
            ComposeOutcome::Submitted(message) => {
                println!("{message}");
                Ok(())
            }
            ComposeOutcome::Abandoned => std::process::exit(1),
        }
    }
}

/// Drives the validator from line-based input, writing feedback to `feedback`.
pub fn run_session<R: BufRead, W: Write>(
    classifier: Classifier,
    input: R,
    feedback: W,
) -> Result<ComposeOutcome> {
    let buffer = EditorBuffer::default();
    let mut validator = ReactiveValidator::new(
        classifier,
        buffer.clone(),
        SubmitGate::default(),
        TerminalFeedback::new(feedback),
    );
    validator
        .attach(&RetryPolicy::immediate())
        .context("Editor buffer unavailable")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim_end();

        if trimmed.is_empty() {
            if validator.on_submit() == SubmitDecision::Proceed {
                return Ok(ComposeOutcome::Submitted(buffer.contents()));
            }
            continue;
        }

        if trimmed == CLEAR_COMMAND {
            buffer.clear();
        } else {
            buffer.append_line(trimmed);
        }
        validator.on_change();
    }

    if validator.on_submit() == SubmitDecision::Proceed {
        Ok(ComposeOutcome::Submitted(buffer.contents()))
    } else {
        Ok(ComposeOutcome::Abandoned)
    }
}
