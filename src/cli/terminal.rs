//! Terminal-backed collaborators for the reactive validator.

use std::io::Write;

use crate::reactive::{Feedback, SubmitControl};

/// Writes warnings and alerts to a terminal stream.
///
/// Holds a single warning slot: a warning is written only when it differs from
/// the one already shown.
pub(crate) struct TerminalFeedback<W: Write> {
    out: W,
    current: Option<String>,
}

impl<W: Write> TerminalFeedback<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, current: None }
    }

    #[cfg(test)]
    pub(crate) fn current_warning(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write feedback: {err}");
        }
    }
}

impl<W: Write> Feedback for TerminalFeedback<W> {
    fn show_warning(&mut self, message: &str) {
        if self.current.as_deref() == Some(message) {
            return;
        }
        self.current = Some(message.to_string());
        self.write_line(message);
    }

    fn clear_warning(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("Warning cleared");
        }
    }

    fn alert(&mut self, message: &str) {
        self.write_line(&format!("🚫 {message}"));
    }
}

/// Submit gate for terminal drivers; the action is always present.
#[derive(Debug, Default)]
pub(crate) struct SubmitGate {
    enabled: bool,
}

#[cfg(test)]
impl SubmitGate {
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl SubmitControl for SubmitGate {
    fn is_present(&self) -> bool {
        true
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::info!(
                "{}",
                if enabled {
                    "✅ Commit enabled"
                } else {
                    "❌ Commit disabled"
                }
            );
        }
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_warning_is_written_once() {
        let mut feedback = TerminalFeedback::new(Vec::new());
        feedback.show_warning("❌ bad");
        feedback.show_warning("❌ bad");
        feedback.clear_warning();
        feedback.show_warning("❌ bad");

        let out = String::from_utf8(feedback.into_inner()).unwrap();
        assert_eq!(out, "❌ bad\n❌ bad\n");
    }

    #[test]
    fn alerts_are_always_written() {
        let mut feedback = TerminalFeedback::new(Vec::new());
        feedback.alert("blocked");
        feedback.alert("blocked");
        assert_eq!(feedback.current_warning(), None);

        let out = String::from_utf8(feedback.into_inner()).unwrap();
        assert_eq!(out, "🚫 blocked\n🚫 blocked\n");
    }

    #[test]
    fn gate_tracks_state() {
        let mut gate = SubmitGate::default();
        assert!(!gate.is_enabled());
        gate.set_enabled(true);
        assert!(gate.is_enabled());
    }
}
