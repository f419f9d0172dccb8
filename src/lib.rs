//! # gitbuddy
//!
//! Conventional commit message validation and changelog generation.
//!
//! ## Features
//!
//! - Validates `type(scope): description` messages against configurable
//!   commit types and a minimum description length
//! - Re-validates live input and gates submission through the
//!   [`reactive`] validator
//! - Regenerates a grouped `CHANGELOG.md` from recent history
//!
//! ## Quick Start
//!
//! ```rust
//! use gitbuddy::message::Classifier;
//!
//! let classifier = Classifier::default();
//! assert!(classifier.classify("fix(auth): resolved login issue").is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod changelog;
pub mod cli;
pub mod config;
pub mod data;
pub mod git;
pub mod message;
pub mod reactive;

pub use crate::cli::Cli;

/// The current version of gitbuddy.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
