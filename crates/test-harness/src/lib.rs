//! Test harness for scripting the engine boundary.
//!
//! Provides programmatic tools for driving multi-step block workflows
//! against the mock engine, verifying the command journal at every step,
//! and generating diagnostic output.
//!
//! # Key Components
//!
//! - [`helpers`] — Error type and canned mock fixtures
//! - [`assertions`] — Rich journal assertions with diagnostics
//! - [`report`] — Structured journal descriptions, text and JSON

pub mod assertions;
pub mod helpers;
pub mod report;

pub use helpers::{BrickFixture, HarnessError};
pub use report::JournalReport;
