//! Helper functions: error type and canned mock fixtures.

use engine_bridge::{MockEngine, SeededBrick};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("empty journal: {context}")]
    EmptyJournal { context: String },

    #[error("operation error: {0}")]
    Op(#[from] command_ops::OpError),

    #[error("engine error: {0}")]
    Bridge(#[from] engine_bridge::BridgeError),

    #[error("report error: {reason}")]
    Report { reason: String },
}

// ── Fixtures ────────────────────────────────────────────────────────────────

/// A mock engine with one seeded, meshed brick.
pub struct BrickFixture {
    pub engine: MockEngine,
    pub brick: SeededBrick,
}

/// Fresh mock engine holding one brick body with full sub-topology.
pub fn brick_fixture() -> BrickFixture {
    let mut engine = MockEngine::new();
    let brick = engine.seed_brick();
    BrickFixture { engine, brick }
}

/// The most recent command string, or an error naming the caller's
/// context when nothing was dispatched yet.
pub fn last_command<'a>(engine: &'a MockEngine, context: &str) -> Result<&'a str, HarnessError> {
    engine
        .journal()
        .last()
        .map(|entry| entry.command.as_str())
        .ok_or_else(|| HarnessError::EmptyJournal {
            context: context.to_string(),
        })
}
