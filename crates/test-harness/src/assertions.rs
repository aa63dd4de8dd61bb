//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual plus the full command
//! journal for maximum debuggability.

use engine_bridge::{EchoMode, MockEngine};

use crate::helpers::HarnessError;

fn journal_dump(engine: &MockEngine) -> String {
    if engine.journal().is_empty() {
        return "  (journal empty)".to_string();
    }
    engine
        .journal()
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("  [{}] {:?} {}", index, entry.echo, entry.command))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert the journal contains exactly these command strings, in order.
pub fn assert_journal_eq(
    engine: &MockEngine,
    expected: &[&str],
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = engine.commands();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected journal {:?}, got:\n{}",
                ctx,
                expected,
                journal_dump(engine),
            ),
        })
    }
}

/// Assert the most recent command equals `expected`.
pub fn assert_last_command(
    engine: &MockEngine,
    expected: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    let last = crate::helpers::last_command(engine, ctx)?;
    if last == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected last command {:?}, got {:?}; journal:\n{}",
                ctx,
                expected,
                last,
                journal_dump(engine),
            ),
        })
    }
}

/// Assert every journal entry was dispatched under `echo`.
pub fn assert_dispatch_mode(
    engine: &MockEngine,
    echo: EchoMode,
    ctx: &str,
) -> Result<(), HarnessError> {
    match engine.journal().iter().find(|entry| entry.echo != echo) {
        None => Ok(()),
        Some(entry) => Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected every command under {:?}, found {:?} {:?}; journal:\n{}",
                ctx,
                echo,
                entry.echo,
                entry.command,
                journal_dump(engine),
            ),
        }),
    }
}

/// Assert the engine counted no errors.
pub fn assert_no_engine_errors(engine: &MockEngine, ctx: &str) -> Result<(), HarnessError> {
    use engine_bridge::ScriptEngine;
    let count = engine.error_count();
    if count == 0 {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] engine counted {} errors; journal:\n{}",
                ctx,
                count,
                journal_dump(engine),
            ),
        })
    }
}
