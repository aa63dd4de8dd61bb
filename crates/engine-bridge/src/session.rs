use tracing::{debug, warn};

use crate::config::{EchoMode, EngineConfig};
use crate::traits::ScriptEngine;
use crate::types::{BridgeError, Command};

/// An open scripting session with the external engine.
///
/// Borrows the engine binding for its lifetime and carries the echo mode
/// as explicit session state, so several isolated sessions can coexist
/// against different engine instances.
pub struct Session<'a> {
    engine: &'a mut dyn ScriptEngine,
    echo: EchoMode,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a mut dyn ScriptEngine, echo: EchoMode) -> Self {
        Self { engine, echo }
    }

    pub fn from_config(engine: &'a mut dyn ScriptEngine, config: &EngineConfig) -> Self {
        Self::new(engine, config.echo)
    }

    pub fn echo(&self) -> EchoMode {
        self.echo
    }

    /// Switch echo mode for subsequent commands.
    pub fn set_echo(&mut self, echo: EchoMode) {
        self.echo = echo;
    }

    /// Read-only access to the engine, for entity queries.
    pub fn engine(&self) -> &dyn ScriptEngine {
        &*self.engine
    }

    /// Dispatch one command and check the engine error counter.
    ///
    /// The counter is sampled immediately before and after the forwarded
    /// call; the dispatch failed iff the count increased, in which case
    /// the error carries the rendered command string. Single attempt,
    /// synchronous, no retry.
    pub fn run(&mut self, command: Command) -> Result<(), BridgeError> {
        let text = command.into_string();
        let before = self.engine.error_count();
        debug!(command = %text, echo = ?self.echo, "dispatching engine command");
        match self.echo {
            EchoMode::Verbose => self.engine.cmd(&text),
            EchoMode::Silent => self.engine.silent_cmd(&text),
        }
        let after = self.engine.error_count();
        if after > before {
            warn!(command = %text, new_errors = after - before, "engine reported errors");
            return Err(BridgeError::CommandFailed { command: text });
        }
        Ok(())
    }
}
