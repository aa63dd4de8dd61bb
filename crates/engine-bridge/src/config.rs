use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::BridgeError;

/// Environment variable naming the engine installation directory.
pub const ENGINE_PATH_VAR: &str = "MESH_ENGINE_PATH";

/// How dispatched commands are echoed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EchoMode {
    /// Commands run without appearing in the engine's own log.
    Silent,
    /// Commands are echoed to the engine's log before running.
    Verbose,
}

/// Engine session configuration, passed explicitly to [`Session`].
/// There is no process-global state in this layer.
///
/// [`Session`]: crate::session::Session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Root of the engine installation. Locating and loading the engine
    /// from it is the embedder's job.
    pub install_dir: PathBuf,
    /// Echo mode for every command dispatched under this config.
    pub echo: EchoMode,
}

impl EngineConfig {
    /// Config rooted at `install_dir`, silent by default.
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            echo: EchoMode::Silent,
        }
    }

    /// Switch command echoing on.
    pub fn verbose(mut self) -> Self {
        self.echo = EchoMode::Verbose;
        self
    }

    /// Read the engine location from `$MESH_ENGINE_PATH`.
    pub fn from_env() -> Result<Self, BridgeError> {
        let dir = env::var_os(ENGINE_PATH_VAR).ok_or_else(|| BridgeError::Configuration {
            reason: format!("${} not set", ENGINE_PATH_VAR),
        })?;
        Ok(Self::new(PathBuf::from(dir)))
    }
}
