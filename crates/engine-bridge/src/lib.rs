pub mod config;
pub mod mock_engine;
pub mod session;
pub mod traits;
pub mod types;

pub use config::{EchoMode, EngineConfig};
pub use mock_engine::{JournalEntry, MockEngine, SeededBrick};
pub use session::Session;
pub use traits::*;
pub use types::*;
