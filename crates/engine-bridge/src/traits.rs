use scribe_types::Category;

use crate::types::EntityHandle;

/// Command-execution boundary of the external meshing engine.
/// Implemented by real engine bindings and by MockEngine (deterministic
/// test double). The engine is a blocking, single-threaded, in-process
/// collaborator; callers must serialize access to one implementation.
pub trait ScriptEngine {
    /// Forward a command string, echoing it to the engine's own log.
    fn cmd(&mut self, command: &str);

    /// Forward a command string without echoing.
    fn silent_cmd(&mut self, command: &str);

    /// Running count of engine-reported scripting errors since startup.
    /// Monotonically non-decreasing.
    fn error_count(&self) -> u64;

    /// All sub-entities of the given category under `entity`, in engine
    /// order. An entity with no such children yields an empty list.
    fn sub_entities(&self, entity: &EntityHandle, category: Category) -> Vec<EntityHandle>;
}
