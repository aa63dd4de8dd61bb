use scribe_types::Category;

/// Errors from argument marshalling and block operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("engine error: {0}")]
    Bridge(#[from] engine_bridge::BridgeError),

    #[error("expected {expected} entity, found {found}")]
    CategoryMismatch { expected: Category, found: Category },

    #[error("entity list is empty and no category was given")]
    EmptyList,
}
