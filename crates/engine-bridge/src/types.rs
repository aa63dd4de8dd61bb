use serde::{Deserialize, Serialize};

use scribe_types::{Category, EntityId};

/// Capability tags the engine binding reports for one entity.
///
/// A closed stand-in for the binding's runtime class hierarchy: the
/// `GEOMETRIC` base tag marks anything the engine considers geometry,
/// and one category tag per topological kind sits on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities(u8);

impl Capabilities {
    const GEOMETRIC: u8 = 1 << 7;

    /// No capabilities at all. Classification rejects such handles.
    pub const NONE: Capabilities = Capabilities(0);

    /// The base geometric capability with no category tag.
    pub const BASE: Capabilities = Capabilities(Self::GEOMETRIC);

    fn bit(category: Category) -> u8 {
        match category {
            Category::Body => 1 << 0,
            Category::Volume => 1 << 1,
            Category::Surface => 1 << 2,
            Category::Curve => 1 << 3,
            Category::Vertex => 1 << 4,
        }
    }

    /// Geometric capability tagged with one category.
    pub fn of(category: Category) -> Self {
        Capabilities(Self::GEOMETRIC | Self::bit(category))
    }

    /// Add a category tag to this set.
    pub fn with(self, category: Category) -> Self {
        Capabilities(self.0 | Self::GEOMETRIC | Self::bit(category))
    }

    /// Whether the entity carries the given category tag.
    pub fn reports(self, category: Category) -> bool {
        self.0 & Self::bit(category) != 0
    }

    /// Whether the entity is geometry at all.
    pub fn is_geometric(self) -> bool {
        self.0 & Self::GEOMETRIC != 0
    }
}

/// Opaque reference to an entity owned by the external engine.
///
/// This layer never creates or destroys engine entities; it only reads
/// the id and the capability tags the binding attached to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityHandle {
    id: EntityId,
    caps: Capabilities,
}

impl EntityHandle {
    pub fn new(id: EntityId, caps: Capabilities) -> Self {
        Self { id, caps }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Resolve the handle's category from its capability tags.
    ///
    /// Tags are tested in [`Category::CLASSIFY_ORDER`]; a handle carrying
    /// several tags resolves to the first match. Fails with
    /// [`BridgeError::NotGeometric`] for non-geometry handles and
    /// [`BridgeError::UnknownCategory`] for geometry the binding did not
    /// tag with any known category.
    pub fn classify(&self) -> Result<Category, BridgeError> {
        if !self.caps.is_geometric() {
            return Err(BridgeError::NotGeometric { id: self.id });
        }
        for &category in &Category::CLASSIFY_ORDER {
            if self.caps.reports(category) {
                return Ok(category);
            }
        }
        Err(BridgeError::UnknownCategory { id: self.id })
    }
}

/// A single engine command: an ordered token sequence rendered to the
/// exact wire string. Built once, sent once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    text: String,
}

impl Command {
    /// Start a command with its leading verb.
    pub fn new(verb: &str) -> Self {
        Self {
            text: verb.to_string(),
        }
    }

    /// Append one space-separated token.
    pub fn arg(mut self, token: impl std::fmt::Display) -> Self {
        self.text.push(' ');
        self.text.push_str(&token.to_string());
        self
    }

    /// Append a pre-rendered fragment verbatim. Fragments produced by the
    /// marshaller carry their own leading space.
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.text.push_str(fragment);
        self
    }

    /// The wire string forwarded to the engine.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Errors from the engine boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("entity {id} is not a geometric entity")]
    NotGeometric { id: EntityId },

    #[error("entity {id} reports no known category")]
    UnknownCategory { id: EntityId },

    #[error("error executing command: {command}")]
    CommandFailed { command: String },

    #[error("configuration error: {reason}")]
    Configuration { reason: String },
}
