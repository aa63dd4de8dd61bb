//! Command-fragment marshalling for engine arguments.
//!
//! Fragments carry their own leading space so they concatenate directly
//! onto a command; the engine's parser requires this exact layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use engine_bridge::EntityHandle;
use scribe_types::Category;

use crate::types::OpError;

/// A plain value argument: one item, an explicit list, or every element
/// (`all`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValueList<T> {
    One(T),
    Many(Vec<T>),
    All,
}

impl<T> From<T> for ValueList<T> {
    fn from(value: T) -> Self {
        ValueList::One(value)
    }
}

impl<T> From<Vec<T>> for ValueList<T> {
    fn from(values: Vec<T>) -> Self {
        ValueList::Many(values)
    }
}

/// Render one space-prefixed token per element; `All` renders ` all`.
pub fn list_fragment<T: fmt::Display>(values: &ValueList<T>) -> String {
    match values {
        ValueList::One(value) => format!(" {}", value),
        ValueList::Many(values) => {
            let mut out = String::new();
            for value in values {
                out.push_str(&format!(" {}", value));
            }
            out
        }
        ValueList::All => " all".to_string(),
    }
}

/// An entity argument: one handle, an explicit list of handles, or every
/// entity of one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityList {
    One(EntityHandle),
    Many(Vec<EntityHandle>),
    AllOf(Category),
}

impl From<EntityHandle> for EntityList {
    fn from(entity: EntityHandle) -> Self {
        EntityList::One(entity)
    }
}

impl From<Vec<EntityHandle>> for EntityList {
    fn from(entities: Vec<EntityHandle>) -> Self {
        EntityList::Many(entities)
    }
}

impl From<Category> for EntityList {
    fn from(category: Category) -> Self {
        EntityList::AllOf(category)
    }
}

/// Render one space-prefixed id token per entity and return the list's
/// category.
///
/// With `required` set, every entity must match it. Otherwise the first
/// entity's category is adopted and later entities must agree; a
/// heterogeneous list fails with [`OpError::CategoryMismatch`].
/// `AllOf` renders the ` all` token paired with its category.
pub fn id_list_fragment(
    entities: &EntityList,
    required: Option<Category>,
) -> Result<(Category, String), OpError> {
    match entities {
        EntityList::AllOf(category) => {
            check_category(*category, required)?;
            Ok((*category, " all".to_string()))
        }
        EntityList::One(entity) => {
            let category = entity.classify()?;
            check_category(category, required)?;
            Ok((category, format!(" {}", entity.id())))
        }
        EntityList::Many(entities) => {
            let mut shared = required;
            let mut out = String::new();
            for entity in entities {
                let category = entity.classify()?;
                check_category(category, shared)?;
                shared.get_or_insert(category);
                out.push_str(&format!(" {}", entity.id()));
            }
            let category = shared.ok_or(OpError::EmptyList)?;
            Ok((category, out))
        }
    }
}

fn check_category(found: Category, required: Option<Category>) -> Result<(), OpError> {
    match required {
        Some(expected) if expected != found => Err(OpError::CategoryMismatch { expected, found }),
        _ => Ok(()),
    }
}

/// Insertion-ordered option name/value pairs.
///
/// Renders as ` <name> <value>` per pair, in the order pairs were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keywords {
    pairs: Vec<(String, String)>,
}

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pair. Later pairs render after earlier ones.
    pub fn arg(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn fragment(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.pairs {
            out.push_str(&format!(" {} {}", name, value));
        }
        out
    }
}

impl fmt::Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
