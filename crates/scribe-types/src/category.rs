use std::fmt;

use serde::{Deserialize, Serialize};

/// The topological category of an engine entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Category {
    Body,
    Volume,
    Surface,
    Curve,
    Vertex,
}

impl Category {
    /// Classification priority order. A handle reporting more than one
    /// capability resolves to the first match in this order.
    pub const CLASSIFY_ORDER: [Category; 5] = [
        Category::Body,
        Category::Volume,
        Category::Surface,
        Category::Curve,
        Category::Vertex,
    ];

    /// The lowercase token used for this category in command strings.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Body => "body",
            Category::Volume => "volume",
            Category::Surface => "surface",
            Category::Curve => "curve",
            Category::Vertex => "vertex",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
