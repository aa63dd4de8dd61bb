use std::fmt;

use serde::{Deserialize, Serialize};

/// Element class keywords used when filling a block from raw elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementClass {
    Hex,
    Tet,
    Wedge,
    Quad,
    Tri,
    Edge,
    Node,
}

impl ElementClass {
    /// The lowercase token used for this class in command strings.
    pub fn keyword(self) -> &'static str {
        match self {
            ElementClass::Hex => "hex",
            ElementClass::Tet => "tet",
            ElementClass::Wedge => "wedge",
            ElementClass::Quad => "quad",
            ElementClass::Tri => "tri",
            ElementClass::Edge => "edge",
            ElementClass::Node => "node",
        }
    }
}

impl fmt::Display for ElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Surface element types assignable to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceElement {
    Quad4,
    Quad5,
    Quad8,
    Quad9,
    Tri3,
    Tri6,
    Tri7,
}

impl SurfaceElement {
    /// The uppercase token the engine expects in `element type` commands.
    pub fn token(self) -> &'static str {
        match self {
            SurfaceElement::Quad4 => "QUAD4",
            SurfaceElement::Quad5 => "QUAD5",
            SurfaceElement::Quad8 => "QUAD8",
            SurfaceElement::Quad9 => "QUAD9",
            SurfaceElement::Tri3 => "TRI3",
            SurfaceElement::Tri6 => "TRI6",
            SurfaceElement::Tri7 => "TRI7",
        }
    }
}

impl fmt::Display for SurfaceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Volume element types assignable to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeElement {
    Hex8,
    Hex9,
    Hex20,
    Hex27,
    Wedge6,
    Wedge15,
}

impl VolumeElement {
    /// The uppercase token the engine expects in `element type` commands.
    pub fn token(self) -> &'static str {
        match self {
            VolumeElement::Hex8 => "HEX8",
            VolumeElement::Hex9 => "HEX9",
            VolumeElement::Hex20 => "HEX20",
            VolumeElement::Hex27 => "HEX27",
            VolumeElement::Wedge6 => "WEDGE6",
            VolumeElement::Wedge15 => "WEDGE15",
        }
    }
}

impl fmt::Display for VolumeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Either kind of block element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Surface(SurfaceElement),
    Volume(VolumeElement),
}

impl From<SurfaceElement> for ElementType {
    fn from(element: SurfaceElement) -> Self {
        ElementType::Surface(element)
    }
}

impl From<VolumeElement> for ElementType {
    fn from(element: VolumeElement) -> Self {
        ElementType::Volume(element)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Surface(element) => element.fmt(f),
            ElementType::Volume(element) => element.fmt(f),
        }
    }
}
