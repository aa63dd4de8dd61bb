//! MockEngine — deterministic test double implementing ScriptEngine.
//!
//! Records every dispatched command in a journal, bumps the error counter
//! for commands matching scripted failure patterns, and answers
//! sub-entity queries from seeded synthetic topology.

use std::collections::HashMap;

use scribe_types::{Category, EntityId};

use crate::config::EchoMode;
use crate::traits::ScriptEngine;
use crate::types::{Capabilities, EntityHandle};

/// One recorded command and the mode it was dispatched under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub command: String,
    pub echo: EchoMode,
}

/// Handles of a seeded brick: one body owning one meshed volume with
/// full box sub-topology (6 surfaces, 12 curves, 8 vertices).
#[derive(Debug, Clone)]
pub struct SeededBrick {
    pub body: EntityHandle,
    pub volume: EntityHandle,
    pub surfaces: Vec<EntityHandle>,
    pub curves: Vec<EntityHandle>,
    pub vertices: Vec<EntityHandle>,
}

/// Deterministic test double for the external engine.
pub struct MockEngine {
    next_id: u64,
    journal: Vec<JournalEntry>,
    error_count: u64,
    fail_patterns: Vec<String>,
    children: HashMap<(EntityId, Category), Vec<EntityHandle>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            journal: Vec::new(),
            error_count: 0,
            fail_patterns: Vec::new(),
            children: HashMap::new(),
        }
    }

    fn alloc(&mut self, caps: Capabilities) -> EntityHandle {
        let handle = EntityHandle::new(EntityId(self.next_id), caps);
        self.next_id += 1;
        handle
    }

    /// Create a standalone entity of the given category.
    pub fn add_entity(&mut self, category: Category) -> EntityHandle {
        self.alloc(Capabilities::of(category))
    }

    /// Create an entity with explicit capability tags, including
    /// `Capabilities::BASE` (geometry with no category) and
    /// `Capabilities::NONE` (not geometry at all).
    pub fn add_entity_with(&mut self, caps: Capabilities) -> EntityHandle {
        self.alloc(caps)
    }

    /// Register `child` as a sub-entity of `parent`.
    pub fn add_child(&mut self, parent: &EntityHandle, child: EntityHandle) {
        let category = match child.classify() {
            Ok(category) => category,
            // Untagged children are unreachable through category queries.
            Err(_) => return,
        };
        self.children
            .entry((parent.id(), category))
            .or_default()
            .push(child);
    }

    /// Seed one meshed brick: a body owning a volume, 6 surfaces,
    /// 12 curves and 8 vertices, wired with box adjacency. Sub-entity
    /// queries resolve from every ancestor level, as in the real engine.
    pub fn seed_brick(&mut self) -> SeededBrick {
        let body = self.add_entity(Category::Body);
        let volume = self.add_entity(Category::Volume);

        let vertices: Vec<EntityHandle> = (0..8).map(|_| self.add_entity(Category::Vertex)).collect();

        // 12 box edges as vertex index pairs: 4 bottom, 4 top, 4 vertical.
        let edge_pairs = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        let curves: Vec<EntityHandle> = edge_pairs
            .iter()
            .map(|_| self.add_entity(Category::Curve))
            .collect();

        // 6 box faces as edge index quads: bottom, top, four sides.
        let face_edges = [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 9, 4, 8],
            [1, 10, 5, 9],
            [2, 11, 6, 10],
            [3, 8, 7, 11],
        ];
        let surfaces: Vec<EntityHandle> = face_edges
            .iter()
            .map(|_| self.add_entity(Category::Surface))
            .collect();

        self.add_child(&body, volume);
        for parent in [&body, &volume] {
            for &surface in &surfaces {
                self.add_child(parent, surface);
            }
            for &curve in &curves {
                self.add_child(parent, curve);
            }
            for &vertex in &vertices {
                self.add_child(parent, vertex);
            }
        }
        for (surface, edges) in surfaces.iter().zip(face_edges.iter()) {
            for &edge_index in edges {
                self.add_child(surface, curves[edge_index]);
            }
        }
        for (curve, &(start, end)) in curves.iter().zip(edge_pairs.iter()) {
            self.add_child(curve, vertices[start]);
            self.add_child(curve, vertices[end]);
        }

        SeededBrick {
            body,
            volume,
            surfaces,
            curves,
            vertices,
        }
    }

    /// Commands containing `pattern` will bump the error counter when
    /// dispatched, as an engine parse failure would.
    pub fn fail_when(&mut self, pattern: impl Into<String>) {
        self.fail_patterns.push(pattern.into());
    }

    /// Every dispatched command, oldest first.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Dispatched command strings, oldest first.
    pub fn commands(&self) -> Vec<&str> {
        self.journal.iter().map(|entry| entry.command.as_str()).collect()
    }

    fn record(&mut self, command: &str, echo: EchoMode) {
        if self
            .fail_patterns
            .iter()
            .any(|pattern| command.contains(pattern.as_str()))
        {
            self.error_count += 1;
        }
        self.journal.push(JournalEntry {
            command: command.to_string(),
            echo,
        });
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEngine for MockEngine {
    fn cmd(&mut self, command: &str) {
        self.record(command, EchoMode::Verbose);
    }

    fn silent_cmd(&mut self, command: &str) {
        self.record(command, EchoMode::Silent);
    }

    fn error_count(&self) -> u64 {
        self.error_count
    }

    fn sub_entities(&self, entity: &EntityHandle, category: Category) -> Vec<EntityHandle> {
        self.children
            .get(&(entity.id(), category))
            .cloned()
            .unwrap_or_default()
    }
}
