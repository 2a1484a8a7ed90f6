//! In-memory store of positioned entities, loaded once from a plain-text
//! map and mutated in place for the rest of the session.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog;
use crate::entity::Entity;
use crate::error::{EngineError, Result};

/// Grid coordinate; y grows downward, matching terminal rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Insertion-ordered collection of `(Position, Entity)`. Order carries no
/// meaning beyond draw overlay; lookups scan linearly, which is fine at the
/// scale of a single screen.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    cells: Vec<(Position, Entity)>,
}

impl MapStore {
    /// Parse map text: one row per line, trailing whitespace stripped,
    /// every character matching a known archetype symbol spawns an entity
    /// at that column/row. Unrecognized characters are silently skipped.
    pub fn parse(text: &str) -> Self {
        let table = catalog::archetypes();
        let mut cells = Vec::new();
        for (y, line) in text.lines().enumerate() {
            for (x, symbol) in line.trim_end().chars().enumerate() {
                if let Some(archetype) = table.get(&symbol) {
                    cells.push((
                        Position::new(x as i32, y as i32),
                        Entity::spawn(archetype),
                    ));
                }
            }
        }
        tracing::debug!(entities = cells.len(), "map parsed");
        Self { cells }
    }

    /// Load a map from disk. The only failure is an unreadable file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::MapLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// First entity with the given symbol. Absence is a hard error: gameplay
    /// invariants guarantee the player and the dragon are always present.
    pub fn find(&self, symbol: char) -> Result<(Position, &Entity)> {
        self.cells
            .iter()
            .find(|(_, e)| e.symbol() == symbol)
            .map(|(p, e)| (*p, e))
            .ok_or(EngineError::NotFound { symbol })
    }

    pub fn find_mut(&mut self, symbol: char) -> Result<(Position, &mut Entity)> {
        self.cells
            .iter_mut()
            .find(|(_, e)| e.symbol() == symbol)
            .map(|(p, e)| (*p, e))
            .ok_or(EngineError::NotFound { symbol })
    }

    /// The mobile entity that is not `symbol`, i.e. the opponent.
    pub fn other_mobile(&self, symbol: char) -> Result<(Position, &Entity)> {
        self.cells
            .iter()
            .find(|(_, e)| e.mobile() && e.symbol() != symbol)
            .map(|(p, e)| (*p, e))
            .ok_or(EngineError::NoOtherMobile { symbol })
    }

    pub fn other_mobile_mut(&mut self, symbol: char) -> Result<(Position, &mut Entity)> {
        self.cells
            .iter_mut()
            .find(|(_, e)| e.mobile() && e.symbol() != symbol)
            .map(|(p, e)| (*p, e))
            .ok_or(EngineError::NoOtherMobile { symbol })
    }

    /// Relocate the entity with the given symbol.
    pub fn move_to(&mut self, symbol: char, position: Position) -> Result<()> {
        let (p, _) = self
            .cells
            .iter_mut()
            .find(|(_, e)| e.symbol() == symbol)
            .ok_or(EngineError::NotFound { symbol })?;
        *p = position;
        Ok(())
    }

    /// Remove every entity at `position` matching the predicate.
    pub fn remove_at(&mut self, position: Position, pred: impl Fn(&Entity) -> bool) {
        self.cells.retain(|(p, e)| !(*p == position && pred(e)));
    }

    /// Entities occupying a cell (water may share a cell with a mobile).
    pub fn entities_at(&self, position: Position) -> impl Iterator<Item = &Entity> {
        self.cells
            .iter()
            .filter(move |(p, _)| *p == position)
            .map(|(_, e)| e)
    }

    /// True if a blocking entity occupies the cell.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.entities_at(position).any(Entity::blocks)
    }

    /// Read-only iteration in insertion order; restartable.
    pub fn all(&self) -> impl Iterator<Item = (Position, &Entity)> {
        self.cells.iter().map(|(p, e)| (*p, e))
    }

    pub(crate) fn all_mut(&mut self) -> impl Iterator<Item = (Position, &mut Entity)> {
        self.cells.iter_mut().map(|(p, e)| (*p, e))
    }

    /// Cells a mover can never enter: blocking, non-mobile entities. The
    /// opponent policy routes around these.
    pub fn blocking_terrain(&self) -> HashSet<Position> {
        self.cells
            .iter()
            .filter(|(_, e)| e.blocks() && !e.mobile())
            .map(|(p, _)| *p)
            .collect()
    }

    /// Draw order for renderers: terrain first, then destructible immobile
    /// entities, then mobiles, so the combatants always land on top.
    pub fn draw_order(&self) -> impl Iterator<Item = (Position, &Entity)> {
        let terrain = self.all().filter(|(_, e)| !e.destructible() && !e.mobile());
        let fixtures = self.all().filter(|(_, e)| e.destructible() && !e.mobile());
        let mobiles = self.all().filter(|(_, e)| e.mobile());
        terrain.chain(fixtures).chain(mobiles)
    }

    /// Number of columns spanned by the map (max x + 1).
    pub fn width(&self) -> i32 {
        self.cells.iter().map(|(p, _)| p.x + 1).max().unwrap_or(0)
    }

    /// Number of rows spanned by the map (max y + 1).
    pub fn height(&self) -> i32 {
        self.cells.iter().map(|(p, _)| p.y + 1).max().unwrap_or(0)
    }
}
