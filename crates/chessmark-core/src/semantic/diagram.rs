//! The parsed diagram.

use super::{BoardGrid, DiagramSettings};

/// A parsed chess diagram: its settings and its board grid.
///
/// Built fresh from source text on every render; never cached.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagram {
    settings: DiagramSettings,
    grid: BoardGrid,
}

impl Diagram {
    /// Creates a diagram from parsed parts.
    pub fn new(settings: DiagramSettings, grid: BoardGrid) -> Self {
        Self { settings, grid }
    }

    /// Returns the diagram settings.
    pub fn settings(&self) -> &DiagramSettings {
        &self.settings
    }

    /// Returns the board grid.
    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }
}
