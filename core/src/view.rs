use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub id: TileId,
    pub face: TileFace,
}

/// Read-only projection of the live game for a rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub tiles: Vec<TileView>,
    /// Grid width the board is laid out with.
    pub columns: usize,
    pub score: Score,
    pub feedback: &'static str,
    pub level_complete: bool,
    pub progression: Progression,
    pub phase: Phase,
    pub level: Level,
    pub category: Category,
}

impl BoardView {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let tiles = engine
            .tiles()
            .iter()
            .map(|tile| TileView {
                id: tile.id,
                face: tile.face(),
            })
            .collect();

        Self {
            tiles,
            columns: grid_columns(engine.tiles().len()),
            score: engine.score(),
            feedback: engine.feedback().message(),
            level_complete: engine.is_level_complete(),
            progression: engine.progression(),
            phase: engine.phase(),
            level: engine.level(),
            category: engine.category(),
        }
    }
}

/// Smallest square grid that fits `tile_count` tiles, at least two columns wide.
pub fn grid_columns(tile_count: usize) -> usize {
    let mut columns = 2;
    while columns * columns < tile_count {
        columns += 1;
    }
    columns
}
