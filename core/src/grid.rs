use serde::{Deserialize, Serialize};

use crate::*;

/// Visibility of every mole on the board.
///
/// The grid is a small `Copy` value: updates build a new snapshot instead of touching the current one, so whoever
/// holds the previous grid can compare it with the new one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoleGrid {
    cells: [bool; GRID_SIZE],
}

impl MoleGrid {
    pub const fn new() -> Self {
        Self {
            cells: [false; GRID_SIZE],
        }
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index.to_grid_index() < GRID_SIZE {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn is_visible(&self, index: CellIndex) -> bool {
        self.cells
            .get(index.to_grid_index())
            .copied()
            .unwrap_or(false)
    }

    /// Copy of this grid with the cell at `index` set to `visible`, every other cell untouched.
    pub fn with_mole(&self, index: CellIndex, visible: bool) -> Result<Self> {
        let index = self.validate_index(index)?;
        let mut cells = self.cells;
        cells[index.to_grid_index()] = visible;
        Ok(Self { cells })
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|&&visible| visible).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, bool)> + '_ {
        (0..).zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_mole_only_touches_one_cell() {
        let grid = MoleGrid::new();
        let shown = grid.with_mole(4, true).unwrap();

        assert!(!grid.is_visible(4));
        assert!(shown.is_visible(4));
        assert_eq!(shown.visible_count(), 1);
        assert_eq!(shown.iter().filter(|&(_, visible)| visible).count(), 1);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let grid = MoleGrid::new();

        assert_eq!(grid.with_mole(9, true), Err(GameError::InvalidIndex));
        assert!(!grid.is_visible(200));
    }

    #[test]
    fn iter_enumerates_every_hole_in_order() {
        let grid = MoleGrid::new().with_mole(8, true).unwrap();
        let indices: alloc::vec::Vec<_> = grid.iter().map(|(index, _)| index).collect();

        assert_eq!(indices, (0..9).collect::<alloc::vec::Vec<CellIndex>>());
        assert!(grid.is_visible(8));
        assert_eq!(grid.iter().count(), GRID_SIZE);
    }
}
