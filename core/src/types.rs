/// Position of a cell in the grid, counted row by row from the top left.
pub type CellIndex = u8;

/// Whole seconds shown on the countdown.
pub type Seconds = u16;

/// Virtual clock time and durations in milliseconds.
pub type Millis = u64;

/// Number of holes on the board.
pub const GRID_SIZE: usize = 9;

/// Holes per row when the board is laid out as a square.
pub const GRID_COLUMNS: usize = 3;

/// Length of a round.
pub const ROUND_SECONDS: Seconds = 30;

/// Period of the mole spawn cycle, independent of difficulty.
pub const SPAWN_PERIOD_MS: Millis = 1500;

/// Period of the countdown cycle.
pub const TICK_PERIOD_MS: Millis = 1000;

pub trait ToGridIndex {
    fn to_grid_index(self) -> usize;
}

impl ToGridIndex for CellIndex {
    fn to_grid_index(self) -> usize {
        self.into()
    }
}

/// Row and column of `index` on a board with [`GRID_COLUMNS`] columns.
pub const fn row_col(index: CellIndex) -> (usize, usize) {
    let index = index as usize;
    (index / GRID_COLUMNS, index % GRID_COLUMNS)
}
