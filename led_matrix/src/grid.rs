// grid.rs - LED grid state

use log::debug;

// Compile-time grid size configuration
pub const ROWS: usize = 8;                            // LED rows on the panel
pub const COLS: usize = 13;                           // LED columns on the panel
pub const CELL_COUNT: usize = ROWS * COLS;            // 104 LEDs
pub const WORD_BITS: usize = u32::BITS as usize;
pub const WORD_COUNT: usize = CELL_COUNT.div_ceil(WORD_BITS);

pub type TWords = [u32; WORD_COUNT];

const _: () = assert!(WORD_COUNT == 4, "firmware tables expect four words");

/// Row-major linear index of a cell.
pub const fn linear_index(row: usize, col: usize) -> usize {
    row * COLS + col
}

pub const fn in_bounds(row: usize, col: usize) -> bool {
    row < ROWS && col < COLS
}

/// On/off state of every LED, stored flat in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LedGrid {
    cells: [bool; CELL_COUNT],
}

impl Default for LedGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl LedGrid {
    pub const fn new() -> Self {
        Self { cells: [false; CELL_COUNT] }
    }

    pub const fn from_bits(cells: [bool; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cells in linear index order.
    pub fn bits(&self) -> &[bool; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        in_bounds(row, col) && self.cells[linear_index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, lit: bool) {
        if !in_bounds(row, col) {
            debug!("Ignoring set outside grid at ({}, {})", row, col);
            return;
        }
        self.cells[linear_index(row, col)] = lit;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        if !in_bounds(row, col) {
            debug!("Ignoring toggle outside grid at ({}, {})", row, col);
            return;
        }
        let cell = &mut self.cells[linear_index(row, col)];
        *cell = !*cell;
        debug!("Toggled ({}, {}) -> {}", row, col, *cell);
    }

    pub fn clear(&mut self) {
        self.cells = [false; CELL_COUNT];
    }

    pub fn fill(&mut self) {
        self.cells = [true; CELL_COUNT];
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// (row, col) of every lit LED, row-major.
    pub fn iter_lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &lit)| lit)
            .map(|(index, _)| (index / COLS, index % COLS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn new_grid_is_dark() {
        let grid = LedGrid::new();
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(grid, LedGrid::default());
        assert!(!grid.get(0, 0));
        assert!(!grid.get(ROWS - 1, COLS - 1));
    }

    #[test]
    fn linear_index_is_row_major() {
        assert_eq!(linear_index(0, 0), 0);
        assert_eq!(linear_index(0, 12), 12);
        assert_eq!(linear_index(1, 0), 13);
        assert_eq!(linear_index(2, 5), 31);
        assert_eq!(linear_index(2, 6), 32);
        assert_eq!(linear_index(ROWS - 1, COLS - 1), CELL_COUNT - 1);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut grid = LedGrid::new();
        grid.toggle(3, 7);
        assert!(grid.get(3, 7));
        assert_eq!(grid.lit_count(), 1);
        grid.toggle(3, 7);
        assert!(!grid.get(3, 7));
        assert_eq!(grid, LedGrid::new());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut grid = LedGrid::new();
        grid.toggle(ROWS, 0);
        grid.toggle(0, COLS);
        grid.set(99, 99, true);
        assert_eq!(grid.lit_count(), 0);
        assert!(!grid.get(ROWS, 0));
        // (0, 13) would alias (1, 0) if bounds were not checked per axis
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn fill_and_clear() {
        let mut grid = LedGrid::new();
        grid.fill();
        assert_eq!(grid.lit_count(), CELL_COUNT);
        grid.clear();
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn iter_lit_yields_coordinates_in_order() {
        let mut grid = LedGrid::new();
        grid.set(7, 12, true);
        grid.set(0, 3, true);
        grid.set(2, 6, true);
        let lit: Vec<_> = grid.iter_lit().collect();
        assert_eq!(lit, vec![(0, 3), (2, 6), (7, 12)]);
    }
}
