// patterns.rs - Preset LED patterns

use crate::grid::{COLS, LedGrid, ROWS};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Smiley",
        cells: &[
            (1, 4), (1, 8),
            (2, 4), (2, 8),
            (4, 2), (4, 10),
            (5, 3), (5, 9),
            (6, 4), (6, 5), (6, 6), (6, 7), (6, 8),
        ],
    },
    Pattern {
        name: "Heart",
        cells: &[
            (1, 4), (1, 5), (1, 7), (1, 8),
            (2, 3), (2, 6), (2, 9),
            (3, 3), (3, 9),
            (4, 4), (4, 8),
            (5, 5), (5, 7),
            (6, 6),
        ],
    },
    Pattern {
        name: "Arrow",
        cells: &[
            (1, 8), (2, 9), (3, 10),
            (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
            (4, 7), (4, 8), (4, 9), (4, 10), (4, 11),
            (5, 10), (6, 9), (7, 8),
        ],
    },
    Pattern {
        name: "Border",
        cells: &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
            (0, 7), (0, 8), (0, 9), (0, 10), (0, 11), (0, 12),
            (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0),
            (1, 12), (2, 12), (3, 12), (4, 12), (5, 12), (6, 12),
            (7, 0), (7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6),
            (7, 7), (7, 8), (7, 9), (7, 10), (7, 11), (7, 12),
        ],
    },
    Pattern {
        name: "Diagonal",
        cells: &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 7)],
    },
];

pub fn apply_pattern(grid: &mut LedGrid, pattern: &Pattern) {
    // Clear grid first
    grid.clear();

    for &(row, col) in pattern.cells {
        if row < ROWS && col < COLS {
            grid.set(row, col, true);
        }
    }
}

pub fn apply_checkerboard(grid: &mut LedGrid) {
    for row in 0..ROWS {
        for col in 0..COLS {
            grid.set(row, col, (row + col) % 2 == 0);
        }
    }
}
