use std::fmt;
use std::fmt::Write;

use rand::Rng;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::ScreenSize;
use crate::cell::Cell;
use crate::rules;

/// Offsets to the 8 cells surrounding a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
}

/// A bounded Life board.
///
/// Cells live in a flat buffer indexed by `row * cols + col`. A scratch
/// buffer of the same size is kept alongside it so a step can write the next
/// generation while reading only the current one, then swap the two. The
/// dimensions never change for the lifetime of a board.
#[derive(Clone)]
pub struct Board {
    rows: usize,
    cols: usize,

    /// The current generation
    cells: Vec<Cell>,

    /// Where the next generation is written during a step
    scratch: Vec<Cell>,

    /// Number of steps taken since seeding
    generation: u64,
}

impl Board {
    /// Create a board of exactly `rows x cols` cells.
    ///
    /// Each cell independently starts alive with probability `seed_density`
    /// (expected in `[0, 1)`), drawn from `rng`. No generation came before,
    /// so every cell's `was_alive` starts false.
    pub fn new<R: Rng>(
        rows: usize,
        cols: usize,
        seed_density: f64,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimension { rows, cols });
        }

        let cells = (0..rows * cols)
            .map(|_| Cell::seeded(rng.gen_range(0.0..1.0) < seed_density))
            .collect();
        let scratch = vec![Cell::dead(); rows * cols];

        debug!(rows, cols, seed_density, "seeded board");

        Ok(Self {
            rows,
            cols,
            cells,
            scratch,
            generation: 0,
        })
    }

    /// Create a board sized to a `width x height` screen tiled with square
    /// cells `cell_size` pixels on a side. Both axes round down; a cell size
    /// of zero or larger than the screen leaves no rows or columns, which is
    /// an [`BoardError::InvalidDimension`] error.
    pub fn from_screen<R: Rng>(
        width: ScreenSize,
        height: ScreenSize,
        cell_size: ScreenSize,
        seed_density: f64,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let (rows, cols) = if cell_size == 0 {
            (0, 0)
        } else {
            ((height / cell_size) as usize, (width / cell_size) as usize)
        };

        Self::new(rows, cols, seed_density, rng)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Generations stepped since seeding
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// The cell at `(row, col)`.
    ///
    /// Out-of-range indices are a caller error and panic. This is distinct
    /// from the dead-boundary policy inside [`Board::step`], which only
    /// applies to neighbor coordinates and never to queries.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        self.cells[row * self.cols + col]
    }

    /// Overwrite the cell at `(row, col)`, clearing its history.
    ///
    /// Meant for placing patterns on a fresh board; after that, a step is
    /// the only mutation. Same bounds contract as [`Board::cell`].
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        self.cells[row * self.cols + col] = Cell::seeded(alive);
    }

    /// Advance exactly one generation.
    ///
    /// The whole pass reads the current buffer only, so every cell's next
    /// state comes from one consistent snapshot. Results are written to the
    /// scratch buffer and swapped in at the end; a caller never observes a
    /// half-stepped board.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row * self.cols + col;
                let alive = self.cells[i].alive;

                self.scratch[i] = Cell {
                    alive: rules::next_state(alive, self.live_neighbors(row, col)),
                    was_alive: alive,
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;

        trace!(generation = self.generation, "stepped");
    }

    /// Count live cells among the up to 8 neighbors of `(row, col)` in the
    /// current generation. Coordinates falling off the board count as dead;
    /// the boundary is closed, not toroidal.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut n = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let Some(r) = row.checked_add_signed(dr) else {
                continue;
            };
            let Some(c) = col.checked_add_signed(dc) else {
                continue;
            };

            if r >= self.rows || c >= self.cols {
                continue;
            }

            if self.cells[r * self.cols + c].alive {
                n += 1;
            }
        }

        n
    }
}

impl fmt::Display for Board {
    /// One `#` (alive) or `.` (dead) per cell, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_char(if self.cells[row * self.cols + col].alive {
                    '#'
                } else {
                    '.'
                })?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
