use std::fmt::Display;
use std::fmt::Write;

use crossterm::style::Color;
use crossterm::style::StyledContent;
use crossterm::style::Stylize;

use crate::board::Board;
use crate::cell::Phase;

/// Width of a cell block in terminal columns. Two columns per cell keeps
/// cells roughly square in most fonts.
pub const CELL_WIDTH: usize = 2;

/// Colors for the four cell phases and the gridline overlay.
///
/// Presentation policy only. The board exposes `(alive, was_alive)` and
/// knows nothing about any of this.
pub struct Palette {
    pub newborn: Color,
    pub surviving: Color,
    pub dying: Color,
    pub gridline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            newborn: Color::DarkGreen,
            surviving: Color::Grey,
            dying: Color::DarkRed,
            gridline: Color::DarkGrey,
        }
    }
}

/// Composes a styled text frame from a [`Board`].
///
/// The frame buffer is a `String` of styled cell blocks, rebuilt on every
/// draw with its allocation reused. Dead cells are left unpainted so the
/// terminal background shows through.
pub struct Camera {
    /// The frame buffer
    fb: String,

    show_gridlines: bool,

    palette: Palette,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            fb: String::new(),
            show_gridlines: true,
            palette: Palette::default(),
        }
    }

    pub fn toggle_gridlines(&mut self) {
        self.show_gridlines = !self.show_gridlines;
    }

    /// The largest board that fits a `term_cols x term_rows` character
    /// screen, sized for the gridline overlay (the larger of the two
    /// footprints, so toggling the overlay never overflows the screen).
    /// Returns `(rows, cols)`.
    pub fn fit(term_cols: u16, term_rows: u16) -> (usize, usize) {
        let rows = (term_rows as usize).saturating_sub(1) / 2;
        let cols = (term_cols as usize).saturating_sub(1) / (CELL_WIDTH + 1);

        (rows, cols)
    }

    /// Render `board` into the frame buffer and return the frame.
    ///
    /// Newborn, surviving and dying cells get their palette color; the
    /// gridline overlay is drawn from the palette's gridline color alone,
    /// independent of any cell state.
    pub fn draw(&mut self, board: &Board) -> &str {
        self.fb.clear();

        if self.show_gridlines {
            self.draw_ruled(board);
        } else {
            self.draw_plain(board);
        }

        &self.fb
    }

    fn draw_plain(&mut self, board: &Board) {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                self.push_cell(board, row, col);
            }

            self.fb.push('\n');
        }
    }

    fn draw_ruled(&mut self, board: &Board) {
        let (rows, cols) = (board.rows(), board.cols());

        self.push_rule(cols, '┌', '┬', '┐');

        for row in 0..rows {
            self.push_bar();

            for col in 0..cols {
                self.push_cell(board, row, col);
                self.push_bar();
            }

            self.fb.push('\n');

            if row + 1 == rows {
                self.push_rule(cols, '└', '┴', '┘');
            } else {
                self.push_rule(cols, '├', '┼', '┤');
            }
        }
    }

    fn push_cell(&mut self, board: &Board, row: usize, col: usize) {
        const BLOCK: &str = "██";
        const BLANK: &str = "  ";

        let color = match board.cell(row, col).phase() {
            Phase::Newborn => self.palette.newborn,
            Phase::Surviving => self.palette.surviving,
            Phase::Dying => self.palette.dying,
            Phase::Dead => {
                self.fb.push_str(BLANK);
                return;
            }
        };

        self.push_styled(BLOCK.with(color));
    }

    fn push_bar(&mut self) {
        self.push_styled('│'.with(self.palette.gridline));
    }

    /// A horizontal gridline spanning the full frame width
    fn push_rule(&mut self, cols: usize, left: char, mid: char, right: char) {
        let mut line = String::with_capacity(3 * (cols * (CELL_WIDTH + 1) + 1));

        line.push(left);
        for col in 0..cols {
            for _ in 0..CELL_WIDTH {
                line.push('─');
            }

            line.push(if col + 1 == cols { right } else { mid });
        }

        self.push_styled(line.with(self.palette.gridline));
        self.fb.push('\n');
    }

    fn push_styled<D: Display>(&mut self, content: StyledContent<D>) {
        // writing into a String cannot fail
        let _ = write!(self.fb, "{content}");
    }
}
