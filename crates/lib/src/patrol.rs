//! Guard patrol simulation (day 6).

#[cfg(test)]
mod tests;

use core::fmt;
use core::fmt::Write;

use bittle::{Bits, BitsMut};
use log::warn;
use thiserror::Error;

use crate::grid::Grid;

/// An impassable cell in the loaded map.
pub const OBSTRUCTION: u8 = b'#';
/// An obstruction placed for a single trial of the loop search.
pub const ADDED_OBSTRUCTION: u8 = b'0';

const OPEN: u8 = b'.';
const VISITED: u8 = b'X';

/// The four facings of the guard, keyed to their marker glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    /// The facing for a guard marker glyph, if the byte is one.
    #[inline]
    pub fn from_marker(byte: u8) -> Option<Facing> {
        match byte {
            b'^' => Some(Facing::Up),
            b'>' => Some(Facing::Right),
            b'V' | b'v' => Some(Facing::Down),
            b'<' => Some(Facing::Left),
            _ => None,
        }
    }

    /// The glyph rendering this facing.
    #[inline]
    pub const fn marker(self) -> u8 {
        match self {
            Facing::Up => b'^',
            Facing::Right => b'>',
            Facing::Down => b'V',
            Facing::Left => b'<',
        }
    }

    /// Per-step `(row, column)` offset of this facing.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Facing::Up => (-1, 0),
            Facing::Right => (0, 1),
            Facing::Down => (1, 0),
            Facing::Left => (0, -1),
        }
    }

    /// The facing after a 90 degree clockwise turn.
    #[inline]
    pub const fn turn_right(self) -> Facing {
        match self {
            Facing::Up => Facing::Right,
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
        }
    }

    #[inline]
    fn bit(self) -> u32 {
        self as u32
    }
}

/// Errors raised while setting up or running a patrol.
#[derive(Debug, Error)]
pub enum PatrolError {
    /// The map must contain exactly one guard marker.
    #[error("expected exactly one guard marker, but found {0}")]
    GuardCount(usize),
    /// The guard walked up to a byte which is neither open ground nor an
    /// obstruction.
    #[error("unknown symbol `{symbol}` at {row}, {column}")]
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
}

/// Simulates the guard walking the map: forward until blocked, a 90 degree
/// right turn in front of an obstruction, done once the next step would
/// leave the map.
///
/// Which facings the guard has passed through each cell with is tracked in a
/// per-cell bitset next to the map, so the map itself only ever changes when
/// an obstruction is placed.
#[derive(Debug)]
pub struct Patrol {
    grid: Grid,
    /// The loaded layout with the guard marker blanked out; `reset` restores
    /// this.
    clean: Grid,
    row: usize,
    column: usize,
    facing: Facing,
    start: (usize, usize),
    start_facing: Facing,
    /// Facing bitset per cell, recording the facings the guard has left the
    /// cell with.
    history: Vec<u8>,
}

impl Patrol {
    /// Set up a patrol from a loaded map holding exactly one guard marker.
    pub fn new(mut grid: Grid) -> Result<Self, PatrolError> {
        let mut found = None;
        let mut count = 0;

        for row in 0..grid.rows_len() {
            for column in 0..grid.columns_len() {
                if let Some(facing) = Facing::from_marker(grid.get(row, column)) {
                    found = Some((row, column, facing));
                    count += 1;
                }
            }
        }

        let Some((row, column, facing)) = found.filter(|_| count == 1) else {
            return Err(PatrolError::GuardCount(count));
        };

        if let Some(cell) = grid.try_get_mut(row, column) {
            *cell = OPEN;
        }

        let history = vec![0u8; grid.rows_len() * grid.columns_len()];

        Ok(Self {
            clean: grid.clone(),
            grid,
            row,
            column,
            facing,
            start: (row, column),
            start_facing: facing,
            history,
        })
    }

    /// Where the guard started, as `(row, column)`.
    #[inline]
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Run the guard until it leaves the map (`true`) or provably repeats
    /// itself (`false`).
    ///
    /// Every `(cell, facing)` pair is entered at most once before a repeat
    /// is declared, so the walk finishes within `rows * columns * 4 + 1`
    /// transitions. The loop is additionally capped at that bound in case of
    /// bookkeeping bugs; hitting the cap is logged to tell it apart from a
    /// genuinely detected cycle.
    pub fn traverse(&mut self) -> Result<bool, PatrolError> {
        let cap = self.history.len() * 4 + 1;
        let mut turns = 0;

        for _ in 0..cap {
            let ahead = self.grid.step(self.row, self.column, self.facing.delta());

            let Some((row, column)) = ahead else {
                // Off the map. The cell the guard leaves from still counts
                // as visited.
                self.record();
                return Ok(true);
            };

            match self.grid.get(row, column) {
                OBSTRUCTION | ADDED_OBSTRUCTION => {
                    turns += 1;

                    if turns == 4 {
                        // Boxed in on all four sides.
                        return Ok(false);
                    }

                    self.facing = self.facing.turn_right();
                }
                OPEN => {
                    if self.history[self.index(row, column)].test_bit(self.facing.bit()) {
                        // The guard has passed through the cell ahead with
                        // this same facing before, so the path repeats from
                        // here on.
                        return Ok(false);
                    }

                    turns = 0;
                    self.record();
                    (self.row, self.column) = (row, column);
                }
                symbol => {
                    return Err(PatrolError::UnknownSymbol {
                        row,
                        column,
                        symbol: char::from(symbol),
                    });
                }
            }
        }

        warn!("iteration cap of {cap} transitions hit without a detected cycle");
        Ok(false)
    }

    /// Number of distinct cells the guard stood on during the traversals
    /// since the last reset.
    pub fn count_unique_visited(&self) -> usize {
        self.history.iter().filter(|&&cell| cell != 0).count()
    }

    /// Restore the map, the guard, and the visit history to their state as
    /// of construction. Calling this twice in a row is the same as calling
    /// it once.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.clean);
        self.history.fill(0);
        (self.row, self.column) = self.start;
        self.facing = self.start_facing;
    }

    /// Count the cells where placing a single extra obstruction would trap
    /// the guard in a loop.
    ///
    /// Only cells on the guard's unobstructed route are tried, the start
    /// cell excluded; the guard never reaches an obstruction placed anywhere
    /// else. The patrol is left in its reset state afterwards.
    pub fn find_loop_inducing_obstacles(&mut self) -> Result<u32, PatrolError> {
        self.reset();
        self.traverse()?;

        let mut candidates = Vec::with_capacity(self.count_unique_visited());

        for row in 0..self.grid.rows_len() {
            for column in 0..self.grid.columns_len() {
                if (row, column) != self.start && self.history[self.index(row, column)] != 0 {
                    candidates.push((row, column));
                }
            }
        }

        self.reset();

        let mut count = 0;

        for (row, column) in candidates {
            if let Some(cell) = self.grid.try_get_mut(row, column) {
                *cell = ADDED_OBSTRUCTION;
            }

            if !self.traverse()? {
                count += 1;
            }

            self.reset();
        }

        Ok(count)
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.grid.columns_len() + column
    }

    /// Record that the guard leaves its current cell with its current
    /// facing.
    #[inline]
    fn record(&mut self) {
        let at = self.index(self.row, self.column);
        self.history[at].set_bit(self.facing.bit());
    }
}

impl fmt::Display for Patrol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.rows().enumerate() {
            for (column, &byte) in cells.iter().enumerate() {
                let byte = if (row, column) == (self.row, self.column) {
                    self.facing.marker()
                } else if byte == OPEN && self.history[self.index(row, column)] != 0 {
                    VISITED
                } else {
                    byte
                };

                f.write_char(char::from(byte))?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
