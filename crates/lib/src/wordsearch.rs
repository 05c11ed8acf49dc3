//! Directional word search over a byte grid (day 4).

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::grid::Grid;

/// Sentinel written over the center of a counted crossing so the opposite
/// arm cannot report the same crossing again.
const CONSUMED: u8 = b'.';

/// The eight compass directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The four diagonal directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Per-step `(row, column)` offset of this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The other diagonal of an X through a shared center. Cardinal
    /// directions map to themselves.
    #[inline]
    const fn mirrored(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::UpRight,
            Direction::UpRight => Direction::UpLeft,
            Direction::DownLeft => Direction::DownRight,
            Direction::DownRight => Direction::DownLeft,
            other => other,
        }
    }
}

/// A direction with its per-step offsets baked in.
#[derive(Debug, Clone, Copy)]
pub struct SearchPath {
    direction: Direction,
    row_step: isize,
    col_step: isize,
}

impl SearchPath {
    /// Construct the search path for a direction.
    #[inline]
    pub const fn new(direction: Direction) -> Self {
        let (row_step, col_step) = direction.delta();

        Self {
            direction,
            row_step,
            col_step,
        }
    }

    /// The direction this path runs in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The next position along the path, if it stays on the grid.
    #[inline]
    fn step(&self, grid: &Grid, row: usize, column: usize) -> Option<(usize, usize)> {
        grid.step(row, column, (self.row_step, self.col_step))
    }

    /// Positions along the path starting at `(row, column)` inclusive. The
    /// iterator is unbounded towards the bottom right; callers walking a
    /// grid stop at its edge.
    fn walk(self, row: usize, column: usize) -> impl Iterator<Item = (usize, usize)> {
        let mut next = Some((row, column));

        core::iter::from_fn(move || {
            let at = next?;

            next = (|| {
                let row = at.0.checked_add_signed(self.row_step)?;
                let column = at.1.checked_add_signed(self.col_step)?;
                Some((row, column))
            })();

            Some(at)
        })
    }
}

/// Error raised when a search is anchored on the wrong cell.
#[derive(Debug, Error)]
#[error("search anchored at {row}, {column} on `{found}`, which is not the first byte of the target")]
pub struct SearchError {
    row: usize,
    column: usize,
    found: char,
}

/// Test whether `word` runs from `(row, column)` along `path`.
///
/// The caller must anchor the search on a cell holding the first byte of
/// `word`; anchoring anywhere else is an error. The walk is an explicit loop
/// indexed by position in the word, returning `false` as soon as a step
/// would leave the grid or a byte mismatches, and `true` once the last byte
/// matches.
pub fn word_appears_at(
    grid: &Grid,
    row: usize,
    column: usize,
    path: SearchPath,
    word: &[u8],
) -> Result<bool, SearchError> {
    let Some((&first, rest)) = word.split_first() else {
        return Ok(false);
    };

    match grid.try_get(row, column) {
        Some(&found) if found == first => {}
        Some(&found) => {
            return Err(SearchError {
                row,
                column,
                found: char::from(found),
            });
        }
        None => return Ok(false),
    }

    let (mut row, mut column) = (row, column);

    for &expected in rest {
        let Some((r, c)) = path.step(grid, row, column) else {
            return Ok(false);
        };

        if grid.get(r, c) != expected {
            return Ok(false);
        }

        (row, column) = (r, c);
    }

    Ok(true)
}

/// Count every occurrence of `word` in the grid, anchored at each cell
/// holding its first byte and searched in all eight directions.
pub fn count_word(grid: &Grid, word: &[u8]) -> Result<u32, SearchError> {
    let Some(&first) = word.first() else {
        return Ok(0);
    };

    let mut count = 0;

    for row in 0..grid.rows_len() {
        for column in 0..grid.columns_len() {
            if grid.get(row, column) != first {
                continue;
            }

            for direction in Direction::ALL {
                if word_appears_at(grid, row, column, SearchPath::new(direction), word)? {
                    count += 1;
                }
            }
        }
    }

    Ok(count)
}

/// Count X-shaped crossings of a three byte word: two diagonal runs of the
/// word (forward or reversed) sharing a center cell.
///
/// Each counted crossing has its center overwritten with `.` so the same
/// crossing is never reported twice when iteration later reaches the
/// opposite arm.
pub fn count_crossings(grid: &mut Grid, word: &[u8; 3]) -> Result<u32, SearchError> {
    let reversed = [word[2], word[1], word[0]];
    let mut count = 0;

    for row in 0..grid.rows_len() {
        for column in 0..grid.columns_len() {
            let anchor = grid.get(row, column);

            let target = if anchor == word[0] {
                *word
            } else if anchor == word[2] {
                reversed
            } else {
                continue;
            };

            let Some(path) = crossing_at(grid, row, column, &target, word)? else {
                continue;
            };

            count += 1;

            if let Some((r, c)) = path.step(grid, row, column) {
                if let Some(center) = grid.try_get_mut(r, c) {
                    *center = CONSUMED;
                }
            }
        }
    }

    Ok(count)
}

/// Search the four diagonals from a corner cell for a run of `target`, and
/// confirm the perpendicular diagonal through the shared center also holds
/// the word in one of its two readings. Returns the path of the first arm.
fn crossing_at(
    grid: &Grid,
    row: usize,
    column: usize,
    target: &[u8; 3],
    word: &[u8; 3],
) -> Result<Option<SearchPath>, SearchError> {
    for direction in Direction::DIAGONALS {
        let path = SearchPath::new(direction);

        if !word_appears_at(grid, row, column, path, target)? {
            continue;
        }

        // The other arm starts two columns over on the same row and runs
        // along the mirrored diagonal.
        let (_, col_step) = direction.delta();

        let Some(start) = column.checked_add_signed(col_step * 2) else {
            continue;
        };

        if arm_matches(grid, row, start, SearchPath::new(direction.mirrored()), word) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Test whether the three cells along `path` hold the word forwards or
/// reversed.
fn arm_matches(grid: &Grid, row: usize, column: usize, path: SearchPath, word: &[u8; 3]) -> bool {
    let run = grid.collect::<3>(path.walk(row, column));
    let reversed = [word[2], word[1], word[0]];
    run[..] == word[..] || run[..] == reversed[..]
}
