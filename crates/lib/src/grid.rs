//! Rectangular byte grid shared by the map-based puzzle days.

use core::fmt;

use anyhow::{bail, ensure, Result};
use arrayvec::ArrayVec;
use bstr::BStr;
use memchr::memchr_iter;

/// A rectangular grid of single byte cells addressed by `(row, column)`.
///
/// # Examples
///
/// ```
/// use lib::grid::Grid;
///
/// let grid = Grid::parse(b"abc\ndef\n")?;
/// assert_eq!(grid.rows_len(), 2);
/// assert_eq!(grid.columns_len(), 3);
/// assert_eq!(grid.try_get(1, 2), Some(&b'f'));
/// assert_eq!(grid.try_get(2, 0), None);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    columns: usize,
}

impl Grid {
    /// Parse a grid from raw input, one line per row. Blank lines are
    /// skipped, every other line must be equally wide.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cells = Vec::with_capacity(data.len());
        let mut columns = None;
        let mut start = 0;

        for at in memchr_iter(b'\n', data).chain([data.len()]) {
            let line = data.get(start..at).unwrap_or_default();
            start = at + 1;

            if line.is_empty() {
                continue;
            }

            if let Some(columns) = columns {
                ensure!(
                    line.len() == columns,
                    "row {:?}: expected {columns} columns, but got {}",
                    BStr::new(line),
                    line.len()
                );
            } else {
                columns = Some(line.len());
            }

            cells.extend_from_slice(line);
        }

        let Some(columns) = columns else {
            bail!("empty grid");
        };

        Ok(Self { cells, columns })
    }

    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Get the byte at the given row and column.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        match self.try_get(row, column) {
            Some(&value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the byte at the given row and column.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&u8> {
        if column >= self.columns {
            return None;
        }

        self.cells.get(row * self.columns + column)
    }

    /// Get the byte at the given row and column mutably.
    #[inline]
    pub fn try_get_mut(&mut self, row: usize, column: usize) -> Option<&mut u8> {
        if column >= self.columns {
            return None;
        }

        self.cells.get_mut(row * self.columns + column)
    }

    /// Move one step from `(row, column)` by the given `(row, column)`
    /// offset, if the destination is still on the grid.
    #[inline]
    pub fn step(
        &self,
        row: usize,
        column: usize,
        (row_step, col_step): (isize, isize),
    ) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(row_step)?;
        let column = column.checked_add_signed(col_step)?;
        (row < self.rows_len() && column < self.columns).then_some((row, column))
    }

    /// Iterate over rows in the grid.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// Position of the first byte matching the predicate, in row-major order.
    pub fn find(&self, mut predicate: impl FnMut(u8) -> bool) -> Option<(usize, usize)> {
        let at = self.cells.iter().position(|&value| predicate(value))?;
        Some((at / self.columns, at % self.columns))
    }

    /// Collect the bytes at the given positions into an array.
    ///
    /// This collects up until the array is full, the first out-of-bounds
    /// position, or the end of the iterator.
    pub fn collect<const N: usize>(
        &self,
        it: impl IntoIterator<Item = (usize, usize)>,
    ) -> ArrayVec<u8, N> {
        let mut values = ArrayVec::new();

        for (row, column) in it {
            let Some(&value) = self.try_get(row, column) else {
                break;
            };

            if values.try_push(value).is_err() {
                break;
            }
        }

        values
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows().map(BStr::new)).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", BStr::new(row))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn ragged_input_is_rejected() {
        assert!(Grid::parse(b"abc\nde\n").is_err());
        assert!(Grid::parse(b"").is_err());
    }

    #[test]
    fn stepping() {
        let grid = Grid::parse(b"ab\ncd\n").unwrap();
        assert_eq!(grid.step(0, 0, (1, 1)), Some((1, 1)));
        assert_eq!(grid.step(0, 0, (-1, 0)), None);
        assert_eq!(grid.step(1, 1, (0, 1)), None);
    }

    #[test]
    fn row_major_find() {
        let grid = Grid::parse(b"ab\nca\n").unwrap();
        assert_eq!(grid.find(|b| b == b'a'), Some((0, 0)));
        assert_eq!(grid.find(|b| b == b'c'), Some((1, 0)));
        assert_eq!(grid.find(|b| b == b'x'), None);
    }
}
