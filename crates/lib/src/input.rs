//! Input loading for the day binaries.

use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context, Result};

use crate::grid::Grid;

/// A day's puzzle input, read once up front.
pub struct Input {
    path: &'static str,
    data: String,
}

impl Input {
    /// Read the input at `read_path`, labelled `path` in error messages.
    ///
    /// Prefer the [`input!`][crate::input!] macro, which resolves the path
    /// relative to the package `inputs/` directory.
    pub fn open(path: &'static str, read_path: &str) -> Result<Self> {
        return inner(path, read_path).with_context(|| anyhow!("{path}"));

        fn inner(path: &'static str, read_path: &str) -> Result<Input> {
            let mut file = File::open(read_path)?;
            let mut data = String::with_capacity(4096);
            file.read_to_string(&mut data)?;
            Ok(Input { path, data })
        }
    }

    /// The display path of the input.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The whole input as a string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// The whole input as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Parse the input as a character grid, one line per row.
    pub fn grid(&self) -> Result<Grid> {
        Grid::parse(self.as_bytes()).with_context(|| anyhow!("{}", self.path))
    }
}
