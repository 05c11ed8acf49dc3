pub mod cli;
pub mod grid;
pub mod input;
pub mod patrol;
pub mod wordsearch;

#[doc(hidden)]
pub mod macro_support {
    pub use log;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli;
    pub use crate::grid::Grid;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::{BStr, ByteSlice};
    pub use log::{debug, info, warn};
}

/// Load the input for a day binary from the package `inputs/` directory.
#[macro_export]
macro_rules! input {
    ($path:literal) => {
        $crate::input::Input::open(
            concat!("inputs/", $path),
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
        )?
    };
}

/// Version line of the calling package, for `--version`.
#[macro_export]
macro_rules! version {
    () => {
        concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
    };
}

/// Evaluate an expression and log how long it took at debug level.
#[macro_export]
macro_rules! timeit {
    ($($tt:tt)*) => {{
        let start = std::time::Instant::now();
        let out = { $($tt)* };
        let d = std::time::Instant::now().duration_since(start);
        $crate::macro_support::log::debug!("time: {d:?}");
        out
    }}
}
