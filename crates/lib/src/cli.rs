//! CLI helpers shared by the day binaries.

mod stdout_logger;

use core::fmt;

use anyhow::{anyhow, bail, Result};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Options accepted by every day binary.
#[derive(Default)]
pub struct Opts {
    /// Print version information instead of solving.
    pub version: bool,
    /// Log at debug level.
    verbose: bool,
    /// Disable logging entirely.
    quiet: bool,
}

impl Opts {
    /// Parse CLI options and install the stdout logger.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--version" => {
                    opts.version = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.quiet {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set logger: {error}"))?;
        }

        Ok(opts)
    }
}

/// Print the fixed label and value for one part of a day's answer.
pub fn answer(day: u32, part: u32, value: impl fmt::Display) {
    println!("Answer to day {day}, part {part}: {value}");
}
