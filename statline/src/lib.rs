//! The statline descriptive statistics tool.
//!
//! This library supports the statline binary found elsewhere in this project.
//! It ties configuration to the statistics engine: values are collected from
//! a reader, summarized, and the configured fields are written out.

#![deny(clippy::all)]
#![deny(clippy::cargo)]
#![deny(clippy::pedantic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
#![deny(clippy::dbg_macro)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(missing_debug_implementations)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{BufRead, Write};

use statline_engine::{Summary, collect, render_to};
use tracing::debug;

pub mod config;

pub use config::{Config, Overrides};

/// Errors produced by [`run`] and the statline binary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The statistics engine failed: bad input, unknown field or I/O.
    #[error(transparent)]
    Engine(#[from] statline_engine::Error),
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::Error),
    /// Writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Collect every value from `input`, summarize them and write the fields
/// `config` asks for to `output`.
///
/// Nothing is written unless all of `input` is valid.
///
/// # Errors
///
/// Returns [`statline_engine::Error::InvalidInput`] on the first malformed
/// line and an I/O error if reading or writing fails.
pub fn run<R, W>(config: &Config, input: R, output: &mut W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let spec = config.render_spec();
    let values = collect(input)?;
    let summary = Summary::compute(&values);
    debug!(
        "summarized {} values, rendering {} fields",
        values.len(),
        spec.fields().len()
    );
    render_to(&summary, &spec, output)?;
    output.flush()?;
    Ok(())
}
