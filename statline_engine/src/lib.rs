//! The statline statistics engine.
//!
//! This library turns newline-delimited numeric text into a fixed set of
//! descriptive statistics and renders a chosen subset of them. It supports the
//! statline binary found elsewhere in this project.
//!
//! The pipeline is linear: [`collect`] the values, compute a [`Summary`] from
//! them, then [`render`] the fields named by a [`RenderSpec`].

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
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::multiple_crate_versions)]

pub mod collect;
pub mod metric;
pub mod render;
pub mod summary;

pub use collect::{collect, collect_lines};
pub use metric::{FieldSet, Format, Metric};
pub use render::{Layout, RenderSpec, render, render_names, render_to};
pub use summary::{Summary, percentile};

/// Errors produced by the statistics engine.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A non-blank input line is not a number.
    #[error("Invalid value provided on line {line}, item must be a numeric value: {value:?}")]
    InvalidInput {
        /// 1-based line number of the offending line
        line: usize,
        /// The trimmed text of the offending line
        value: String,
    },
    /// A requested output field is not a known metric.
    #[error("Invalid field in output list: {0}")]
    UnknownField(String),
    /// A requested field set is not known.
    #[error("Invalid field set: {0}, expected one of [minimal, full]")]
    UnknownFieldSet(String),
    /// A requested layout is not known.
    #[error("Invalid layout: {0}, expected one of [row, column]")]
    UnknownLayout(String),
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
