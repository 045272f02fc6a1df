//! The closed set of metrics statline computes and the display format each
//! one renders with.
//!
//! Both tables here are fixed at compile time. Adding a metric means adding a
//! variant to [`Metric`]; the exhaustive matches below then point at every
//! place that needs to learn about it.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
/// A named metric of a [`crate::Summary`].
pub enum Metric {
    /// Number of values.
    Count,
    /// Arithmetic sum of all values.
    Sum,
    /// 99th percentile.
    P99,
    /// 97th percentile.
    P97,
    /// 95th percentile.
    P95,
    /// 90th percentile.
    P90,
    /// 75th percentile.
    P75,
    /// 50th percentile.
    P50,
    /// 25th percentile.
    P25,
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Middle value, or the mean of the two middle values.
    Median,
    /// Arithmetic mean.
    Average,
    /// Population standard deviation.
    Stddev,
}

impl Metric {
    /// Number of metrics in the enumeration.
    pub const LEN: usize = 14;

    /// Every metric, in enumeration order.
    pub const ALL: [Metric; Self::LEN] = [
        Metric::Count,
        Metric::Sum,
        Metric::P99,
        Metric::P97,
        Metric::P95,
        Metric::P90,
        Metric::P75,
        Metric::P50,
        Metric::P25,
        Metric::Min,
        Metric::Max,
        Metric::Median,
        Metric::Average,
        Metric::Stddev,
    ];

    /// The name used on the command line, in configuration and in rendered
    /// headers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Metric::Count => "count",
            Metric::Sum => "sum",
            Metric::P99 => "p99",
            Metric::P97 => "p97",
            Metric::P95 => "p95",
            Metric::P90 => "p90",
            Metric::P75 => "p75",
            Metric::P50 => "p50",
            Metric::P25 => "p25",
            Metric::Min => "min",
            Metric::Max => "max",
            Metric::Median => "median",
            Metric::Average => "average",
            Metric::Stddev => "stddev",
        }
    }

    /// The display format of this metric.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Metric::Count | Metric::Sum => Format::Integer,
            Metric::P99
            | Metric::P97
            | Metric::P95
            | Metric::P90
            | Metric::P75
            | Metric::P50
            | Metric::P25
            | Metric::Min
            | Metric::Max
            | Metric::Median
            | Metric::Average
            | Metric::Stddev => Format::Fixed,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == input)
            .ok_or_else(|| Error::UnknownField(input.to_string()))
    }
}

/// How a metric value is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// No decimal places.
    Integer,
    /// Exactly four decimal places.
    Fixed,
}

impl Format {
    /// Number of digits after the decimal point.
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Format::Integer => 0,
            Format::Fixed => 4,
        }
    }

    /// Render `value` in this format.
    #[must_use]
    pub fn apply(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision())
    }
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// The metrics rendered when the caller does not pick any.
pub enum FieldSet {
    /// count, sum, p99, p97, p95, min, max, average, median, stddev
    #[default]
    Minimal,
    /// The minimal set with p90, p75, p50 and p25 following p95.
    Full,
}

const MINIMAL_FIELDS: [Metric; 10] = [
    Metric::Count,
    Metric::Sum,
    Metric::P99,
    Metric::P97,
    Metric::P95,
    Metric::Min,
    Metric::Max,
    Metric::Average,
    Metric::Median,
    Metric::Stddev,
];

const FULL_FIELDS: [Metric; 14] = [
    Metric::Count,
    Metric::Sum,
    Metric::P99,
    Metric::P97,
    Metric::P95,
    Metric::P90,
    Metric::P75,
    Metric::P50,
    Metric::P25,
    Metric::Min,
    Metric::Max,
    Metric::Average,
    Metric::Median,
    Metric::Stddev,
];

impl FieldSet {
    /// The metrics of this set, in render order.
    #[must_use]
    pub const fn fields(self) -> &'static [Metric] {
        match self {
            FieldSet::Minimal => &MINIMAL_FIELDS,
            FieldSet::Full => &FULL_FIELDS,
        }
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSet::Minimal => f.write_str("minimal"),
            FieldSet::Full => f.write_str("full"),
        }
    }
}

impl FromStr for FieldSet {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "minimal" => Ok(FieldSet::Minimal),
            "full" => Ok(FieldSet::Full),
            _ => Err(Error::UnknownFieldSet(input.to_string())),
        }
    }
}
