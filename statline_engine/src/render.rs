//! Render a chosen subset of a [`Summary`] as delimited text.
//!
//! Output for one call is built completely in memory before anything is
//! written, so a failing call never leaves partial output behind.

use std::{fmt, io::Write, str::FromStr};

use serde::Deserialize;

use crate::{Error, FieldSet, Metric, Summary};

/// The default delimiter, a single tab.
pub const DEFAULT_DELIMITER: &str = "\t";

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Arrangement of rendered fields.
pub enum Layout {
    /// A header line of field names followed by a single line of values.
    #[default]
    Row,
    /// One `<name><delimiter><value>` line per field.
    Column,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Row => f.write_str("row"),
            Layout::Column => f.write_str("column"),
        }
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "row" => Ok(Layout::Row),
            "column" => Ok(Layout::Column),
            _ => Err(Error::UnknownLayout(input.to_string())),
        }
    }
}

/// What to render and how.
///
/// Fields may repeat and appear in any order; they are rendered exactly as
/// listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    fields: Vec<Metric>,
    values_only: bool,
    delimiter: String,
    layout: Layout,
}

impl Default for RenderSpec {
    fn default() -> Self {
        Self::new(FieldSet::default().fields().to_vec())
    }
}

impl RenderSpec {
    /// Render `fields` with a header, tab delimited, in [`Layout::Row`].
    #[must_use]
    pub fn new(fields: Vec<Metric>) -> Self {
        Self {
            fields,
            values_only: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
            layout: Layout::default(),
        }
    }

    /// Like [`RenderSpec::new`] but from metric names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for the first name that is not a
    /// [`Metric`].
    pub fn from_names<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Metric>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(fields))
    }

    /// Suppress the header, or the field names in [`Layout::Column`].
    #[must_use]
    pub fn with_values_only(mut self, values_only: bool) -> Self {
        self.values_only = values_only;
        self
    }

    /// Separate columns, or names from values, with `delimiter`.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Arrange the output per `layout`.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// The fields to render, in order.
    #[must_use]
    pub fn fields(&self) -> &[Metric] {
        &self.fields
    }

    /// Whether field names are suppressed.
    #[must_use]
    pub fn values_only(&self) -> bool {
        self.values_only
    }

    /// The delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }
}

/// Render `summary` per `spec`. Every line, including the last, ends in a
/// newline. No fields render as the empty string.
#[must_use]
pub fn render(summary: &Summary, spec: &RenderSpec) -> String {
    let mut out = String::new();
    if spec.fields.is_empty() {
        return out;
    }

    let value = |metric: Metric| metric.format().apply(summary[metric]);
    match spec.layout {
        Layout::Row => {
            if !spec.values_only {
                let header: Vec<&str> = spec.fields.iter().map(|m| m.name()).collect();
                out.push_str(&header.join(spec.delimiter.as_str()));
                out.push('\n');
            }
            let values: Vec<String> = spec.fields.iter().map(|m| value(*m)).collect();
            out.push_str(&values.join(spec.delimiter.as_str()));
            out.push('\n');
        }
        Layout::Column => {
            for metric in &spec.fields {
                if !spec.values_only {
                    out.push_str(metric.name());
                    out.push_str(&spec.delimiter);
                }
                out.push_str(&value(*metric));
                out.push('\n');
            }
        }
    }
    out
}

/// Render `summary` per `spec` into `writer` with a single write.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn render_to<W>(summary: &Summary, spec: &RenderSpec, writer: &mut W) -> Result<(), Error>
where
    W: Write,
{
    writer.write_all(render(summary, spec).as_bytes())?;
    Ok(())
}

/// Render the metrics called `names` with the default header, delimiter and
/// layout.
///
/// # Errors
///
/// Returns [`Error::UnknownField`] if any name is not a [`Metric`]. Nothing is
/// rendered in that case.
pub fn render_names<I, S>(summary: &Summary, names: I) -> Result<String, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let spec = RenderSpec::from_names(names)?;
    Ok(render(summary, &spec))
}
