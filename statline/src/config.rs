//! This module controls configuration parsing from the end user, providing a
//! convenience mechanism for the rest of the program.
//!
//! Configuration is layered. Built-in defaults come first, then a YAML
//! document from the `STATLINE_CONFIG` environment variable or a file on disk,
//! then command line [`Overrides`].
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use statline_engine::{FieldSet, Layout, Metric, RenderSpec, render::DEFAULT_DELIMITER};
use tracing::debug;

/// Environment variable holding a YAML configuration document. When set it
/// takes precedence over any configuration path.
pub const CONFIG_ENV_VAR: &str = "STATLINE_CONFIG";

/// Errors produced by [`Config`]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Error for a serde [`serde_yaml`].
    #[error("Failed to deserialize yaml: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
    /// Error reading config file
    #[error("Failed to read config file {path:?}: {source}")]
    ReadFile {
        /// File path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: Box<io::Error>,
    },
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Main configuration struct for this program
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The metrics to render, in order. When empty `field_set` decides.
    #[serde(default)]
    pub fields: Vec<Metric>,
    /// The metrics to render when `fields` is empty.
    #[serde(default)]
    pub field_set: FieldSet,
    /// Suppress the header row or field names.
    #[serde(default)]
    pub values_only: bool,
    /// Separator between columns, or between a field name and its value.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Arrangement of the output.
    #[serde(default)]
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            field_set: FieldSet::default(),
            values_only: false,
            delimiter: default_delimiter(),
            layout: Layout::default(),
        }
    }
}

/// Settings given on the command line. Anything set here replaces the
/// configured value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    /// Metric names to render, in order. Replaces `fields` when non-empty.
    pub fields: Vec<String>,
    /// Forces values-only output when true.
    pub values_only: bool,
    /// Replacement delimiter.
    pub delimiter: Option<String>,
    /// Replacement layout.
    pub layout: Option<Layout>,
    /// Replacement field set.
    pub field_set: Option<FieldSet>,
}

impl Config {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerdeYaml`] for malformed YAML, unknown keys or
    /// unknown metric names.
    pub fn from_yaml(contents: &str) -> Result<Self, Error> {
        // An empty document is not valid YAML for a struct but clearly means
        // "nothing configured".
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load configuration from the `STATLINE_CONFIG` environment variable if
    /// set, else from `path` if given, else the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        Self::load_from(env::var(CONFIG_ENV_VAR).ok(), path)
    }

    /// As [`Config::load`] but with the environment variable's value passed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_from(env_contents: Option<String>, path: Option<&Path>) -> Result<Self, Error> {
        if let Some(contents) = env_contents {
            debug!("Using config from env var '{CONFIG_ENV_VAR}'");
            return Self::from_yaml(&contents);
        }
        let Some(path) = path else {
            debug!("No configuration given, using defaults");
            return Ok(Self::default());
        };
        debug!("Attempting to open configuration file at: {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        Self::from_yaml(&contents)
    }

    /// Apply command line `overrides` on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`statline_engine::Error::UnknownField`] if an overriding field
    /// name is not a metric.
    pub fn apply(mut self, overrides: Overrides) -> Result<Self, statline_engine::Error> {
        if !overrides.fields.is_empty() {
            self.fields = overrides
                .fields
                .iter()
                .map(|name| name.parse::<Metric>())
                .collect::<Result<_, _>>()?;
        }
        self.values_only |= overrides.values_only;
        if let Some(delimiter) = overrides.delimiter {
            self.delimiter = delimiter;
        }
        if let Some(layout) = overrides.layout {
            self.layout = layout;
        }
        if let Some(field_set) = overrides.field_set {
            self.field_set = field_set;
        }
        Ok(self)
    }

    /// The metrics this configuration renders, in order.
    #[must_use]
    pub fn fields(&self) -> Vec<Metric> {
        if self.fields.is_empty() {
            self.field_set.fields().to_vec()
        } else {
            self.fields.clone()
        }
    }

    /// The [`RenderSpec`] described by this configuration.
    #[must_use]
    pub fn render_spec(&self) -> RenderSpec {
        RenderSpec::new(self.fields())
            .with_values_only(self.values_only)
            .with_delimiter(self.delimiter.clone())
            .with_layout(self.layout)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn config_deserializes_all_keys() {
        let contents = r#"
fields: [max, min, p90]
field_set: full
values_only: true
delimiter: ","
layout: column
"#;
        let config = Config::from_yaml(contents).expect("Failed to deserialize to Config");
        assert_eq!(
            config,
            Config {
                fields: vec![Metric::Max, Metric::Min, Metric::P90],
                field_set: FieldSet::Full,
                values_only: true,
                delimiter: ",".to_string(),
                layout: Layout::Column,
            }
        );
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_yaml("values_only: true\n").expect("valid yaml");
        assert!(config.values_only);
        assert_eq!(config.delimiter, "\t");
        assert_eq!(config.layout, Layout::Row);
        assert_eq!(config.fields(), FieldSet::Minimal.fields().to_vec());

        assert_eq!(Config::from_yaml("").expect("empty yaml"), Config::default());
    }

    #[test]
    fn unknown_keys_and_metrics_are_rejected() {
        assert!(matches!(
            Config::from_yaml("colour: blue\n"),
            Err(Error::SerdeYaml(_))
        ));
        assert!(matches!(
            Config::from_yaml("fields: [p999]\n"),
            Err(Error::SerdeYaml(_))
        ));
    }

    #[test]
    fn env_contents_win_over_path() {
        let missing = Path::new("/definitely/not/here/statline.yaml");
        let config = Config::load_from(Some("layout: column\n".to_string()), Some(missing))
            .expect("env contents are used, the path is never opened");
        assert_eq!(config.layout, Layout::Column);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file could not be created");
        writeln!(file, "fields: [sum, count]").expect("temp file could not be written");
        let config = Config::load_from(None, Some(file.path())).expect("file is valid");
        assert_eq!(config.fields(), vec![Metric::Sum, Metric::Count]);
    }

    #[test]
    fn unreadable_file_reports_path() {
        let missing = Path::new("/definitely/not/here/statline.yaml");
        match Config::load_from(None, Some(missing)) {
            Err(Error::ReadFile { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected ReadFile, got {other:?}"),
        }
        assert_eq!(
            Config::load_from(None, None).expect("defaults"),
            Config::default()
        );
    }

    #[test]
    fn overrides_replace_configured_values() {
        let config = Config::from_yaml("fields: [min]\ndelimiter: \",\"\n").expect("valid yaml");
        let config = config
            .apply(Overrides {
                fields: vec!["sum".to_string(), "count".to_string()],
                values_only: true,
                delimiter: None,
                layout: Some(Layout::Column),
                field_set: None,
            })
            .expect("known fields");
        assert_eq!(config.fields(), vec![Metric::Sum, Metric::Count]);
        assert!(config.values_only);
        assert_eq!(config.delimiter, ",");
        assert_eq!(config.layout, Layout::Column);
    }

    #[test]
    fn empty_overrides_keep_configuration() {
        let config = Config::from_yaml("values_only: true\nfield_set: full\n").expect("valid yaml");
        let applied = config
            .clone()
            .apply(Overrides::default())
            .expect("nothing to parse");
        assert_eq!(applied, config);
        assert_eq!(applied.fields().len(), Metric::LEN);
    }

    #[test]
    fn unknown_override_field_is_rejected() {
        let res = Config::default().apply(Overrides {
            fields: vec!["count".to_string(), "p999".to_string()],
            ..Overrides::default()
        });
        assert!(matches!(
            res,
            Err(statline_engine::Error::UnknownField(name)) if name == "p999"
        ));
    }
}
