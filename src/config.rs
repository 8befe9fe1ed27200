//! Run configuration for the `city_route` binary.
//!
//! Defaults come from environment variables, then command-line flags
//! override them:
//!
//! | Variable           | Flag       | Meaning                                  |
//! |--------------------|------------|------------------------------------------|
//! | `CITY_SSSP_GRAPH`  | `--graph`  | JSON graph file (built-in graph if unset) |
//! | `CITY_SSSP_FROM`   | `--from`   | source city (first city if unset)        |
//! | `CITY_SSSP_TO`     | `--to`     | destination name or index (prompt if unset) |
//! | `CITY_SSSP_FORMAT` | `--json`   | `text` or `json`                         |
//! | `CITY_SSSP_LOG`    |            | tracing filter, default `warn`           |

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue { name: "CITY_SSSP_FORMAT", value: s.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub graph: Option<PathBuf>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub format: OutputFormat,
    pub log_filter: String,
    pub show_help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            graph: None,
            from: None,
            to: None,
            format: OutputFormat::Text,
            log_filter: "warn".to_string(),
            show_help: false,
        }
    }
}

pub const USAGE: &str = "usage: city_route [--graph <file.json>] [--from <city>] [--to <city|index>] [--json]";

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let format = match non_empty("CITY_SSSP_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.format,
        };
        Ok(Self {
            graph: non_empty("CITY_SSSP_GRAPH").map(PathBuf::from),
            from: non_empty("CITY_SSSP_FROM"),
            to: non_empty("CITY_SSSP_TO"),
            format,
            log_filter: non_empty("CITY_SSSP_LOG").unwrap_or(defaults.log_filter),
            show_help: false,
        })
    }

    /// Applies command-line flags on top of `self`.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--graph" => {
                    self.graph = Some(args.next().ok_or(ConfigError::MissingValue("--graph"))?.into())
                }
                "--from" => self.from = Some(args.next().ok_or(ConfigError::MissingValue("--from"))?),
                "--to" => self.to = Some(args.next().ok_or(ConfigError::MissingValue("--to"))?),
                "--json" => self.format = OutputFormat::Json,
                "-h" | "--help" => self.show_help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(self)
    }
}
