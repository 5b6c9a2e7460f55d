use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["hour_stat.toml", "/etc/hour_stat/config.toml"];

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Entries shown in each of the most and least active listings.
    #[serde(default = "default_report_size")]
    pub report_size: usize,
}

fn default_log_path() -> String {
    "/etc/httpd/logs/access_log".to_string()
}

fn default_report_size() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_path: default_log_path(),
            report_size: default_report_size(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(config_path: Option<&str>) -> Self {
        Self::load_from(config_path, &DEFAULT_CONFIG_PATHS)
    }

    /// Tries `config_path` first, then each of `default_paths`. Missing
    /// default files are skipped quietly; a missing explicit file is warned about.
    pub fn load_from<'a>(config_path: Option<&'a str>, default_paths: &[&'a str]) -> Self {
        let paths = config_path
            .map(|path| (path, true))
            .into_iter()
            .chain(default_paths.iter().map(|&path| (path, false)));

        for (path, explicit) in paths {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!(path, "config loaded");
                    return config;
                }
                Err(Error::ConfigRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    if explicit {
                        tracing::warn!(path, "config file not found");
                    }
                }
                Err(err) => {
                    tracing::warn!(path, error = %err, "config failed to load");
                }
            }
        }

        tracing::info!("falling back to default config");
        Config::default()
    }

    /// Listing size actually used by the report; never zero.
    pub fn effective_report_size(&self) -> usize {
        self.report_size.max(1)
    }
}
