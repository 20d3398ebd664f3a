use chrono::{Datelike, Local};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::events::EventSpec;

const CONFIG_PATH_ENV_VAR: &str = "GRIDCAL_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("gridcal").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".gridcal.toml"));
    }

    locations
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Year to build when none is given on the command line.
    pub year: Option<i32>,
    /// Event text file in `Mmm d: description` format.
    pub events_file: Option<PathBuf>,
    /// Add the sample holidays to every calendar.
    pub sample_holidays: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Events placed on every calendar in addition to the event file.
    pub events: Vec<EventSpec>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::from(err).with_msg(&format!("could not read '{}'", path.display()))
        })?;

        Config::from_toml(&content)
    }

    pub fn year_or_current(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }
}

/// Loads the config at `path` if given, otherwise the first existing file of
/// the default locations. Without any config file the defaults are used.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::new(
                ErrorKind::ConfigNotFound,
                &path.display().to_string(),
            ));
        }
        log::info!("Loading config from '{}'", path.display());
        return Config::from_path(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.exists())
    {
        Some(location) => {
            log::info!("Loading config from '{}'", location.display());
            Config::from_path(&location)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r#"
            year = 2024
            events_file = "events.txt"
            sample_holidays = true
            pretty = true

            [[events]]
            month = 6
            date = 4
            event = "Picnic"
            "#,
        )
        .unwrap();

        assert_eq!(config.year, Some(2024));
        assert_eq!(config.events_file, Some(PathBuf::from("events.txt")));
        assert!(config.sample_holidays);
        assert!(config.pretty);
        assert_eq!(config.events, vec![EventSpec::new(6, 4, "Picnic".to_owned())]);
        assert_eq!(config.year_or_current(), 2024);
    }

    #[test]
    fn invalid_config_is_a_parse_error() {
        let err = Config::from_toml("year = \"soon\"").unwrap_err();

        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/gridcal.toml"))).unwrap_err();

        assert!(matches!(err.kind, ErrorKind::ConfigNotFound));
    }

    #[test]
    fn env_var_location_comes_first() {
        env::set_var(CONFIG_PATH_ENV_VAR, "/tmp/gridcal-test.toml");
        let locations = find_configfile_locations();
        env::remove_var(CONFIG_PATH_ENV_VAR);

        assert_eq!(locations[0], PathBuf::from("/tmp/gridcal-test.toml"));
    }
}
