/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ConfigError, LiftKind};

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_TRAVEL_TIME: u64 = 100;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub fleet: FleetConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FleetConfig {
    // Milliseconds, used by every lift without its own value
    #[serde(default = "default_travel_time")]
    pub travel_time: u64,
    pub lifts: Vec<LiftConfig>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LiftConfig {
    pub name: String,
    #[serde(default)]
    pub kind: LiftKind,
    pub travel_time: Option<u64>,
}

fn default_travel_time() -> u64 {
    DEFAULT_TRAVEL_TIME
}

impl Config {
    /// Three standard lifts and one express, all with the default travel time.
    pub fn reference() -> Config {
        let standard = |name: &str| LiftConfig {
            name: name.to_string(),
            kind: LiftKind::Standard,
            travel_time: None,
        };

        Config {
            fleet: FleetConfig {
                travel_time: DEFAULT_TRAVEL_TIME,
                lifts: vec![
                    standard("lift-1"),
                    standard("lift-2"),
                    standard("lift-3"),
                    LiftConfig {
                        name: "express".to_string(),
                        kind: LiftKind::Express,
                        travel_time: None,
                    },
                ],
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet.lifts.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }

        let mut seen = HashSet::new();
        for lift in &self.fleet.lifts {
            if !seen.insert(lift.name.as_str()) {
                return Err(ConfigError::DuplicateLift(lift.name.clone()));
            }
        }

        Ok(())
    }
}

impl FleetConfig {
    pub fn travel_time_of(&self, lift: &LiftConfig) -> Duration {
        Duration::from_millis(lift.travel_time.unwrap_or(self.travel_time))
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
