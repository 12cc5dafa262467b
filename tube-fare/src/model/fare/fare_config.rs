use super::{FareConfigError, FareTable};
use crate::model::trip::PeakWindow;
use config::{Config, Environment, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// built-in fare configuration, the lowest-precedence layer when loading.
pub const DEFAULT_FARE_CONFIG: &str = include_str!("fare-config.toml");

/// environment variables `TUBE_FARE__<FIELD>` override file values.
pub const ENV_PREFIX: &str = "TUBE_FARE";

/// pricing parameters for the fare engine.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FareConfig {
    /// peak fares, entry `i` is the fare for crossing `i + 1` zones
    pub peak_fares: Vec<Decimal>,
    /// off-peak fares, entry `i` is the fare for crossing `i + 1` zones
    pub off_peak_fares: Vec<Decimal>,
    /// per-day ceiling for capped ticket types
    pub daily_cap: Decimal,
    pub peak_windows: Vec<PeakWindow>,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            peak_fares: vec![
                Decimal::new(810, 2),
                Decimal::new(810, 2),
                Decimal::new(960, 2),
                Decimal::new(1170, 2),
                Decimal::new(1390, 2),
                Decimal::new(1490, 2),
            ],
            off_peak_fares: vec![
                Decimal::new(750, 2),
                Decimal::new(750, 2),
                Decimal::new(870, 2),
                Decimal::new(1060, 2),
                Decimal::new(1280, 2),
                Decimal::new(1390, 2),
            ],
            daily_cap: Decimal::new(1490, 2),
            peak_windows: vec![PeakWindow::new(6, 9), PeakWindow::new(16, 19)],
        }
    }
}

impl FareConfig {
    /// loads the fare configuration from the built-in defaults, then an
    /// optional TOML file, then `TUBE_FARE__*` environment variables.
    pub fn load(config_file: Option<&Path>) -> Result<FareConfig, FareConfigError> {
        Self::load_with_env(config_file, Self::environment())
    }

    /// the `TUBE_FARE__<FIELD>` variable layer, read from the process environment.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    }

    /// loads like [`FareConfig::load`] with `environment` as the highest-precedence layer.
    pub fn load_with_env(
        config_file: Option<&Path>,
        environment: Environment,
    ) -> Result<FareConfig, FareConfigError> {
        let mut builder = Config::builder()
            .add_source(config::File::from_str(DEFAULT_FARE_CONFIG, FileFormat::Toml));
        if let Some(path) = config_file {
            let filepath = path.to_string_lossy().to_string();
            log::info!("reading fare configuration from '{filepath}'");
            builder = builder.add_source(config::File::new(&filepath, FileFormat::Toml));
        }
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| FareConfigError::ConfigReadError {
                msg: String::from("failed reading fare configuration"),
                source: e,
            })?;
        let fare_config = config.try_deserialize::<FareConfig>().map_err(|e| {
            FareConfigError::ConfigReadError {
                msg: String::from("failed decoding fare configuration"),
                source: e,
            }
        })?;
        fare_config.validate()?;
        Ok(fare_config)
    }

    pub fn validate(&self) -> Result<(), FareConfigError> {
        self.peak_table()?;
        self.off_peak_table()?;
        if self.daily_cap.is_sign_negative() {
            return Err(FareConfigError::InvalidConfiguration(format!(
                "daily cap must be non-negative, found {}",
                self.daily_cap
            )));
        }
        for window in self.peak_windows.iter() {
            if window.start_hour >= window.end_hour || window.end_hour > 24 {
                return Err(FareConfigError::InvalidConfiguration(format!(
                    "peak window [{}, {}) is not a valid range of hours",
                    window.start_hour, window.end_hour
                )));
            }
        }
        Ok(())
    }

    pub fn peak_table(&self) -> Result<FareTable, FareConfigError> {
        FareTable::new(self.peak_fares.clone())
            .map_err(|e| FareConfigError::InvalidConfiguration(format!("peak_fares: {e}")))
    }

    pub fn off_peak_table(&self) -> Result<FareTable, FareConfigError> {
        FareTable::new(self.off_peak_fares.clone())
            .map_err(|e| FareConfigError::InvalidConfiguration(format!("off_peak_fares: {e}")))
    }

    /// the configuration as TOML, in the same layout as the built-in defaults.
    pub fn to_toml(&self) -> Result<String, FareConfigError> {
        toml::to_string_pretty(self).map_err(|e| FareConfigError::EncodeError(e.to_string()))
    }
}
