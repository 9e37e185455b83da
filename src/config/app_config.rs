//! Application configuration sections and TOML loading.
//!
//! Every constant the generators and the comparison arithmetic depend on is
//! a field here with a default matching the original value, ensuring
//! zero-change behavior when no config file is present.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Root configuration for a deployment.
///
/// Load with `AppConfig::load()` which searches:
/// 1. `$FIELDPLAN_CONFIG` env var
/// 2. `./fieldplan.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Entity store location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Unit conversion factors, country rate table, emission factors
    #[serde(default)]
    pub economics: EconomicsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("fieldplan_db")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Economic and physical constants.
///
/// The conversion factors and the per-country G&G rate table were inline
/// constants in the original system with no documented provenance; they are
/// configuration here so a deployment can correct them without a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsConfig {
    /// Barrels per standard cubic metre of oil.
    #[serde(default = "default_bbl_per_sm3")]
    pub bbl_per_sm3: f64,
    /// Standard cubic feet per standard cubic metre of gas.
    #[serde(default = "default_scf_per_sm3")]
    pub scf_per_sm3: f64,
    /// Sm3 of gas per Sm3 of oil equivalent.
    #[serde(default = "default_oil_equivalent_factor")]
    pub oil_equivalent_factor: f64,

    /// Annual G&G admin cost per country (uppercase names).
    #[serde(default = "default_country_rates")]
    pub g_and_g_country_rates: HashMap<String, f64>,
    /// Annual G&G admin cost for countries not in the table.
    #[serde(default = "default_country_fallback_rate")]
    pub g_and_g_default_rate: f64,

    /// Tonnes of CO2 emitted per produced Sm3 of oil.
    #[serde(default = "default_co2_per_oil_sm3")]
    pub co2_per_oil_sm3: f64,
    /// Tonnes of CO2 emitted per Sm3 of gas produced, flared or burned as fuel.
    #[serde(default = "default_co2_per_gas_sm3")]
    pub co2_per_gas_sm3: f64,

    /// DG4 date assigned to cases created without one.
    #[serde(default = "default_dg4_date")]
    pub default_dg4_date: NaiveDate,
}

const fn default_bbl_per_sm3() -> f64 {
    6.29
}

const fn default_scf_per_sm3() -> f64 {
    35.315
}

const fn default_oil_equivalent_factor() -> f64 {
    5.61
}

fn default_country_rates() -> HashMap<String, f64> {
    HashMap::from([
        ("NORWAY".to_string(), 1.0),
        ("UK".to_string(), 1.0),
        ("BRAZIL".to_string(), 3.0),
        ("CANADA".to_string(), 3.0),
        ("UNITED STATES".to_string(), 3.0),
    ])
}

const fn default_country_fallback_rate() -> f64 {
    7.0
}

const fn default_co2_per_oil_sm3() -> f64 {
    0.052
}

const fn default_co2_per_gas_sm3() -> f64 {
    0.002_34
}

#[allow(clippy::expect_used)]
fn default_dg4_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 1).expect("2030-01-01 is a valid date")
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            bbl_per_sm3: default_bbl_per_sm3(),
            scf_per_sm3: default_scf_per_sm3(),
            oil_equivalent_factor: default_oil_equivalent_factor(),
            g_and_g_country_rates: default_country_rates(),
            g_and_g_default_rate: default_country_fallback_rate(),
            co2_per_oil_sm3: default_co2_per_oil_sm3(),
            co2_per_gas_sm3: default_co2_per_gas_sm3(),
            default_dg4_date: default_dg4_date(),
        }
    }
}

impl EconomicsConfig {
    /// Annual G&G admin cost rate for a country name (any casing).
    pub fn country_rate(&self, country: &str) -> f64 {
        self.g_and_g_country_rates
            .get(country.trim().to_uppercase().as_str())
            .copied()
            .unwrap_or(self.g_and_g_default_rate)
    }

    pub fn sm3_to_bbl(&self, sm3: f64) -> f64 {
        sm3 * self.bbl_per_sm3
    }

    pub fn bbl_to_sm3(&self, bbl: f64) -> f64 {
        bbl / self.bbl_per_sm3
    }

    pub fn sm3_to_scf(&self, sm3: f64) -> f64 {
        sm3 * self.scf_per_sm3
    }

    pub fn scf_to_sm3(&self, scf: f64) -> f64 {
        scf / self.scf_per_sm3
    }

    /// Default DG4 at midnight UTC.
    pub fn default_dg4(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.default_dg4_date.and_hms_opt(0, 0, 0).unwrap_or_default())
    }
}

/// Config load failures. Always recoverable — the caller falls back to the
/// next source in the search order.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration using the standard search order:
    /// 1. `$FIELDPLAN_CONFIG` environment variable
    /// 2. `./fieldplan.toml` in the current working directory
    /// 3. Built-in defaults (original hardcoded values)
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("FIELDPLAN_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "loaded config from FIELDPLAN_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "failed to load config from FIELDPLAN_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "FIELDPLAN_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("fieldplan.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("loaded config from ./fieldplan.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "failed to load ./fieldplan.toml, using defaults");
                }
            }
        }

        info!("no fieldplan.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let economics = EconomicsConfig::default();
        assert!((economics.bbl_per_sm3 - 6.29).abs() < f64::EPSILON);
        assert!((economics.scf_per_sm3 - 35.315).abs() < f64::EPSILON);
        assert!((economics.oil_equivalent_factor - 5.61).abs() < f64::EPSILON);
        assert_eq!(economics.default_dg4_date.to_string(), "2030-01-01");
    }

    #[test]
    fn test_country_rate_lookup() {
        let economics = EconomicsConfig::default();
        assert!((economics.country_rate("NORWAY") - 1.0).abs() < f64::EPSILON);
        assert!((economics.country_rate("norway") - 1.0).abs() < f64::EPSILON);
        assert!((economics.country_rate("BRAZIL") - 3.0).abs() < f64::EPSILON);
        assert!((economics.country_rate("ELBONIA") - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_conversion_round_trip() {
        let economics = EconomicsConfig::default();
        let sm3 = 1_234_567.89;

        let oil_round_trip = economics.bbl_to_sm3(economics.sm3_to_bbl(sm3));
        let gas_round_trip = economics.scf_to_sm3(economics.sm3_to_scf(sm3));

        assert!((oil_round_trip - sm3).abs() < 1e-6);
        assert!((gas_round_trip - sm3).abs() < 1e-6);
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [economics]
            g_and_g_default_rate = 5.0
            "#,
        )
        .unwrap();

        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.server.bind_addr, "0.0.0.0");
        assert!((parsed.economics.g_and_g_default_rate - 5.0).abs() < f64::EPSILON);
        assert!((parsed.economics.bbl_per_sm3 - 6.29).abs() < f64::EPSILON);
    }
}
