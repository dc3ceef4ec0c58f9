//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, StatutoryRates, TaxSlab, TaxSlabsConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── statutory.yaml   # HRA/PF/ESI rates, PF cap, ESI ceiling, overtime
/// └── tax_slabs.yaml   # Annual income tax slabs, lowest first
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("PF cap: {}", loader.config().statutory.max_pf_amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or the slab table is not usable (empty, unordered, or with an
    /// open-ended slab anywhere but last).
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryRates>(&statutory_path)?;

        let slabs_path = path.join("tax_slabs.yaml");
        let slabs_config = Self::load_yaml::<TaxSlabsConfig>(&slabs_path)?;
        Self::check_slabs(&slabs_path, &slabs_config.slabs)?;

        debug!(
            path = %path.display(),
            slabs = slabs_config.slabs.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig {
                statutory,
                tax_slabs: slabs_config.slabs,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_slabs(path: &Path, slabs: &[TaxSlab]) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if slabs.is_empty() {
            return Err(parse_error("no tax slabs defined".to_string()));
        }

        for (index, slab) in slabs.iter().enumerate() {
            let is_last = index + 1 == slabs.len();
            match slab.upper_limit {
                None if !is_last => {
                    return Err(parse_error(format!(
                        "slab {} is open-ended but is not the last slab",
                        index + 1
                    )));
                }
                Some(upper) if upper < slab.lower_limit => {
                    return Err(parse_error(format!(
                        "slab {} has upper limit {} below lower limit {}",
                        index + 1,
                        upper,
                        slab.lower_limit
                    )));
                }
                _ => {}
            }
            if let Some(next) = slabs.get(index + 1) {
                if next.lower_limit < slab.lower_limit {
                    return Err(parse_error(format!(
                        "slab {} starts below slab {}",
                        index + 2,
                        index + 1
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the loaded payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the payroll configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
