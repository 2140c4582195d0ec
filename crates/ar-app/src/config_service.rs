//! Configuration loading, saving and command-line overrides.

use std::path::Path;

use ar_core::units::{kv_from_rpm_per_volt, rpm, to_rad_per_s};
use ar_sim::Configuration;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// On-disk configuration format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse and validate a configuration. Missing fields take their defaults.
pub fn parse_config(content: &str, format: ConfigFormat) -> AppResult<Configuration> {
    let config: Configuration = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| AppError::ConfigFormat(format!("Failed to parse YAML: {}", e)))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| AppError::ConfigFormat(format!("Failed to parse JSON: {}", e)))?,
    };
    config.validate()?;
    Ok(config)
}

pub fn to_config_string(config: &Configuration, format: ConfigFormat) -> AppResult<String> {
    match format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| AppError::ConfigFormat(format!("Failed to serialize YAML: {}", e))),
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| AppError::ConfigFormat(format!("Failed to serialize JSON: {}", e))),
    }
}

/// Load a configuration from a YAML or JSON file.
pub fn load_config(path: &Path) -> AppResult<Configuration> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&content, format)?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Save a configuration to a YAML or JSON file. Invalid configurations are not written.
pub fn save_config(path: &Path, config: &Configuration) -> AppResult<()> {
    let format = ConfigFormat::from_path(path)?;
    config.validate()?;
    let content = to_config_string(config, format)?;

    std::fs::write(path, content).map_err(|e| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Values given on the command line that replace configuration fields.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sim_time_s: Option<f64>,
    pub time_step_s: Option<f64>,
    pub radial_step_m: Option<f64>,
    /// Axial freestream speed (m/s)
    pub freestream_x: Option<f64>,
    pub num_blades: Option<u32>,
    /// Initial shaft speed in rpm
    pub initial_rpm: Option<f64>,
    /// Motor velocity constant in rpm per volt
    pub kv_rpm_per_volt: Option<f64>,
}

impl ConfigOverrides {
    /// Apply the overrides, then validate the result.
    pub fn apply(&self, config: &mut Configuration) -> AppResult<()> {
        if let Some(v) = self.sim_time_s {
            config.simulation.sim_time_s = v;
        }
        if let Some(v) = self.time_step_s {
            config.simulation.time_step_s = v;
        }
        if let Some(v) = self.radial_step_m {
            config.simulation.radial_step_m = v;
        }
        if let Some(v) = self.freestream_x {
            config.flight.freestream_velocity.x = v;
        }
        if let Some(n) = self.num_blades {
            config.propeller.num_blades = n;
        }
        if let Some(v) = self.initial_rpm {
            config.initial.angular_velocity_rad_s = to_rad_per_s(rpm(v));
        }
        if let Some(kv) = self.kv_rpm_per_volt {
            config.motor.velocity_constant = kv_from_rpm_per_volt(kv);
        }
        config.validate()?;
        Ok(())
    }
}
