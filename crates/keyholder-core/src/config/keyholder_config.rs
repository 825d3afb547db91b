//! Top-level Keyholder configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, SimulationConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`KEYHOLDER_*`)
/// 3. Project config (`keyholder.toml` in project root)
/// 4. User config (`~/.keyholder/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct KeyholderConfig {
    pub layout: LayoutConfig,
    pub simulation: SimulationConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub person_radius: Option<f64>,
    pub module_radius: Option<f64>,
    pub baseline_recovery_weeks: Option<u32>,
}

impl KeyholderConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &KeyholderConfig) -> Result<(), ConfigError> {
        let layout = &config.layout;
        let (cx, cy) = layout.effective_center();
        if !cx.is_finite() || !cy.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "layout.center".to_string(),
                message: "must be finite".to_string(),
            });
        }

        let person_radius = layout.effective_person_radius();
        let module_radius = layout.effective_module_radius();
        for (field, radius) in [
            ("layout.person_radius", person_radius),
            ("layout.module_radius", module_radius),
        ] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if person_radius <= module_radius {
            return Err(ConfigError::ValidationFailed {
                field: "layout.person_radius".to_string(),
                message: "must be greater than layout.module_radius".to_string(),
            });
        }

        let high = layout.effective_edge_high_strength();
        let medium = layout.effective_edge_medium_strength();
        if high > 100 || medium > high {
            return Err(ConfigError::ValidationFailed {
                field: "layout.edge_high_strength".to_string(),
                message: "thresholds must satisfy medium <= high <= 100".to_string(),
            });
        }

        let divisor = layout.effective_edge_stroke_divisor();
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "layout.edge_stroke_divisor".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the user config path: `~/.keyholder/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut KeyholderConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: KeyholderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut KeyholderConfig, other: &KeyholderConfig) {
        let (bl, ol) = (&mut base.layout, &other.layout);
        merge_opt(&mut bl.center_x, ol.center_x);
        merge_opt(&mut bl.center_y, ol.center_y);
        merge_opt(&mut bl.person_radius, ol.person_radius);
        merge_opt(&mut bl.module_radius, ol.module_radius);
        merge_opt(&mut bl.edge_high_strength, ol.edge_high_strength);
        merge_opt(&mut bl.edge_medium_strength, ol.edge_medium_strength);
        merge_opt(&mut bl.edge_stroke_divisor, ol.edge_stroke_divisor);

        let (bs, os) = (&mut base.simulation, &other.simulation);
        merge_opt(&mut bs.critical_recovery_weeks, os.critical_recovery_weeks);
        merge_opt(&mut bs.high_recovery_weeks, os.high_recovery_weeks);
        merge_opt(&mut bs.baseline_recovery_weeks, os.baseline_recovery_weeks);
    }

    /// Apply environment variable overrides.
    /// Pattern: `KEYHOLDER_LAYOUT_PERSON_RADIUS`, `KEYHOLDER_SIMULATION_HIGH_WEEKS`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut KeyholderConfig) {
        env_override("KEYHOLDER_LAYOUT_CENTER_X", &mut config.layout.center_x);
        env_override("KEYHOLDER_LAYOUT_CENTER_Y", &mut config.layout.center_y);
        env_override(
            "KEYHOLDER_LAYOUT_PERSON_RADIUS",
            &mut config.layout.person_radius,
        );
        env_override(
            "KEYHOLDER_LAYOUT_MODULE_RADIUS",
            &mut config.layout.module_radius,
        );
        env_override(
            "KEYHOLDER_SIMULATION_CRITICAL_WEEKS",
            &mut config.simulation.critical_recovery_weeks,
        );
        env_override(
            "KEYHOLDER_SIMULATION_HIGH_WEEKS",
            &mut config.simulation.high_recovery_weeks,
        );
        env_override(
            "KEYHOLDER_SIMULATION_BASELINE_WEEKS",
            &mut config.simulation.baseline_recovery_weeks,
        );
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut KeyholderConfig, cli: &CliOverrides) {
        merge_opt(&mut config.layout.person_radius, cli.person_radius);
        merge_opt(&mut config.layout.module_radius, cli.module_radius);
        merge_opt(
            &mut config.simulation.baseline_recovery_weeks,
            cli.baseline_recovery_weeks,
        );
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn merge_opt<T: Copy>(base: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *base = other;
    }
}

fn env_override<T: std::str::FromStr>(key: &str, slot: &mut Option<T>) {
    if let Ok(val) = std::env::var(key) {
        match val.parse::<T>() {
            Ok(v) => *slot = Some(v),
            Err(_) => tracing::debug!(key, value = %val, "ignoring unparseable env override"),
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
