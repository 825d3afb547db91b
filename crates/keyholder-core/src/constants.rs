//! Shared constants for the Keyholder risk engine.

// ---- Classifier thresholds ----

/// Bus factor at or below which a module is critical.
pub const BUS_FACTOR_CRITICAL_MAX: u32 = 1;

/// Bus factor at which a module is a warning.
pub const BUS_FACTOR_WARNING: u32 = 2;

/// Concentration (percent) at or above which a module is critical.
pub const CONCENTRATION_CRITICAL_MIN: u8 = 80;

/// Concentration (percent) at or above which a module is a warning.
pub const CONCENTRATION_WARNING_MIN: u8 = 60;

/// Risk score at or above which a person is high impact.
pub const RISK_SCORE_HIGH_IMPACT_MIN: u8 = 4;

/// Risk score at which a person is medium impact.
pub const RISK_SCORE_MEDIUM_IMPACT: u8 = 3;

// ---- Snapshot domain bounds ----

pub const RISK_SCORE_MIN: u8 = 1;
pub const RISK_SCORE_MAX: u8 = 5;
pub const CONCENTRATION_MAX: u8 = 100;
pub const LINK_STRENGTH_MIN: u8 = 1;
pub const LINK_STRENGTH_MAX: u8 = 100;

// ---- Simulation defaults ----

/// Recovery weeks added per critical-impact module.
pub const DEFAULT_CRITICAL_RECOVERY_WEEKS: u32 = 8;

/// Recovery weeks added per high-impact module.
pub const DEFAULT_HIGH_RECOVERY_WEEKS: u32 = 4;

/// Onboarding/knowledge-transfer overhead added to every estimate.
pub const DEFAULT_BASELINE_RECOVERY_WEEKS: u32 = 2;

// ---- Layout defaults ----

pub const DEFAULT_LAYOUT_CENTER_X: f64 = 400.0;
pub const DEFAULT_LAYOUT_CENTER_Y: f64 = 300.0;

/// Radius of the outer (people) ring.
pub const DEFAULT_PERSON_RADIUS: f64 = 180.0;

/// Radius of the inner (module) ring.
pub const DEFAULT_MODULE_RADIUS: f64 = 100.0;

/// Link strength at or above which an edge uses the high-alert color.
pub const DEFAULT_EDGE_HIGH_STRENGTH: u8 = 80;

/// Link strength at or above which an edge uses the medium color.
pub const DEFAULT_EDGE_MEDIUM_STRENGTH: u8 = 50;

/// Strength units per stroke-width unit.
pub const DEFAULT_EDGE_STROKE_DIVISOR: f64 = 30.0;

/// Minimum stroke width for a drawn edge.
pub const MIN_EDGE_STROKE_WIDTH: f64 = 1.0;

// ---- Config ----

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "keyholder.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".keyholder";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "KEYHOLDER_LOG";

/// Fallback filter when `KEYHOLDER_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "keyholder_core=info,keyholder_analysis=info";
