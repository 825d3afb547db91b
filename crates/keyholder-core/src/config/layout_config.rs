//! Graph layout configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EDGE_HIGH_STRENGTH, DEFAULT_EDGE_MEDIUM_STRENGTH, DEFAULT_EDGE_STROKE_DIVISOR,
    DEFAULT_LAYOUT_CENTER_X, DEFAULT_LAYOUT_CENTER_Y, DEFAULT_MODULE_RADIUS,
    DEFAULT_PERSON_RADIUS,
};

/// Geometry and edge styling for the circular layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Default: 400.0.
    pub center_x: Option<f64>,
    /// Default: 300.0.
    pub center_y: Option<f64>,
    /// Outer ring radius. Default: 180.0.
    pub person_radius: Option<f64>,
    /// Inner ring radius. Default: 100.0.
    pub module_radius: Option<f64>,
    /// Strength at or above which an edge is high alert. Default: 80.
    pub edge_high_strength: Option<u8>,
    /// Strength at or above which an edge is medium. Default: 50.
    pub edge_medium_strength: Option<u8>,
    /// Strength units per stroke-width unit. Default: 30.0.
    pub edge_stroke_divisor: Option<f64>,
}

impl LayoutConfig {
    pub fn effective_center(&self) -> (f64, f64) {
        (
            self.center_x.unwrap_or(DEFAULT_LAYOUT_CENTER_X),
            self.center_y.unwrap_or(DEFAULT_LAYOUT_CENTER_Y),
        )
    }

    pub fn effective_person_radius(&self) -> f64 {
        self.person_radius.unwrap_or(DEFAULT_PERSON_RADIUS)
    }

    pub fn effective_module_radius(&self) -> f64 {
        self.module_radius.unwrap_or(DEFAULT_MODULE_RADIUS)
    }

    pub fn effective_edge_high_strength(&self) -> u8 {
        self.edge_high_strength.unwrap_or(DEFAULT_EDGE_HIGH_STRENGTH)
    }

    pub fn effective_edge_medium_strength(&self) -> u8 {
        self.edge_medium_strength.unwrap_or(DEFAULT_EDGE_MEDIUM_STRENGTH)
    }

    pub fn effective_edge_stroke_divisor(&self) -> f64 {
        self.edge_stroke_divisor.unwrap_or(DEFAULT_EDGE_STROKE_DIVISOR)
    }
}
