//! Edge rendering between placed people and modules.

use keyholder_core::config::LayoutConfig;
use keyholder_core::constants::MIN_EDGE_STROKE_WIDTH;
use keyholder_core::types::{DependencyLink, LinkType, ModuleId, PersonId};
use serde::{Deserialize, Serialize};

use super::types::{Layout, Point};

/// Color tier for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    High,
    Medium,
    Low,
}

/// Maps link strength to color tier, stroke width and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyler {
    high_min: u8,
    medium_min: u8,
    stroke_divisor: f64,
}

impl EdgeStyler {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            high_min: config.effective_edge_high_strength(),
            medium_min: config.effective_edge_medium_strength(),
            stroke_divisor: config.effective_edge_stroke_divisor(),
        }
    }

    pub fn tier(&self, strength: u8) -> StrengthTier {
        if strength >= self.high_min {
            StrengthTier::High
        } else if strength >= self.medium_min {
            StrengthTier::Medium
        } else {
            StrengthTier::Low
        }
    }

    /// `max(1, strength / divisor)`; non-decreasing in strength.
    pub fn stroke_width(&self, strength: u8) -> f64 {
        (f64::from(strength) / self.stroke_divisor).max(MIN_EDGE_STROKE_WIDTH)
    }

    /// `strength / 100`, capped at 1.
    pub fn opacity(&self, strength: u8) -> f64 {
        (f64::from(strength) / 100.0).min(1.0)
    }
}

impl Default for EdgeStyler {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRendering {
    pub source: PersonId,
    pub target: ModuleId,
    pub link_type: LinkType,
    pub strength: u8,
    pub from: Point,
    pub to: Point,
    pub tier: StrengthTier,
    pub stroke_width: f64,
    pub opacity: f64,
}

/// Edges whose person and module are both placed in `layout`, in link order.
pub fn compute_edges(
    links: &[DependencyLink],
    layout: &Layout,
    styler: &EdgeStyler,
) -> Vec<EdgeRendering> {
    links
        .iter()
        .filter_map(|link| {
            let from = layout.person_position(link.source.as_str())?;
            let to = layout.module_position(link.target.as_str())?;
            Some(EdgeRendering {
                source: link.source.clone(),
                target: link.target.clone(),
                link_type: link.link_type,
                strength: link.strength,
                from,
                to,
                tier: styler.tier(link.strength),
                stroke_width: styler.stroke_width(link.strength),
                opacity: styler.opacity(link.strength),
            })
        })
        .collect()
}

/// Summary of the drawn edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EdgeStats {
    pub total: usize,
    pub high_strength: usize,
    /// Rounded mean strength; 0 with no edges.
    pub average_strength: u32,
}

impl EdgeStats {
    pub fn from_edges(edges: &[EdgeRendering]) -> Self {
        if edges.is_empty() {
            return Self::default();
        }
        let sum: u64 = edges.iter().map(|e| u64::from(e.strength)).sum();
        let average = (sum as f64 / edges.len() as f64).round() as u32;
        Self {
            total: edges.len(),
            high_strength: edges.iter().filter(|e| e.tier == StrengthTier::High).count(),
            average_strength: average,
        }
    }
}
