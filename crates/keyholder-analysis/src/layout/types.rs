//! Layout types: points, geometry, placed nodes.

use keyholder_core::config::LayoutConfig;
use keyholder_core::errors::LayoutError;
use keyholder_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Center and ring radii. The people ring is always outside the module ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutGeometry {
    center: Point,
    person_radius: f64,
    module_radius: f64,
}

impl LayoutGeometry {
    pub fn new(center: Point, person_radius: f64, module_radius: f64) -> Result<Self, LayoutError> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(LayoutError::InvalidGeometry {
                message: "center must be finite".to_string(),
            });
        }
        if !person_radius.is_finite() || !module_radius.is_finite() || module_radius <= 0.0 {
            return Err(LayoutError::InvalidGeometry {
                message: "radii must be positive finite numbers".to_string(),
            });
        }
        if person_radius <= module_radius {
            return Err(LayoutError::InvalidGeometry {
                message: format!(
                    "person radius {person_radius} must exceed module radius {module_radius}"
                ),
            });
        }
        Ok(Self {
            center,
            person_radius,
            module_radius,
        })
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        let (x, y) = config.effective_center();
        Self::new(
            Point::new(x, y),
            config.effective_person_radius(),
            config.effective_module_radius(),
        )
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn person_radius(&self) -> f64 {
        self.person_radius
    }

    pub fn module_radius(&self) -> f64 {
        self.module_radius
    }

    /// Point at `angle` radians on a circle of `radius` around the center.
    pub fn on_ring(&self, radius: f64, angle: f64) -> Point {
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }
}

impl Default for LayoutGeometry {
    /// Center (400, 300), person radius 180, module radius 100.
    fn default() -> Self {
        let config = LayoutConfig::default();
        let (x, y) = config.effective_center();
        Self {
            center: Point::new(x, y),
            person_radius: config.effective_person_radius(),
            module_radius: config.effective_module_radius(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    Module,
}

/// A positioned node with the tier used to color it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub position: Point,
    /// Radians.
    pub angle: f64,
    pub tier: Tier,
}

/// Positions for one visible set. People first, then modules, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    nodes: Vec<PlacedNode>,
    #[serde(skip)]
    people: FxHashMap<String, usize>,
    #[serde(skip)]
    modules: FxHashMap<String, usize>,
}

impl Layout {
    pub(crate) fn push(&mut self, node: PlacedNode) {
        let idx = self.nodes.len();
        let index = match node.kind {
            NodeKind::Person => &mut self.people,
            NodeKind::Module => &mut self.modules,
        };
        index.entry(node.id.clone()).or_insert(idx);
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn people(&self) -> impl Iterator<Item = &PlacedNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Person)
    }

    pub fn modules(&self) -> impl Iterator<Item = &PlacedNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Module)
    }

    pub fn person_position(&self, id: &str) -> Option<Point> {
        self.people.get(id).map(|&idx| self.nodes[idx].position)
    }

    pub fn module_position(&self, id: &str) -> Option<Point> {
        self.modules.get(id).map(|&idx| self.nodes[idx].position)
    }

    /// Id → position for every placed node.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Point)> {
        self.nodes.iter().map(|n| (n.id.as_str(), n.position))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
