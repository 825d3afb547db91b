//! Graph Layout Engine: deterministic two-ring placement.
//!
//! People sit on the outer ring, modules on the inner ring phase-shifted by
//! half a step. Layout is recomputed from scratch for each visible set;
//! identical input order yields identical coordinates.

pub mod edges;
pub mod filter;
pub mod radial;
pub mod types;
pub mod view;

pub use edges::{compute_edges, EdgeRendering, EdgeStats, EdgeStyler, StrengthTier};
pub use filter::{RiskFilter, VisibilityFilter, VisibleSet};
pub use radial::{compute_layout, module_angle, person_angle};
pub use types::{Layout, LayoutGeometry, NodeKind, PlacedNode, Point};
pub use view::GraphView;
