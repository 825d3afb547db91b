//! One-call graph view: filter, place, connect.

use keyholder_core::types::Snapshot;
use serde::Serialize;
use tracing::debug;

use super::edges::{compute_edges, EdgeRendering, EdgeStats, EdgeStyler};
use super::filter::VisibilityFilter;
use super::radial::compute_layout;
use super::types::{Layout, LayoutGeometry};

/// Everything a renderer needs for the current visible set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub layout: Layout,
    pub edges: Vec<EdgeRendering>,
    pub stats: EdgeStats,
}

impl GraphView {
    pub fn build(
        snapshot: &Snapshot,
        filter: &VisibilityFilter,
        geometry: &LayoutGeometry,
        styler: &EdgeStyler,
    ) -> Self {
        let visible = filter.apply(snapshot);
        let layout = compute_layout(&visible.people, &visible.modules, geometry);
        let edges = compute_edges(snapshot.links(), &layout, styler);
        let stats = EdgeStats::from_edges(&edges);

        debug!(
            people = visible.people.len(),
            modules = visible.modules.len(),
            edges = edges.len(),
            "graph view built"
        );

        Self {
            layout,
            edges,
            stats,
        }
    }
}
