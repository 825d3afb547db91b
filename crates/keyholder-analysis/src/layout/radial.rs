//! Two-ring radial placement.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use keyholder_core::types::{Module, Person};

use super::types::{Layout, LayoutGeometry, NodeKind, PlacedNode};
use crate::classifier::{classify_person_impact, Tier};

/// Angle of person `index` of `total`: `(i/P)·2π − π/2`, starting at the top.
/// `None` for an empty ring or an out-of-range index.
pub fn person_angle(index: usize, total: usize) -> Option<f64> {
    if index >= total {
        return None;
    }
    Some((index as f64 / total as f64) * TAU - FRAC_PI_2)
}

/// Angle of module `index` of `total`: `(i/M)·2π − π/2 + π/M`, half a step
/// off the person spokes. `None` for an empty ring or an out-of-range index.
pub fn module_angle(index: usize, total: usize) -> Option<f64> {
    if index >= total {
        return None;
    }
    Some((index as f64 / total as f64) * TAU - FRAC_PI_2 + PI / total as f64)
}

/// Place the visible people and modules.
///
/// Either slice may be empty; that ring is simply left empty.
pub fn compute_layout(
    people: &[&Person],
    modules: &[&Module],
    geometry: &LayoutGeometry,
) -> Layout {
    let mut layout = Layout::default();

    let total = people.len();
    for (i, person) in people.iter().enumerate() {
        let Some(angle) = person_angle(i, total) else {
            continue;
        };
        layout.push(PlacedNode {
            id: person.id.to_string(),
            kind: NodeKind::Person,
            label: person.name.clone(),
            position: geometry.on_ring(geometry.person_radius(), angle),
            angle,
            tier: Tier::Person(classify_person_impact(person.risk_score)),
        });
    }

    let total = modules.len();
    for (i, module) in modules.iter().enumerate() {
        let Some(angle) = module_angle(i, total) else {
            continue;
        };
        layout.push(PlacedNode {
            id: module.id.to_string(),
            kind: NodeKind::Module,
            label: module.name.clone(),
            position: geometry.on_ring(geometry.module_radius(), angle),
            angle,
            tier: Tier::Module(module.risk_level),
        });
    }

    layout
}
