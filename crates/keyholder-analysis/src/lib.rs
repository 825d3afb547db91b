//! keyholder-analysis: the risk and departure-simulation engine.
//!
//! - Classifier: bus factor, concentration and person-impact tiers
//! - Simulation: departure impact, ranking, last-request-wins tracking
//! - Layout: deterministic two-ring placement, visibility filter, edges
//! - Insights: summary, profiles, alerts, sorting, knowledge graph

pub mod classifier;
pub mod insights;
pub mod layout;
pub mod simulation;

pub use classifier::{
    classify, classify_module_by_bus_factor, classify_module_by_concentration,
    classify_person_impact, ClassificationKind, PersonImpact, Tier,
};
pub use insights::{derive_alerts, KnowledgeGraph, ModuleProfile, PersonProfile, RiskSummary};
pub use layout::{
    compute_edges, compute_layout, EdgeStyler, GraphView, Layout, LayoutGeometry, Point,
    VisibilityFilter,
};
pub use simulation::{
    rank_departures, simulate_departure, DepartureSimulator, ImpactLevel, RequestTracker,
    SimulationResult,
};
