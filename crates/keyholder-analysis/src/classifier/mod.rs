//! Risk Classifier: pure tier functions shared by every view.

pub mod tiers;

pub use tiers::{
    classify, classify_module_by_bus_factor, classify_module_by_concentration,
    classify_person_impact, ClassificationKind, PersonImpact, Tier,
};
