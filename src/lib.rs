//! Facade crate for the heritage trip estimation engine.
//!
//! This crate re-exports the core domain types so applications can depend on
//! a single package. The sample Chambal catalog is available behind the
//! `test-support` feature.

#![forbid(unsafe_code)]

pub use heritage_core::{
    Advice, Catalog, CatalogDocument, CatalogError, CatalogEstimator, CostLine, CostModel,
    EstimateError, EstimateRequest, EstimateResult, Estimator, Guide, GuideCatalog, GuideId,
    NotFoundError, PresetCatalog, PresetId, PresetPackage, Site, SiteCatalog, SiteId, TripDraft,
    TripDraftError, TripEstimator, ValidationError, estimate,
};

#[cfg(feature = "test-support")]
pub use heritage_core::test_support;
