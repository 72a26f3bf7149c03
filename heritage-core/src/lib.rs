//! Core estimation engine for heritage trip planning.
//!
//! Given a selection of catalog sites, a trip length, a budget and an
//! optional guide, the engine prices every site, folds the costs into trip
//! totals and returns advisory suggestions when the plan overruns its budget
//! or its available touring time. Preset packages expand into ordinary
//! estimate requests.
//!
//! The engine performs no I/O. Catalog data arrives through the
//! [`SiteCatalog`], [`GuideCatalog`] and [`PresetCatalog`] traits, and every
//! call is a pure function of its inputs.

#![forbid(unsafe_code)]

mod advisor;
mod catalog;
mod cost;
mod error;
mod estimator;
mod ids;
mod itinerary;
mod preset;
mod request;
mod trip;
#[cfg(feature = "serde")]
mod wire;

pub use advisor::{Advice, Assessment, RULES, Rule, SMALL_SELECTION, TOURING_DAY_MINS, advise};
pub use catalog::{
    Catalog, CatalogDocument, CatalogError, DEFAULT_VISIT_MINUTES, Guide, GuideCatalog,
    PresetCatalog, Site, SiteCatalog,
};
pub use cost::{CostLine, CostModel, SiteCost};
pub use error::{CostField, Error, EstimateError, NotFoundError, ValidationError};
pub use estimator::{CatalogEstimator, EstimateResult, Estimator, TripEstimator, estimate};
pub use ids::{GuideId, PresetId, SiteId};
pub use itinerary::{TRANSIT_ALLOWANCE_MINS, Totals, aggregate};
pub use preset::PresetPackage;
pub use request::EstimateRequest;
pub use trip::{TripDraft, TripDraftError};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
