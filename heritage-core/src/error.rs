//! Errors raised by the estimation engine.
//!
//! Every failure is a synchronous consequence of bad input or bad catalog
//! state. Callers map these to user-facing messages; nothing here is
//! retryable.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{GuideId, SiteId};

/// Failure returned by [`estimate`](crate::estimate) and
/// [`TripEstimator::estimate`](crate::TripEstimator::estimate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The request or a resolved catalog record was malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A requested identifier is absent from its catalog.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Which monetary field of a catalog record failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostField {
    /// One-time entry fee of a site.
    EntryFee,
    /// Per-day food allowance of a site.
    FoodCostPerDay,
    /// Per-day transport allowance of a site.
    TransportCostPerDay,
    /// Activity charge of a site.
    ActivityCost,
    /// Daily fee of a guide.
    FeePerDay,
}

impl CostField {
    /// Return the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntryFee => "entry_fee",
            Self::FoodCostPerDay => "food_cost_per_day",
            Self::TransportCostPerDay => "transport_cost_per_day",
            Self::ActivityCost => "activity_cost",
            Self::FeePerDay => "fee_per_day",
        }
    }
}

impl std::fmt::Display for CostField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request or catalog data rejected before any cost is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The request selected no sites.
    #[error("at least one site must be selected")]
    EmptySelection,
    /// A site id appears more than once in the request.
    #[error("site {id} is selected more than once")]
    DuplicateSite {
        /// Identifier that was repeated.
        id: SiteId,
    },
    /// The trip length was zero.
    #[error("trip must last at least one day")]
    NonPositiveDays,
    /// The budget was zero or negative.
    #[error("budget must be positive, got {budget}")]
    NonPositiveBudget {
        /// Budget supplied by the caller.
        budget: Decimal,
    },
    /// A catalog record carried a negative amount.
    #[error("{record} has negative {field}: {amount}")]
    NegativeAmount {
        /// Identifier of the offending site or guide.
        record: String,
        /// Field holding the negative amount.
        field: CostField,
        /// The rejected amount.
        amount: Decimal,
    },
    /// A site declared a zero visit duration.
    #[error("site {id} must take at least one minute to visit")]
    ZeroVisitTime {
        /// Identifier of the offending site.
        id: SiteId,
    },
    /// An amount or total exceeded the representable range.
    #[error("{what} exceeds the supported range")]
    AmountOutOfRange {
        /// Description of the overflowing quantity.
        what: &'static str,
    },
}

/// A request referenced an identifier missing from the supplied catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// Unknown site identifier.
    #[error("site {0} not found in catalog")]
    Site(SiteId),
    /// Unknown guide identifier.
    #[error("guide {0} not found in catalog")]
    Guide(GuideId),
}

/// Alias for the engine error type.
pub type Error = EstimateError;
