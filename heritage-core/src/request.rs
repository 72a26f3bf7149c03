//! Estimate requests and their validation.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::{GuideId, SiteId, ValidationError};

/// Parameters for a trip estimate.
///
/// # Examples
/// ```
/// use heritage_core::{EstimateRequest, SiteId};
/// use rust_decimal_macros::dec;
///
/// let request = EstimateRequest {
///     site_ids: vec![SiteId::from("bateshwar"), SiteId::from("ravines")],
///     budget: dec!(10000),
///     days: 3,
///     guide_id: None,
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateRequest {
    /// Sites to visit, in order; must be non-empty and distinct.
    pub site_ids: Vec<SiteId>,
    /// Spending ceiling; must be positive.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::wire::amount"))]
    pub budget: Decimal,
    /// Trip length in days; must be positive.
    pub days: u32,
    /// Optional guide to hire for every trip day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub guide_id: Option<GuideId>,
}

impl EstimateRequest {
    /// Check the request shape without touching any catalog.
    ///
    /// Checks run in a fixed order: empty selection, duplicate sites, trip
    /// length, budget.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.site_ids.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        let mut seen = BTreeSet::new();
        if let Some(repeated) = self.site_ids.iter().find(|id| !seen.insert(*id)) {
            return Err(ValidationError::DuplicateSite {
                id: repeated.clone(),
            });
        }
        if self.days == 0 {
            return Err(ValidationError::NonPositiveDays);
        }
        if self.budget <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBudget {
                budget: self.budget,
            });
        }
        Ok(())
    }
}
