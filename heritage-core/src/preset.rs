//! Curated preset packages and their expansion into estimate requests.

use rust_decimal::Decimal;

use crate::{EstimateRequest, GuideId, PresetId, SiteId};

/// A named bundle of sites, trip length and indicative cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetPackage {
    /// Catalog identifier.
    pub id: PresetId,
    /// Display name.
    pub name: String,
    /// Marketing blurb.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Sites included in the package, in visiting order.
    pub site_ids: Vec<SiteId>,
    /// Trip length in days.
    pub days: u32,
    /// Price quoted when the package was authored.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::wire::amount"))]
    pub estimated_cost: Decimal,
    /// Highlights shown alongside the package.
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Vec<String>,
}

impl PresetPackage {
    /// Construct a package with an empty description and feature list.
    #[must_use]
    pub fn new(
        id: impl Into<PresetId>,
        name: impl Into<String>,
        site_ids: Vec<SiteId>,
        days: u32,
        estimated_cost: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            site_ids,
            days,
            estimated_cost,
            features: Vec::new(),
        }
    }

    /// Expand the package into a ready-to-submit request.
    ///
    /// The authored price becomes the budget, so a catalog that changed since
    /// the package was written surfaces as live suggestions. No validation
    /// happens here; the estimator validates the request as usual.
    ///
    /// # Examples
    /// ```
    /// use heritage_core::PresetPackage;
    /// use rust_decimal_macros::dec;
    ///
    /// let preset = PresetPackage::new(
    ///     "budget-explorer",
    ///     "Budget Explorer",
    ///     vec!["bateshwar".into(), "ravines".into(), "garhi".into()],
    ///     2,
    ///     dec!(4000),
    /// );
    /// let request = preset.to_request(None);
    /// assert_eq!(request.budget, dec!(4000));
    /// assert_eq!(request.days, 2);
    /// assert_eq!(request.site_ids.len(), 3);
    /// ```
    #[must_use]
    pub fn to_request(&self, guide_id: Option<GuideId>) -> EstimateRequest {
        EstimateRequest {
            site_ids: self.site_ids.clone(),
            budget: self.estimated_cost,
            days: self.days,
            guide_id,
        }
    }
}
