//! Estimate orchestration.
//!
//! [`Estimator::estimate`] validates a request, resolves its identifiers
//! against caller-supplied catalogs, prices each site, folds the totals and
//! runs the advisor. It performs no I/O and keeps no state between calls, so
//! one estimator can serve concurrent requests.

use geo::Coord;

use crate::{
    Advice, Assessment, CostLine, CostModel, EstimateError, EstimateRequest, Guide, GuideCatalog,
    NotFoundError, SiteCatalog, SiteCost, advise, aggregate,
};

/// Cost and time breakdown for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateResult {
    /// One line per selected site, in request order.
    pub cost_breakdown: Vec<CostLine>,
    /// Guide fee for the whole trip.
    pub guide_cost: u64,
    /// Sum of all cost lines plus the guide fee.
    pub total_cost: u64,
    /// Visit time plus transit allowance.
    pub total_time_mins: u64,
    /// Positions of the selected sites that have one, in request order.
    ///
    /// Serialized as `[latitude, longitude]` pairs for map viewers.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::wire::lat_lon_pairs")
    )]
    pub route_coordinates: Vec<Coord<f64>>,
    /// Advisory messages; empty when the plan is feasible.
    pub suggestions: Vec<String>,
}

impl EstimateResult {
    /// Report whether the advisor found nothing to suggest.
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Stateless estimation pipeline parameterised by a [`CostModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Estimator {
    model: CostModel,
}

impl Estimator {
    /// Construct an estimator with the default cost model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an estimator with explicit baseline allowances.
    #[must_use]
    pub const fn with_model(model: CostModel) -> Self {
        Self { model }
    }

    /// Return the cost model in use.
    #[must_use]
    pub const fn model(&self) -> &CostModel {
        &self.model
    }

    /// Produce an [`EstimateResult`] for `request`.
    ///
    /// # Errors
    /// Returns [`EstimateError::Validation`] for a malformed request or
    /// catalog record and [`EstimateError::NotFound`] for an unknown site or
    /// guide id. No partial result is ever returned.
    pub fn estimate<S, G>(
        &self,
        request: &EstimateRequest,
        sites: &S,
        guides: &G,
    ) -> Result<EstimateResult, EstimateError>
    where
        S: SiteCatalog + ?Sized,
        G: GuideCatalog + ?Sized,
    {
        request.validate()?;

        let selected = request
            .site_ids
            .iter()
            .map(|id| {
                sites
                    .site(id)
                    .ok_or_else(|| NotFoundError::Site(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let guide = resolve_guide(request, guides)?;

        for site in &selected {
            site.validate()?;
        }
        if let Some(hired) = guide {
            hired.validate()?;
        }

        let costs = selected
            .iter()
            .map(|site| self.model.site_cost(site, request.days))
            .collect::<Result<Vec<SiteCost>, _>>()?;
        let totals = aggregate(&costs, guide, request.days)?;
        let advice = advise(&Assessment::new(&totals, request.budget, request.days));

        Ok(EstimateResult {
            cost_breakdown: costs.into_iter().map(|cost| cost.line).collect(),
            guide_cost: totals.guide_cost,
            total_cost: totals.total_cost,
            total_time_mins: totals.total_time_mins,
            route_coordinates: selected.iter().filter_map(|site| site.location).collect(),
            suggestions: advice.iter().map(Advice::to_string).collect(),
        })
    }
}

fn resolve_guide<'a, G>(
    request: &EstimateRequest,
    guides: &'a G,
) -> Result<Option<&'a Guide>, NotFoundError>
where
    G: GuideCatalog + ?Sized,
{
    request
        .guide_id
        .as_ref()
        .map(|id| guides.guide(id).ok_or_else(|| NotFoundError::Guide(id.clone())))
        .transpose()
}

/// Estimate `request` with the default cost model.
///
/// # Errors
/// See [`Estimator::estimate`].
///
/// # Examples
/// ```
/// use heritage_core::{EstimateRequest, Guide, Site, estimate};
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), heritage_core::EstimateError> {
/// let sites = [Site::new("bhimbetka", "Bhimbetka Rock Shelters", dec!(100), 150)];
/// let guides: [Guide; 0] = [];
/// let request = EstimateRequest {
///     site_ids: vec!["bhimbetka".into()],
///     budget: dec!(1100),
///     days: 2,
///     guide_id: None,
/// };
/// let result = estimate(&request, sites.as_slice(), guides.as_slice())?;
/// assert_eq!(result.total_cost, 1100);
/// assert_eq!(result.total_time_mins, 150);
/// assert!(result.is_feasible());
/// # Ok(())
/// # }
/// ```
pub fn estimate<S, G>(
    request: &EstimateRequest,
    sites: &S,
    guides: &G,
) -> Result<EstimateResult, EstimateError>
where
    S: SiteCatalog + ?Sized,
    G: GuideCatalog + ?Sized,
{
    Estimator::new().estimate(request, sites, guides)
}

/// Produce estimates against a catalog chosen at construction time.
///
/// Implementations must be `Send + Sync` so one instance can serve requests
/// from several threads.
pub trait TripEstimator: Send + Sync {
    /// Estimate a request.
    ///
    /// # Errors
    /// Returns [`EstimateError`] for invalid requests or unknown identifiers.
    fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError>;
}

/// [`TripEstimator`] owning a catalog snapshot.
///
/// # Examples
/// ```
/// use heritage_core::{Catalog, CatalogEstimator, EstimateRequest, Site, TripEstimator};
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::from_parts(
///     vec![Site::new("fort", "Garhi Padavali Fort", dec!(30), 120)],
///     Vec::new(),
///     Vec::new(),
/// )?;
/// let estimator = CatalogEstimator::new(catalog);
/// let request = EstimateRequest {
///     site_ids: vec!["fort".into()],
///     budget: dec!(600),
///     days: 1,
///     guide_id: None,
/// };
/// assert_eq!(estimator.estimate(&request)?.total_cost, 530);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogEstimator<C> {
    catalog: C,
    estimator: Estimator,
}

impl<C> CatalogEstimator<C>
where
    C: SiteCatalog + GuideCatalog,
{
    /// Wrap `catalog` with the default cost model.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_estimator(catalog, Estimator::new())
    }

    /// Wrap `catalog` with an explicit estimator.
    #[must_use]
    pub const fn with_estimator(catalog: C, estimator: Estimator) -> Self {
        Self { catalog, estimator }
    }

    /// Borrow the catalog snapshot.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }
}

impl<C> TripEstimator for CatalogEstimator<C>
where
    C: SiteCatalog + GuideCatalog + Send + Sync,
{
    fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
        self.estimator
            .estimate(request, &self.catalog, &self.catalog)
    }
}
