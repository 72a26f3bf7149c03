//! Fold per-site costs and the guide fee into trip totals.

use crate::{Guide, SiteCost, ValidationError, cost::per_trip};

/// Travel allowance added between consecutive sites.
pub const TRANSIT_ALLOWANCE_MINS: u64 = 30;

/// Aggregate figures for a whole itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Guide fee for the whole trip, or zero without a guide.
    pub guide_cost: u64,
    /// Sum of every cost line plus the guide fee.
    pub total_cost: u64,
    /// Visit minutes plus inter-site transit allowance.
    pub total_time_mins: u64,
    /// Number of sites folded.
    pub site_count: usize,
}

/// Fold `costs` in order together with an optional guide hired for `days`.
///
/// The fold is pure; repeated calls on the same inputs give identical totals.
///
/// # Errors
/// Returns [`ValidationError::AmountOutOfRange`] if a sum overflows.
///
/// # Examples
/// ```
/// use heritage_core::{CostModel, Guide, Site, aggregate};
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), heritage_core::ValidationError> {
/// let model = CostModel::default();
/// let costs = vec![
///     model.site_cost(&Site::new("a", "A", dec!(0), 120), 1)?,
///     model.site_cost(&Site::new("b", "B", dec!(0), 90), 1)?,
/// ];
/// let guide = Guide::new("g", "Guide", dec!(500));
/// let totals = aggregate(&costs, Some(&guide), 3)?;
/// assert_eq!(totals.guide_cost, 1500);
/// assert_eq!(totals.total_cost, 1000 + 1500);
/// assert_eq!(totals.total_time_mins, 120 + 90 + 30);
/// # Ok(())
/// # }
/// ```
pub fn aggregate(
    costs: &[SiteCost],
    guide: Option<&Guide>,
    days: u32,
) -> Result<Totals, ValidationError> {
    let guide_cost = guide.map_or(Ok(0), |hired| {
        per_trip(hired.fee_per_day, days, "guide cost")
    })?;
    let total_cost = costs
        .iter()
        .try_fold(guide_cost, |sum, cost| sum.checked_add(cost.line.total))
        .ok_or(ValidationError::AmountOutOfRange { what: "total cost" })?;
    let visit_mins = costs
        .iter()
        .map(|cost| u64::from(cost.visit_mins))
        .sum::<u64>();
    let site_count = costs.len();
    let legs = u64::try_from(site_count.saturating_sub(1)).map_err(|_| {
        ValidationError::AmountOutOfRange {
            what: "transit legs",
        }
    })?;
    let total_time_mins = legs
        .checked_mul(TRANSIT_ALLOWANCE_MINS)
        .and_then(|transit| transit.checked_add(visit_mins))
        .ok_or(ValidationError::AmountOutOfRange {
            what: "total time",
        })?;
    Ok(Totals {
        guide_cost,
        total_cost,
        total_time_mins,
        site_count,
    })
}
