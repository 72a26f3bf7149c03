//! Per-site cost model.
//!
//! Converts one [`Site`] plus the trip length into an itemised [`CostLine`]
//! and the minutes the visit contributes. Per-day allowances fall back to the
//! [`CostModel`] defaults when a site omits them; transport is charged per
//! selected site so results stay independent of visit grouping.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rust_decimal_macros::dec;

use crate::{Site, SiteId, ValidationError};

/// Baseline allowances applied when a site does not override them.
///
/// # Examples
/// ```
/// use heritage_core::{CostModel, Site};
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), heritage_core::ValidationError> {
/// let site = Site::new("bhimbetka", "Bhimbetka Rock Shelters", dec!(100), 150);
/// let cost = CostModel::default().site_cost(&site, 2)?;
/// assert_eq!(cost.line.food_cost, 600);
/// assert_eq!(cost.line.transport_cost, 400);
/// assert_eq!(cost.line.total, 1100);
/// assert_eq!(cost.visit_mins, 150);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    /// Food allowance per day.
    pub food_per_day: Decimal,
    /// Transport allowance per day.
    pub transport_per_day: Decimal,
    /// Flat activity charge.
    pub activity: Decimal,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            food_per_day: dec!(300),
            transport_per_day: dec!(200),
            activity: Decimal::ZERO,
        }
    }
}

/// Itemised cost contribution of one selected site, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostLine {
    /// Site the line belongs to.
    pub site_id: SiteId,
    /// Display name of the site.
    pub site_name: String,
    /// One-time admission charge.
    pub entry_fee: u64,
    /// Food allowance for the whole trip.
    pub food_cost: u64,
    /// Transport allowance for the whole trip.
    pub transport_cost: u64,
    /// Activity charge.
    pub activity_cost: u64,
    /// Sum of the four components.
    pub total: u64,
}

/// Output of the cost model for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCost {
    /// Itemised costs.
    pub line: CostLine,
    /// Minutes spent at the site.
    pub visit_mins: u32,
}

impl CostModel {
    /// Price a validated site for a trip of `days` days.
    ///
    /// Every component is rounded half-up to a whole unit before summing.
    ///
    /// # Errors
    /// Returns [`ValidationError::AmountOutOfRange`] when a component or the
    /// line total cannot be represented.
    pub fn site_cost(&self, site: &Site, days: u32) -> Result<SiteCost, ValidationError> {
        let entry_fee = round_half_up(site.entry_fee, "entry fee")?;
        let food_cost = per_trip(
            site.food_cost_per_day.unwrap_or(self.food_per_day),
            days,
            "food cost",
        )?;
        let transport_cost = per_trip(
            site.transport_cost_per_day.unwrap_or(self.transport_per_day),
            days,
            "transport cost",
        )?;
        let activity_cost = round_half_up(
            site.activity_cost.unwrap_or(self.activity),
            "activity cost",
        )?;
        let total = [food_cost, transport_cost, activity_cost]
            .into_iter()
            .try_fold(entry_fee, u64::checked_add)
            .ok_or(ValidationError::AmountOutOfRange {
                what: "site cost total",
            })?;
        Ok(SiteCost {
            line: CostLine {
                site_id: site.id.clone(),
                site_name: site.name.clone(),
                entry_fee,
                food_cost,
                transport_cost,
                activity_cost,
                total,
            },
            visit_mins: site.avg_visit_time_mins,
        })
    }
}

/// Multiply a daily rate by the trip length and round to a whole unit.
pub(crate) fn per_trip(
    rate: Decimal,
    days: u32,
    what: &'static str,
) -> Result<u64, ValidationError> {
    let amount = rate
        .checked_mul(Decimal::from(days))
        .ok_or(ValidationError::AmountOutOfRange { what })?;
    round_half_up(amount, what)
}

/// Round a non-negative amount to the nearest whole unit, halves upwards.
pub(crate) fn round_half_up(amount: Decimal, what: &'static str) -> Result<u64, ValidationError> {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Ok(0);
    }
    rounded
        .to_u64()
        .ok_or(ValidationError::AmountOutOfRange { what })
}
