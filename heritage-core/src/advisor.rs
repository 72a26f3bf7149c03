//! Budget and time feasibility advice.
//!
//! Advice comes from an ordered table of independent rules. Each rule
//! inspects an [`Assessment`] and may contribute one [`Advice`]; a plan is
//! feasible when no rule fires. New rules append to [`RULES`] without
//! changing the output of existing ones.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::Totals;

/// Minutes of touring available in one trip day.
pub const TOURING_DAY_MINS: u64 = 480;

/// Selections smaller than this may be nudged to add sites.
pub const SMALL_SELECTION: usize = 3;

const UNDERSPEND_RATIO: Decimal = dec!(0.5);

/// Figures the rules reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// Estimated trip cost.
    pub total_cost: u64,
    /// Estimated trip duration.
    pub total_time_mins: u64,
    /// Traveller's spending ceiling.
    pub budget: Decimal,
    /// Trip length in days.
    pub days: u32,
    /// Number of selected sites.
    pub site_count: usize,
}

impl Assessment {
    /// Combine aggregated totals with the traveller's constraints.
    #[must_use]
    pub const fn new(totals: &Totals, budget: Decimal, days: u32) -> Self {
        Self {
            total_cost: totals.total_cost,
            total_time_mins: totals.total_time_mins,
            budget,
            days,
            site_count: totals.site_count,
        }
    }

    fn available_mins(&self) -> u64 {
        u64::from(self.days).saturating_mul(TOURING_DAY_MINS)
    }
}

/// Outcome of one advisory rule.
///
/// `Display` renders the user-facing suggestion text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    /// The estimate exceeds the budget.
    OverBudget {
        /// Estimated trip cost.
        total_cost: u64,
        /// Traveller's budget.
        budget: Decimal,
        /// Amount by which the estimate exceeds the budget.
        difference: Decimal,
    },
    /// The itinerary needs more touring time than the trip allows.
    OverTime {
        /// Requested trip length.
        days: u32,
        /// Whole days needed to absorb the excess.
        extra_days: u64,
    },
    /// Under half the budget is used by a small selection.
    BudgetHeadroom,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverBudget {
                total_cost,
                budget,
                difference,
            } => write!(
                f,
                "Your estimated cost (₹{total_cost}) exceeds your budget (₹{}) by ₹{}. \
                 Consider removing a site or increasing your budget.",
                budget.normalize(),
                difference.normalize()
            ),
            Self::OverTime { days, extra_days } => write!(
                f,
                "Your itinerary requires more time than {days} day(s) allow. \
                 Consider removing a site or adding {extra_days} day(s)."
            ),
            Self::BudgetHeadroom => f.write_str(
                "You have budget remaining — consider adding more sites to your trip.",
            ),
        }
    }
}

/// A single advisory rule.
pub type Rule = fn(&Assessment) -> Option<Advice>;

/// Rules in evaluation order.
pub const RULES: [Rule; 3] = [over_budget, over_time, budget_headroom];

fn over_budget(assessment: &Assessment) -> Option<Advice> {
    let total = Decimal::from(assessment.total_cost);
    if total <= assessment.budget {
        return None;
    }
    Some(Advice::OverBudget {
        total_cost: assessment.total_cost,
        budget: assessment.budget,
        difference: total.checked_sub(assessment.budget)?,
    })
}

fn over_time(assessment: &Assessment) -> Option<Advice> {
    let excess = assessment
        .total_time_mins
        .checked_sub(assessment.available_mins())
        .filter(|mins| *mins > 0)?;
    Some(Advice::OverTime {
        days: assessment.days,
        extra_days: excess.div_ceil(TOURING_DAY_MINS),
    })
}

fn budget_headroom(assessment: &Assessment) -> Option<Advice> {
    let threshold = assessment.budget.checked_mul(UNDERSPEND_RATIO)?;
    (assessment.site_count < SMALL_SELECTION && Decimal::from(assessment.total_cost) < threshold)
        .then_some(Advice::BudgetHeadroom)
}

/// Run every rule in order and collect the advice that fires.
///
/// # Examples
/// ```
/// use heritage_core::{Advice, Assessment, advise};
/// use rust_decimal_macros::dec;
///
/// let assessment = Assessment {
///     total_cost: 1200,
///     total_time_mins: 1000,
///     budget: dec!(1000),
///     days: 2,
///     site_count: 3,
/// };
/// let advice = advise(&assessment);
/// assert_eq!(advice.len(), 2);
/// assert!(matches!(advice[1], Advice::OverTime { extra_days: 1, .. }));
/// ```
#[must_use]
pub fn advise(assessment: &Assessment) -> Vec<Advice> {
    RULES.iter().filter_map(|rule| rule(assessment)).collect()
}
