use rust_decimal::Decimal;

use crate::models::{Budget, Entry};
use crate::window::ChallengeWindow;

/// Every number the dashboard shows, derived in one pass from a snapshot of
/// the ledger and the challenge window. Pure and deterministic: recomputing
/// from the same inputs always yields the same snapshot.
///
/// All arithmetic stays in `Decimal`; rounding to display precision is the
/// presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatsSnapshot {
    pub(crate) essential_total: Decimal,
    pub(crate) skip_total: Decimal,
    pub(crate) essential_count: usize,
    pub(crate) skip_count: usize,
    /// Budget spread evenly across the days of the window.
    pub(crate) daily_allowance: Decimal,
    /// Essential spend per elapsed challenge day.
    pub(crate) average_spend: Decimal,
    /// Expected cumulative spend if perfectly on pace; 0 outside the window.
    pub(crate) budget_target_so_far: Decimal,
    /// Positive = under pace, negative = over pace.
    pub(crate) budget_delta: Decimal,
    /// Unspent budget headroom (floored at zero) plus all skip savings.
    pub(crate) saved_amount: Decimal,
    /// Spend progress ratio, clamped to [0, 1].
    pub(crate) progress: Decimal,
}

impl StatsSnapshot {
    pub(crate) fn compute(entries: &[Entry], budget: &Budget, window: &ChallengeWindow) -> Self {
        let mut essential_total = Decimal::ZERO;
        let mut skip_total = Decimal::ZERO;
        let mut essential_count = 0;
        let mut skip_count = 0;
        for entry in entries {
            if entry.is_essential() {
                essential_total += entry.amount;
                essential_count += 1;
            } else {
                skip_total += entry.amount;
                skip_count += 1;
            }
        }

        let monthly = budget.monthly;
        let daily_allowance = monthly / Decimal::from(window.days_in_month.max(1));

        // Day 1 before the window opens: no division by zero, no partial
        // progress credited ahead of Feb 1.
        let active_day = if window.is_active {
            window.day_of_month.max(1)
        } else {
            1
        };

        let average_spend = if essential_count > 0 {
            essential_total / Decimal::from(active_day)
        } else {
            Decimal::ZERO
        };

        let budget_target_so_far = if window.is_active {
            daily_allowance * Decimal::from(active_day)
        } else {
            Decimal::ZERO
        };

        let budget_delta = budget_target_so_far - essential_total;
        let saved_amount = (monthly - essential_total).max(Decimal::ZERO) + skip_total;

        // Denominator falls back to the full monthly budget outside the
        // window or while the pacing target is zero.
        let pace_base = if budget_target_so_far > Decimal::ZERO {
            budget_target_so_far
        } else {
            monthly
        };
        let denominator = pace_base.max(monthly);
        let progress = if denominator > Decimal::ZERO {
            (essential_total / denominator).clamp(Decimal::ZERO, Decimal::ONE)
        } else {
            Decimal::ZERO
        };

        Self {
            essential_total,
            skip_total,
            essential_count,
            skip_count,
            daily_allowance,
            average_spend,
            budget_target_so_far,
            budget_delta,
            saved_amount,
            progress,
        }
    }
}

#[cfg(test)]
mod tests;
