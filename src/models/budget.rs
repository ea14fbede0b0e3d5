use rust_decimal::Decimal;

/// Policy bounds for the monthly budget, in whole kroner.
pub(crate) const BUDGET_MIN: i64 = 1500;
pub(crate) const BUDGET_MAX: i64 = 12000;
/// Adjustment step used by the budget screen.
pub(crate) const BUDGET_STEP: i64 = 100;
pub(crate) const BUDGET_DEFAULT: i64 = 4500;

#[derive(Debug, Clone)]
pub(crate) struct Budget {
    pub(crate) monthly: Decimal,
}

impl Budget {
    pub(crate) fn new(monthly: Decimal) -> Self {
        Self { monthly }
    }

    pub(crate) fn in_range(amount: Decimal) -> bool {
        amount >= Decimal::from(BUDGET_MIN) && amount <= Decimal::from(BUDGET_MAX)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            monthly: Decimal::from(BUDGET_DEFAULT),
        }
    }
}
