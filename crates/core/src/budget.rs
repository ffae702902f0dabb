//! Budgets and the spent-amount fold.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::Expense;
use crate::validation::require_non_negative;

/// Per-trip spending plan. `spent` is a cached figure: it must equal the sum
/// of the amounts of every expense linked to this budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub trip_id: String,
    pub daily: Decimal,
    pub pre_trip: Decimal,
    pub spent: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// The budget every new trip starts with.
    #[must_use]
    pub fn zeroed(id: String, trip_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            trip_id,
            daily: Decimal::ZERO,
            pre_trip: Decimal::ZERO,
            spent: Decimal::ZERO,
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// `total - spent`; negative when the trip is over budget.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.total - self.spent
    }

    #[must_use]
    pub fn is_overspent(&self) -> bool {
        self.spent > self.total
    }

    /// Share of the total already spent, in percent. Zero when no total is set,
    /// `None` when the ratio does not fit in a `Decimal`.
    #[must_use]
    pub fn spent_percentage(&self) -> Option<Decimal> {
        if self.total.is_zero() {
            return Some(Decimal::ZERO);
        }
        self.spent.checked_div(self.total)?.checked_mul(Decimal::ONE_HUNDRED)
    }
}

/// Exact sum of decimal amounts; `None` on overflow.
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Sum of expense amounts using exact decimal arithmetic.
///
/// Order of the expenses does not affect the result. Returns `None` when the
/// sum leaves the `Decimal` range.
pub fn total_spent<'a, I>(expenses: I) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    checked_sum(expenses.into_iter().map(|expense| expense.amount))
}

/// Payload for `budget.update`. All four figures are written verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub daily: Decimal,
    pub pre_trip: Decimal,
    pub spent: Decimal,
    pub total: Decimal,
}

impl BudgetInput {
    pub fn validate(&self) -> crate::Result<()> {
        require_non_negative(self.daily, "Daily budget must be a positive number")?;
        require_non_negative(self.pre_trip, "Pre-trip budget must be a positive number")?;
        require_non_negative(self.spent, "Spent must be a positive number")?;
        require_non_negative(self.total, "Total budget must be a positive number")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetWithExpenses {
    #[serde(flatten)]
    pub budget: Budget,
    pub expenses: Vec<Expense>,
}
