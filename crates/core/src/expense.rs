use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{require_non_empty, require_non_negative};

/// Whether a cost is incurred before departure or during the trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseType {
    Daily,
    PreTrip,
}

impl ExpenseType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Daily => "Daily",
            Self::PreTrip => "PreTrip",
        }
    }
}

impl FromStr for ExpenseType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "pretrip" | "pre_trip" | "pre-trip" => Ok(Self::PreTrip),
            _ => Err(CoreError::InvalidEnum { kind: "expense type", value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub budget_id: String,
    pub amount: Decimal,
    pub description: String,
    pub expense_type: ExpenseType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    #[must_use]
    pub fn new(id: String, input: ExpenseInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            budget_id: input.budget_id,
            amount: input.amount,
            description: input.description,
            expense_type: input.expense_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update. The owning budget never changes.
    pub fn apply(&mut self, update: ExpenseUpdate, now: DateTime<Utc>) {
        self.amount = update.amount;
        self.description = update.description;
        self.expense_type = update.expense_type;
        self.updated_at = now;
    }
}

/// Payload for `expense.create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub budget_id: String,
    pub amount: Decimal,
    pub description: String,
    pub expense_type: ExpenseType,
}

impl ExpenseInput {
    pub fn validate(&self) -> crate::Result<()> {
        require_non_empty(&self.budget_id, "Budget id is required")?;
        validate_fields(self.amount, &self.description)
    }
}

/// Payload for `expense.update`; same fields as creation minus the budget link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub amount: Decimal,
    pub description: String,
    pub expense_type: ExpenseType,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        validate_fields(self.amount, &self.description)
    }
}

fn validate_fields(amount: Decimal, description: &str) -> crate::Result<()> {
    require_non_negative(amount, "Amount must be a positive number")?;
    require_non_empty(description, "Description is required")
}
