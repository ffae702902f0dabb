//! ExpenseStore implementation for PgStorage.

use super::*;

use crate::traits::ExpenseStore;
use async_trait::async_trait;
use voyage_core::{ExpenseInput, ExpenseUpdate};

#[async_trait]
impl ExpenseStore for PgStorage {
    async fn create_expense(&self, input: ExpenseInput) -> Result<Expense, StorageError> {
        let expense = Expense::new(new_id(), input, crate::now());
        sqlx::query(&format!(
            "INSERT INTO expenses ({EXPENSE_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7)"
        ))
        .bind(&expense.id)
        .bind(&expense.budget_id)
        .bind(expense.amount)
        .bind(&expense.description)
        .bind(expense.expense_type.as_str())
        .bind(expense.created_at)
        .bind(expense.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(expense)
    }

    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, StorageError> {
        let row = sqlx::query(&format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_expense(&r)).transpose()
    }

    async fn update_expense(
        &self,
        id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense, StorageError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StorageError::not_found("expense", id))?;
        let mut expense = row_to_expense(&row)?;
        expense.apply(update, crate::now());
        sqlx::query(
            "UPDATE expenses SET amount = $1, description = $2, expense_type = $3, updated_at = $4
             WHERE id = $5",
        )
        .bind(expense.amount)
        .bind(&expense.description)
        .bind(expense.expense_type.as_str())
        .bind(expense.updated_at)
        .bind(&expense.id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(expense)
    }

    async fn delete_expense(&self, id: &str) -> Result<Expense, StorageError> {
        let row = sqlx::query(&format!(
            "DELETE FROM expenses WHERE id = $1 RETURNING {EXPENSE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("expense", id))?;
        row_to_expense(&row)
    }

    async fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE budget_id = $1
             ORDER BY created_at DESC, id ASC"
        ))
        .bind(budget_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_expense).collect()
    }
}
