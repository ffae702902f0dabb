use rusqlite::{OptionalExtension as _, params};
use voyage_core::{Expense, ExpenseInput, ExpenseType, ExpenseUpdate};

use super::{Storage, format_instant, get_conn, get_decimal, get_instant, new_id};
use crate::error::StorageError;

const EXPENSE_COLUMNS: &str =
    "id, budget_id, amount, description, expense_type, created_at, updated_at";

impl Storage {
    /// Insert an expense.
    ///
    /// # Errors
    /// Returns `Constraint` if the budget does not exist.
    pub fn create_expense(&self, input: ExpenseInput) -> Result<Expense, StorageError> {
        let expense = Expense::new(new_id(), input, crate::now());
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!("INSERT INTO expenses ({EXPENSE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
            params![
                expense.id,
                expense.budget_id,
                expense.amount.to_string(),
                expense.description,
                expense.expense_type.as_str(),
                format_instant(&expense.created_at),
                format_instant(&expense.updated_at),
            ],
        )?;
        Ok(expense)
    }

    /// Get expense by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_expense(&self, id: &str) -> Result<Option<Expense>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let expense = conn
            .query_row(
                &format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = ?1"),
                params![id],
                map_expense,
            )
            .optional()?;
        Ok(expense)
    }

    /// Update amount, description and type of an expense.
    ///
    /// # Errors
    /// Returns `NotFound` if the expense does not exist.
    pub fn update_expense(&self, id: &str, update: ExpenseUpdate) -> Result<Expense, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut expense = tx
            .query_row(
                &format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = ?1"),
                params![id],
                map_expense,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("expense", id))?;
        expense.apply(update, crate::now());
        tx.execute(
            "UPDATE expenses SET amount = ?1, description = ?2, expense_type = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                expense.amount.to_string(),
                expense.description,
                expense.expense_type.as_str(),
                format_instant(&expense.updated_at),
                expense.id,
            ],
        )?;
        tx.commit()?;
        Ok(expense)
    }

    /// Delete expense and return the removed row.
    ///
    /// # Errors
    /// Returns `NotFound` if the expense does not exist.
    pub fn delete_expense(&self, id: &str) -> Result<Expense, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!("DELETE FROM expenses WHERE id = ?1 RETURNING {EXPENSE_COLUMNS}"),
            params![id],
            map_expense,
        )
        .optional()?
        .ok_or_else(|| StorageError::not_found("expense", id))
    }

    /// Expenses of a budget, newest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE budget_id = ?1
             ORDER BY created_at DESC, id ASC"
        ))?;
        let expenses = stmt.query_map(params![budget_id], map_expense)?.collect::<Result<_, _>>()?;
        Ok(expenses)
    }
}

fn map_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<Expense> {
    let type_str: String = row.get(4)?;
    let expense_type = type_str.parse::<ExpenseType>().unwrap_or_else(|_| {
        tracing::warn!(invalid_type = %type_str, "corrupt expense_type in DB, defaulting to Daily");
        ExpenseType::Daily
    });
    Ok(Expense {
        id: row.get(0)?,
        budget_id: row.get(1)?,
        amount: get_decimal(row, 2)?,
        description: row.get(3)?,
        expense_type,
        created_at: get_instant(row, 5)?,
        updated_at: get_instant(row, 6)?,
    })
}
