//! Expense endpoints.
//!
//! Expenses are the one resource the backend filters server-side: the list
//! endpoint takes the farm id in the path and also returns the farm total.

use crate::client::{BackendClient, MessageResponse};
use crate::error::ApiError;
use grange_core::expense::{Expense, ExpenseUpdate, NewExpense};
use serde::Deserialize;

/// Expense list for one farm, with the backend-computed total.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseReport {
    pub expenses: Vec<Expense>,
    pub total_expenses: f64,
}

#[derive(Debug, Deserialize)]
struct ExpenseEnvelope {
    expense: Expense,
}

impl BackendClient {
    /// Fetches expenses for a farm.
    pub async fn expenses_for_farm(
        &self,
        token: &str,
        farm_id: i64,
    ) -> Result<ExpenseReport, ApiError> {
        self.get(token, &format!("/expenses/{farm_id}")).await
    }

    /// Creates an expense, returning the created record.
    pub async fn create_expense(
        &self,
        token: &str,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let envelope: ExpenseEnvelope = self.post(token, "/expenses/", expense).await?;
        Ok(envelope.expense)
    }

    /// Updates an expense by id, returning the updated record.
    pub async fn update_expense(
        &self,
        token: &str,
        expense_id: i64,
        update: &ExpenseUpdate,
    ) -> Result<Expense, ApiError> {
        let envelope: ExpenseEnvelope = self
            .put(token, &format!("/expenses/{expense_id}"), update)
            .await?;
        Ok(envelope.expense)
    }

    /// Deletes an expense by id.
    pub async fn delete_expense(&self, token: &str, expense_id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .delete(token, &format!("/expenses/{expense_id}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_report_decodes() {
        let json = r#"{
            "expenses": [
                {"expense_id": 4, "farm_id": 1, "amount": 55.0, "description": "feed",
                 "date": "2026-07-15"}
            ],
            "total_expenses": 55.0
        }"#;
        let report: ExpenseReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.expenses.len(), 1);
        assert_eq!(report.total_expenses, 55.0);
    }
}
