//! Expenses screen use case.
//!
//! Expenses are the one resource the backend scopes server-side, so the
//! fetch passes the selected farm id instead of filtering client-side. The
//! farm-total comes back with the list.

use crate::error::UseCaseError;
use crate::farm_scope::{FarmContext, FarmScope};
use crate::screen::ScreenState;
use grange_core::expense::{Expense, ExpenseUpdate, NewExpense};
use grange_core::validate;

/// Loaded expenses plus the backend-computed farm total.
#[derive(Debug)]
pub struct ExpenseSheet {
    pub state: ScreenState<Expense>,
    pub total: f64,
}

pub struct ExpensesScreen {
    ctx: FarmContext,
}

impl ExpensesScreen {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Fetches the expenses of the selected farm.
    pub async fn load(&self) -> ExpenseSheet {
        match self.try_load().await {
            Ok(sheet) => sheet,
            Err(e) => ExpenseSheet {
                state: ScreenState::Failed(e),
                total: 0.0,
            },
        }
    }

    async fn try_load(&self) -> Result<ExpenseSheet, UseCaseError> {
        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ExpenseSheet {
                state: ScreenState::NoFarm,
                total: 0.0,
            });
        };
        let token = self.ctx.token().await?;
        let report = self
            .ctx
            .check_auth(
                self.ctx
                    .backend()
                    .expenses_for_farm(&token, farm.farm_id)
                    .await,
            )
            .await?;
        Ok(ExpenseSheet {
            state: ScreenState::Loaded {
                farm_id: farm.farm_id,
                items: report.expenses,
            },
            total: report.total_expenses,
        })
    }

    /// Records an expense and reloads.
    pub async fn add(
        &self,
        amount: f64,
        description: Option<&str>,
    ) -> Result<ExpenseSheet, UseCaseError> {
        validate::require_positive_amount("amount", amount)?;

        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ExpenseSheet {
                state: ScreenState::NoFarm,
                total: 0.0,
            });
        };
        let token = self.ctx.token().await?;
        let new = NewExpense {
            farm_id: farm.farm_id,
            amount,
            description: description.map(str::to_string),
            date: None,
        };
        self.ctx
            .check_auth(self.ctx.backend().create_expense(&token, &new).await)
            .await?;
        Ok(self.load().await)
    }

    /// Updates an expense amount/description and reloads.
    pub async fn edit(
        &self,
        expense_id: i64,
        amount: f64,
        description: Option<&str>,
    ) -> Result<ExpenseSheet, UseCaseError> {
        validate::require_positive_amount("amount", amount)?;

        let token = self.ctx.token().await?;
        let update = ExpenseUpdate {
            amount: Some(amount),
            description: description.map(str::to_string),
            ..Default::default()
        };
        self.ctx
            .check_auth(
                self.ctx
                    .backend()
                    .update_expense(&token, expense_id, &update)
                    .await,
            )
            .await?;
        Ok(self.load().await)
    }

    /// Deletes an expense and reloads.
    pub async fn remove(&self, expense_id: i64) -> Result<ExpenseSheet, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().delete_expense(&token, expense_id).await)
            .await?;
        Ok(self.load().await)
    }
}
