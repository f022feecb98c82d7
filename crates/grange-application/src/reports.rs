//! Reports use case.
//!
//! Builds a per-farm financial report from the resource collections. The
//! three client-scoped collections are fetched concurrently; expenses come
//! from the server-scoped endpoint along with their farm total.

use crate::error::UseCaseError;
use crate::farm_scope::{FarmContext, FarmScope, scope_items};
use futures::future::try_join3;
use tracing::debug;

/// Aggregated figures for one farm.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmReport {
    pub farm_id: i64,
    pub farm_name: String,
    pub livestock_head: i64,
    pub crop_count: usize,
    pub sales_revenue: f64,
    pub expense_total: f64,
    pub net: f64,
}

/// Result of building a report.
#[derive(Debug)]
pub enum ReportOutcome {
    /// The account has no farm; nothing was fetched.
    NoFarm,
    Ready(FarmReport),
}

pub struct ReportScreen {
    ctx: FarmContext,
}

impl ReportScreen {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Builds the report for the selected farm.
    pub async fn build(&self) -> Result<ReportOutcome, UseCaseError> {
        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ReportOutcome::NoFarm);
        };
        let token = self.ctx.token().await?;

        let backend = self.ctx.backend();
        let fetched = try_join3(
            backend.list_livestock(&token),
            backend.list_crops(&token),
            backend.list_sales(&token),
        )
        .await;
        let (livestock, crops, sales) = self.ctx.check_auth(fetched).await?;
        let expenses = self
            .ctx
            .check_auth(backend.expenses_for_farm(&token, farm.farm_id).await)
            .await?;

        let livestock_head: i64 = scope_items(livestock, farm.farm_id)
            .iter()
            .map(|l| l.quantity)
            .sum();
        let crop_count = scope_items(crops, farm.farm_id).len();
        let sales_revenue: f64 = scope_items(sales, farm.farm_id)
            .iter()
            .map(|s| s.total_amount)
            .sum();
        debug!(farm_id = farm.farm_id, "report built");

        Ok(ReportOutcome::Ready(FarmReport {
            farm_id: farm.farm_id,
            farm_name: farm.farm_name,
            livestock_head,
            crop_count,
            sales_revenue,
            expense_total: expenses.total_expenses,
            net: sales_revenue - expenses.total_expenses,
        }))
    }
}
