//! Dashboard use case.
//!
//! The backend aggregates these figures across every farm the user owns, so
//! no farm scoping applies here.

use crate::error::UseCaseError;
use crate::farm_scope::FarmContext;
use grange_core::dashboard::{DashboardStats, DashboardSummary};

pub struct DashboardScreen {
    ctx: FarmContext,
}

impl DashboardScreen {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Fetches the full dashboard: totals plus per-farm breakdown and recent
    /// activity.
    pub async fn load(&self) -> Result<DashboardStats, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().dashboard_stats(&token).await)
            .await
    }

    /// Fetches the compact totals-only variant.
    pub async fn summary(&self) -> Result<DashboardSummary, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().dashboard_summary(&token).await)
            .await
    }
}
