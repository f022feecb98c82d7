//! Dashboard endpoints. These return bare objects, not keyed envelopes.

use crate::client::BackendClient;
use crate::error::ApiError;
use grange_core::dashboard::{DashboardStats, DashboardSummary};

impl BackendClient {
    /// Fetches comprehensive dashboard statistics.
    pub async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        self.get(token, "/dashboard/").await
    }

    /// Fetches the compact summary for lightweight refreshes.
    pub async fn dashboard_summary(&self, token: &str) -> Result<DashboardSummary, ApiError> {
        self.get(token, "/dashboard/summary").await
    }
}

#[cfg(test)]
mod tests {
    use grange_core::dashboard::DashboardStats;

    #[test]
    fn test_dashboard_stats_bare_object_decodes() {
        let json = r#"{
            "total_farms": 2, "total_livestock": 30, "total_crops": 5,
            "total_sales": 900.0, "total_expenses": 400.0, "net_profit": 500.0,
            "farms": [
                {"farm_id": 1, "farm_name": "Hillside", "livestock_count": 20,
                 "crops_count": 3, "total_sales": 600.0, "total_expenses": 250.0,
                 "profit": 350.0}
            ]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_farms, 2);
        assert_eq!(stats.farms[0].profit, 350.0);
        assert!(stats.recent_sales.is_empty());
    }
}
