//! Dashboard statistics models.
//!
//! These are read-only aggregates computed by the backend; the client
//! renders them as-is.

use crate::expense::Expense;
use crate::sale::Sale;
use serde::{Deserialize, Serialize};

/// Comprehensive dashboard statistics across all of the user's farms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_farms: i64,
    pub total_livestock: i64,
    pub total_crops: i64,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    #[serde(default)]
    pub farms: Vec<FarmSummary>,
    #[serde(default)]
    pub recent_sales: Vec<Sale>,
    #[serde(default)]
    pub recent_expenses: Vec<Expense>,
}

/// Per-farm roll-up within the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmSummary {
    pub farm_id: i64,
    pub farm_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size_acres: Option<f64>,
    pub livestock_count: i64,
    pub crops_count: i64,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

/// Compact summary for lightweight dashboard refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_farms: i64,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}
