//! Sale domain model.

use crate::farm::FarmScoped;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded sale. `total_amount` is computed by the backend from quantity
/// and unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: i64,
    pub farm_id: i64,
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub sale_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for creating a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSale {
    pub farm_id: i64,
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for updating a sale. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FarmScoped for Sale {
    fn farm_id(&self) -> i64 {
        self.farm_id
    }
}
