//! Livestock domain model.

use crate::farm::FarmScoped;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A livestock record belonging to one farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Livestock {
    pub livestock_id: i64,
    pub farm_id: i64,
    pub animal_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub health_status: Option<String>,
}

/// Request body for creating livestock. The backend rejects farms not owned
/// by the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLivestock {
    pub farm_id: i64,
    pub animal_type: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
}

/// Request body for updating livestock. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LivestockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
}

impl FarmScoped for Livestock {
    fn farm_id(&self) -> i64 {
        self.farm_id
    }
}
