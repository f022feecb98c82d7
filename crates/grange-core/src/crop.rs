//! Crop domain model.

use crate::farm::FarmScoped;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A crop record belonging to one farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub crop_id: i64,
    pub farm_id: i64,
    pub crop_name: String,
    #[serde(default)]
    pub crop_type: Option<String>,
    #[serde(default)]
    pub planting_date: Option<NaiveDate>,
    #[serde(default)]
    pub harvest_date: Option<NaiveDate>,
    #[serde(default)]
    pub expected_yield: Option<f64>,
}

/// Request body for creating a crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCrop {
    pub farm_id: i64,
    pub crop_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<f64>,
}

/// Request body for updating a crop. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CropUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<f64>,
}

impl FarmScoped for Crop {
    fn farm_id(&self) -> i64 {
        self.farm_id
    }
}
