//! Farm domain model.
//!
//! A farm is the top-level ownership unit: every resource (livestock, crops,
//! sales, expenses) belongs to exactly one farm via its `farm_id`.

use serde::{Deserialize, Serialize};

/// A farm owned by the logged-in user.
///
/// The client holds an ephemeral read-only copy per fetch; the backend owns
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub farm_id: i64,
    pub farm_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size_acres: Option<f64>,
}

/// Request body for creating a farm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFarm {
    pub farm_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_acres: Option<f64>,
}

/// Request body for updating a farm. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_acres: Option<f64>,
}

/// A resource scoped to exactly one farm.
///
/// Implemented by every per-farm resource so the farm-scoped fetch can
/// filter a full collection client-side by the selected farm id.
pub trait FarmScoped {
    fn farm_id(&self) -> i64;
}

impl FarmScoped for Farm {
    fn farm_id(&self) -> i64 {
        self.farm_id
    }
}
