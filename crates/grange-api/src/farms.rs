//! Farm endpoints.
//!
//! `GET /farms/` wraps the collection as `{ "farms": [...] }`; creation
//! returns the new record under a `farm` key.

use crate::client::{BackendClient, MessageResponse};
use crate::error::ApiError;
use grange_core::farm::{Farm, FarmUpdate, NewFarm};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FarmsEnvelope {
    farms: Vec<Farm>,
}

#[derive(Debug, Deserialize)]
struct FarmEnvelope {
    farm: Farm,
}

impl BackendClient {
    /// Fetches all farms for the logged-in user.
    pub async fn list_farms(&self, token: &str) -> Result<Vec<Farm>, ApiError> {
        let envelope: FarmsEnvelope = self.get(token, "/farms/").await?;
        Ok(envelope.farms)
    }

    /// Creates a farm linked to the logged-in user.
    pub async fn create_farm(&self, token: &str, farm: &NewFarm) -> Result<Farm, ApiError> {
        let envelope: FarmEnvelope = self.post(token, "/farms/", farm).await?;
        Ok(envelope.farm)
    }

    /// Updates a farm by id (only if it belongs to the current user).
    pub async fn update_farm(
        &self,
        token: &str,
        farm_id: i64,
        update: &FarmUpdate,
    ) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .put(token, &format!("/farms/{farm_id}"), update)
            .await?;
        Ok(())
    }

    /// Deletes a farm by id.
    pub async fn delete_farm(&self, token: &str, farm_id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self.delete(token, &format!("/farms/{farm_id}")).await?;
        Ok(())
    }
}
