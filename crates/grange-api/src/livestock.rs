//! Livestock endpoints.

use crate::client::{BackendClient, MessageResponse};
use crate::error::ApiError;
use grange_core::livestock::{Livestock, LivestockUpdate, NewLivestock};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LivestockEnvelope {
    livestock: Vec<Livestock>,
}

#[derive(Debug, Deserialize)]
struct CreatedLivestock {
    #[allow(dead_code)]
    message: String,
    id: i64,
}

impl BackendClient {
    /// Fetches all livestock across the user's farms. The backend does not
    /// filter by farm here; callers scope the result client-side.
    pub async fn list_livestock(&self, token: &str) -> Result<Vec<Livestock>, ApiError> {
        let envelope: LivestockEnvelope = self.get(token, "/livestock/").await?;
        Ok(envelope.livestock)
    }

    /// Creates livestock on a farm owned by the user. Returns the new id.
    pub async fn create_livestock(
        &self,
        token: &str,
        livestock: &NewLivestock,
    ) -> Result<i64, ApiError> {
        let created: CreatedLivestock = self.post(token, "/livestock/", livestock).await?;
        Ok(created.id)
    }

    /// Updates livestock by id.
    pub async fn update_livestock(
        &self,
        token: &str,
        livestock_id: i64,
        update: &LivestockUpdate,
    ) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .put(token, &format!("/livestock/{livestock_id}"), update)
            .await?;
        Ok(())
    }

    /// Deletes livestock by id.
    pub async fn delete_livestock(&self, token: &str, livestock_id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .delete(token, &format!("/livestock/{livestock_id}"))
            .await?;
        Ok(())
    }
}
