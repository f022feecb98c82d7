//! Crop endpoints.

use crate::client::{BackendClient, MessageResponse};
use crate::error::ApiError;
use grange_core::crop::{Crop, CropUpdate, NewCrop};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CropsEnvelope {
    crops: Vec<Crop>,
}

#[derive(Debug, Deserialize)]
struct CreatedCrop {
    #[allow(dead_code)]
    message: String,
    crop_id: i64,
}

impl BackendClient {
    /// Fetches all crops across the user's farms; callers scope the result
    /// client-side.
    pub async fn list_crops(&self, token: &str) -> Result<Vec<Crop>, ApiError> {
        let envelope: CropsEnvelope = self.get(token, "/crops/").await?;
        Ok(envelope.crops)
    }

    /// Creates a crop. Returns the new crop id.
    pub async fn create_crop(&self, token: &str, crop: &NewCrop) -> Result<i64, ApiError> {
        let created: CreatedCrop = self.post(token, "/crops/", crop).await?;
        Ok(created.crop_id)
    }

    /// Updates a crop by id.
    pub async fn update_crop(
        &self,
        token: &str,
        crop_id: i64,
        update: &CropUpdate,
    ) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .put(token, &format!("/crops/{crop_id}"), update)
            .await?;
        Ok(())
    }

    /// Deletes a crop by id.
    pub async fn delete_crop(&self, token: &str, crop_id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self.delete(token, &format!("/crops/{crop_id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crops_envelope_decodes() {
        let json = r#"{"crops": [
            {"crop_id": 5, "farm_id": 1, "crop_name": "Maize", "crop_type": "cereal",
             "expected_yield": 120.0}
        ]}"#;
        let envelope: CropsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.crops[0].crop_name, "Maize");
        assert_eq!(envelope.crops[0].expected_yield, Some(120.0));
    }
}
