//! Crops screen use case.

use crate::error::UseCaseError;
use crate::farm_scope::{FarmContext, FarmScope, scope_items};
use crate::screen::ScreenState;
use grange_core::crop::{Crop, CropUpdate, NewCrop};
use grange_core::validate;

pub struct CropsScreen {
    ctx: FarmContext,
}

impl CropsScreen {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Fetches the crops of the selected farm.
    pub async fn load(&self) -> ScreenState<Crop> {
        match self.try_load().await {
            Ok(state) => state,
            Err(e) => ScreenState::Failed(e),
        }
    }

    async fn try_load(&self) -> Result<ScreenState<Crop>, UseCaseError> {
        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ScreenState::NoFarm);
        };
        let token = self.ctx.token().await?;
        let all = self
            .ctx
            .check_auth(self.ctx.backend().list_crops(&token).await)
            .await?;
        Ok(ScreenState::Loaded {
            farm_id: farm.farm_id,
            items: scope_items(all, farm.farm_id),
        })
    }

    /// Adds a crop with its expected yield and reloads.
    pub async fn add(
        &self,
        crop_name: &str,
        expected_yield: f64,
    ) -> Result<ScreenState<Crop>, UseCaseError> {
        validate::require_non_empty("crop name", crop_name)?;
        validate::require_positive_amount("expected yield", expected_yield)?;

        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ScreenState::NoFarm);
        };
        let token = self.ctx.token().await?;
        let new = NewCrop {
            farm_id: farm.farm_id,
            crop_name: crop_name.to_string(),
            crop_type: None,
            planting_date: None,
            harvest_date: None,
            expected_yield: Some(expected_yield),
        };
        self.ctx
            .check_auth(self.ctx.backend().create_crop(&token, &new).await)
            .await?;
        Ok(self.load().await)
    }

    /// Updates name and expected yield, then reloads.
    pub async fn edit(
        &self,
        crop_id: i64,
        crop_name: &str,
        expected_yield: f64,
    ) -> Result<ScreenState<Crop>, UseCaseError> {
        validate::require_non_empty("crop name", crop_name)?;
        validate::require_positive_amount("expected yield", expected_yield)?;

        let token = self.ctx.token().await?;
        let update = CropUpdate {
            crop_name: Some(crop_name.to_string()),
            expected_yield: Some(expected_yield),
            ..Default::default()
        };
        self.ctx
            .check_auth(self.ctx.backend().update_crop(&token, crop_id, &update).await)
            .await?;
        Ok(self.load().await)
    }

    /// Deletes a crop and reloads.
    pub async fn remove(&self, crop_id: i64) -> Result<ScreenState<Crop>, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().delete_crop(&token, crop_id).await)
            .await?;
        Ok(self.load().await)
    }
}
