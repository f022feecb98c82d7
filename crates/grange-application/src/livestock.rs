//! Livestock screen use case.
//!
//! Load follows the farm-scoped fetch; every mutation validates the form,
//! calls the backend, then re-enters the fetch so the screen re-renders from
//! fresh data.

use crate::error::UseCaseError;
use crate::farm_scope::{FarmContext, FarmScope, scope_items};
use crate::screen::ScreenState;
use grange_core::livestock::{Livestock, LivestockUpdate, NewLivestock};
use grange_core::validate;

pub struct LivestockScreen {
    ctx: FarmContext,
}

impl LivestockScreen {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Fetches the livestock of the selected farm.
    pub async fn load(&self) -> ScreenState<Livestock> {
        match self.try_load().await {
            Ok(state) => state,
            Err(e) => ScreenState::Failed(e),
        }
    }

    async fn try_load(&self) -> Result<ScreenState<Livestock>, UseCaseError> {
        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ScreenState::NoFarm);
        };
        let token = self.ctx.token().await?;
        let all = self
            .ctx
            .check_auth(self.ctx.backend().list_livestock(&token).await)
            .await?;
        Ok(ScreenState::Loaded {
            farm_id: farm.farm_id,
            items: scope_items(all, farm.farm_id),
        })
    }

    /// Adds livestock to the selected farm and reloads.
    ///
    /// Validation failures block submission without any network call.
    pub async fn add(
        &self,
        animal_type: &str,
        quantity: i64,
    ) -> Result<ScreenState<Livestock>, UseCaseError> {
        validate::require_non_empty("animal type", animal_type)?;
        validate::require_positive_quantity("quantity", quantity)?;

        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ScreenState::NoFarm);
        };
        let token = self.ctx.token().await?;
        let new = NewLivestock {
            farm_id: farm.farm_id,
            animal_type: animal_type.to_string(),
            quantity,
            purchase_date: None,
            health_status: None,
        };
        self.ctx
            .check_auth(self.ctx.backend().create_livestock(&token, &new).await)
            .await?;
        Ok(self.load().await)
    }

    /// Updates a record and reloads.
    pub async fn edit(
        &self,
        livestock_id: i64,
        animal_type: &str,
        quantity: i64,
    ) -> Result<ScreenState<Livestock>, UseCaseError> {
        validate::require_non_empty("animal type", animal_type)?;
        validate::require_positive_quantity("quantity", quantity)?;

        let token = self.ctx.token().await?;
        let update = LivestockUpdate {
            animal_type: Some(animal_type.to_string()),
            quantity: Some(quantity),
            ..Default::default()
        };
        self.ctx
            .check_auth(
                self.ctx
                    .backend()
                    .update_livestock(&token, livestock_id, &update)
                    .await,
            )
            .await?;
        Ok(self.load().await)
    }

    /// Deletes a record and reloads.
    pub async fn remove(&self, livestock_id: i64) -> Result<ScreenState<Livestock>, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().delete_livestock(&token, livestock_id).await)
            .await?;
        Ok(self.load().await)
    }
}
