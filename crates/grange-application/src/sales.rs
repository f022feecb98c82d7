//! Sales screen use case.

use crate::error::UseCaseError;
use crate::farm_scope::{FarmContext, FarmScope, scope_items};
use crate::screen::ScreenState;
use grange_core::sale::{NewSale, Sale, SaleUpdate};
use grange_core::validate;

pub struct SalesScreen {
    ctx: FarmContext,
}

impl SalesScreen {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Fetches the sales of the selected farm.
    pub async fn load(&self) -> ScreenState<Sale> {
        match self.try_load().await {
            Ok(state) => state,
            Err(e) => ScreenState::Failed(e),
        }
    }

    async fn try_load(&self) -> Result<ScreenState<Sale>, UseCaseError> {
        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ScreenState::NoFarm);
        };
        let token = self.ctx.token().await?;
        let all = self
            .ctx
            .check_auth(self.ctx.backend().list_sales(&token).await)
            .await?;
        Ok(ScreenState::Loaded {
            farm_id: farm.farm_id,
            items: scope_items(all, farm.farm_id),
        })
    }

    /// Records a sale and reloads. The backend computes the total.
    pub async fn add(
        &self,
        item_name: &str,
        quantity: f64,
        unit_price: f64,
    ) -> Result<ScreenState<Sale>, UseCaseError> {
        validate::require_non_empty("item name", item_name)?;
        validate::require_positive_amount("quantity", quantity)?;
        validate::require_positive_amount("unit price", unit_price)?;

        let FarmScope::Selected(farm) = self.ctx.resolve_scope().await? else {
            return Ok(ScreenState::NoFarm);
        };
        let token = self.ctx.token().await?;
        let new = NewSale {
            farm_id: farm.farm_id,
            item_name: item_name.to_string(),
            quantity,
            unit_price,
            sale_date: None,
            notes: None,
        };
        self.ctx
            .check_auth(self.ctx.backend().create_sale(&token, &new).await)
            .await?;
        Ok(self.load().await)
    }

    /// Updates a sale and reloads.
    pub async fn edit(
        &self,
        sale_id: i64,
        item_name: &str,
        quantity: f64,
        unit_price: f64,
    ) -> Result<ScreenState<Sale>, UseCaseError> {
        validate::require_non_empty("item name", item_name)?;
        validate::require_positive_amount("quantity", quantity)?;
        validate::require_positive_amount("unit price", unit_price)?;

        let token = self.ctx.token().await?;
        let update = SaleUpdate {
            item_name: Some(item_name.to_string()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            ..Default::default()
        };
        self.ctx
            .check_auth(self.ctx.backend().update_sale(&token, sale_id, &update).await)
            .await?;
        Ok(self.load().await)
    }

    /// Deletes a sale and reloads.
    pub async fn remove(&self, sale_id: i64) -> Result<ScreenState<Sale>, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().delete_sale(&token, sale_id).await)
            .await?;
        Ok(self.load().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, fake_store, farm, sale};
    use std::sync::Arc;

    fn screen(backend: FakeBackend) -> SalesScreen {
        SalesScreen::new(FarmContext::new(Arc::new(backend), fake_store("tok", None)))
    }

    #[tokio::test]
    async fn test_add_computes_total_backend_side() {
        let backend = FakeBackend::default().with_farms(vec![farm(1)]);
        let screen = screen(backend);

        let state = screen.add("Milk", 20.0, 1.5).await.unwrap();
        let items = state.items().unwrap();
        assert_eq!(items[0].total_amount, 30.0);
    }

    #[tokio::test]
    async fn test_add_rejects_bad_price() {
        let backend = FakeBackend::default().with_farms(vec![farm(1)]);
        let screen = screen(backend);

        assert!(screen.add("Milk", 20.0, 0.0).await.unwrap_err().is_validation());
        assert!(
            screen
                .add("Milk", 20.0, f64::NAN)
                .await
                .unwrap_err()
                .is_validation()
        );
    }

    #[tokio::test]
    async fn test_load_filters_other_farms_sales() {
        let backend = FakeBackend::default()
            .with_farms(vec![farm(1)])
            .with_sales(vec![sale(1, 1, 10.0), sale(2, 2, 99.0)]);
        let screen = screen(backend);

        let state = screen.load().await;
        let items = state.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sale_id, 1);
    }
}
