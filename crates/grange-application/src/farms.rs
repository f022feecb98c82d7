//! Farm management use case.
//!
//! Farms are not themselves farm-scoped; this lists the user's farms and
//! creates the first one when the fetch pattern reports `NoFarm`.

use crate::error::UseCaseError;
use crate::farm_scope::FarmContext;
use grange_core::farm::{Farm, NewFarm};
use grange_core::validate;

pub struct FarmDirectory {
    ctx: FarmContext,
}

impl FarmDirectory {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Lists the user's farms.
    pub async fn list(&self) -> Result<Vec<Farm>, UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().list_farms(&token).await)
            .await
    }

    /// Creates a farm and selects it when no farm is selected yet, so the
    /// next screen load scopes to the farm just created.
    pub async fn add(
        &self,
        farm_name: &str,
        location: Option<&str>,
        size_acres: Option<f64>,
    ) -> Result<Farm, UseCaseError> {
        validate::require_non_empty("farm name", farm_name)?;
        if let Some(size) = size_acres {
            validate::require_positive_amount("size in acres", size)?;
        }

        let token = self.ctx.token().await?;
        let new = NewFarm {
            farm_name: farm_name.to_string(),
            location: location.map(str::to_string),
            size_acres,
        };
        let created = self
            .ctx
            .check_auth(self.ctx.backend().create_farm(&token, &new).await)
            .await?;

        if self.ctx.session().session().await.selected_farm_id.is_none() {
            self.ctx.session().set_farm_id(created.farm_id).await?;
        }
        Ok(created)
    }

    /// Selects the active farm for all subsequent scoped fetches.
    pub async fn select(&self, farm_id: i64) -> Result<(), UseCaseError> {
        self.ctx.session().set_farm_id(farm_id).await?;
        Ok(())
    }

    /// Deletes a farm.
    pub async fn remove(&self, farm_id: i64) -> Result<(), UseCaseError> {
        let token = self.ctx.token().await?;
        self.ctx
            .check_auth(self.ctx.backend().delete_farm(&token, farm_id).await)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, fake_store, farm};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_add_selects_first_farm() {
        let store = fake_store("tok", None);
        let directory = FarmDirectory::new(FarmContext::new(
            Arc::new(FakeBackend::default()),
            store.clone(),
        ));

        let created = directory.add("Hillside", Some("Nakuru"), Some(12.0)).await.unwrap();

        use grange_core::session::SessionStore;
        let session = store.session().await;
        assert_eq!(session.selected_farm_id, Some(created.farm_id));
    }

    #[tokio::test]
    async fn test_add_keeps_existing_selection() {
        let store = fake_store("tok", Some(1));
        let backend = FakeBackend::default().with_farms(vec![farm(1)]);
        let directory = FarmDirectory::new(FarmContext::new(Arc::new(backend), store.clone()));

        directory.add("Second", None, None).await.unwrap();

        use grange_core::session::SessionStore;
        assert_eq!(store.session().await.selected_farm_id, Some(1));
    }

    #[tokio::test]
    async fn test_add_requires_name() {
        let directory = FarmDirectory::new(FarmContext::new(
            Arc::new(FakeBackend::default()),
            fake_store("tok", None),
        ));
        assert!(directory.add("", None, None).await.unwrap_err().is_validation());
    }
}
