//! Abstract backend seam.
//!
//! The application layer consumes this trait instead of `BackendClient`
//! directly, so the farm-scoped fetch and the CRUD use cases can be tested
//! against an in-memory fake (including the "zero resource calls when there
//! are no farms" property).

use crate::auth::{Credentials, Registration};
use crate::client::BackendClient;
use crate::error::ApiError;
use crate::expenses::ExpenseReport;
use async_trait::async_trait;
use grange_core::crop::{Crop, CropUpdate, NewCrop};
use grange_core::dashboard::{DashboardStats, DashboardSummary};
use grange_core::expense::{Expense, ExpenseUpdate, NewExpense};
use grange_core::farm::{Farm, FarmUpdate, NewFarm};
use grange_core::livestock::{Livestock, LivestockUpdate, NewLivestock};
use grange_core::sale::{NewSale, Sale, SaleUpdate};

/// The farm-management backend collaborator.
///
/// Each method maps to one REST call; `token` is the bearer credential sent
/// on every authenticated request.
#[async_trait]
pub trait FarmBackend: Send + Sync {
    // Auth
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;
    async fn register(&self, registration: &Registration) -> Result<String, ApiError>;

    // Farms
    async fn list_farms(&self, token: &str) -> Result<Vec<Farm>, ApiError>;
    async fn create_farm(&self, token: &str, farm: &NewFarm) -> Result<Farm, ApiError>;
    async fn update_farm(
        &self,
        token: &str,
        farm_id: i64,
        update: &FarmUpdate,
    ) -> Result<(), ApiError>;
    async fn delete_farm(&self, token: &str, farm_id: i64) -> Result<(), ApiError>;

    // Livestock
    async fn list_livestock(&self, token: &str) -> Result<Vec<Livestock>, ApiError>;
    async fn create_livestock(
        &self,
        token: &str,
        livestock: &NewLivestock,
    ) -> Result<i64, ApiError>;
    async fn update_livestock(
        &self,
        token: &str,
        livestock_id: i64,
        update: &LivestockUpdate,
    ) -> Result<(), ApiError>;
    async fn delete_livestock(&self, token: &str, livestock_id: i64) -> Result<(), ApiError>;

    // Crops
    async fn list_crops(&self, token: &str) -> Result<Vec<Crop>, ApiError>;
    async fn create_crop(&self, token: &str, crop: &NewCrop) -> Result<i64, ApiError>;
    async fn update_crop(
        &self,
        token: &str,
        crop_id: i64,
        update: &CropUpdate,
    ) -> Result<(), ApiError>;
    async fn delete_crop(&self, token: &str, crop_id: i64) -> Result<(), ApiError>;

    // Sales
    async fn list_sales(&self, token: &str) -> Result<Vec<Sale>, ApiError>;
    async fn create_sale(&self, token: &str, sale: &NewSale) -> Result<Sale, ApiError>;
    async fn update_sale(
        &self,
        token: &str,
        sale_id: i64,
        update: &SaleUpdate,
    ) -> Result<Sale, ApiError>;
    async fn delete_sale(&self, token: &str, sale_id: i64) -> Result<(), ApiError>;

    // Expenses (server-side farm scoping)
    async fn expenses_for_farm(&self, token: &str, farm_id: i64)
    -> Result<ExpenseReport, ApiError>;
    async fn create_expense(&self, token: &str, expense: &NewExpense)
    -> Result<Expense, ApiError>;
    async fn update_expense(
        &self,
        token: &str,
        expense_id: i64,
        update: &ExpenseUpdate,
    ) -> Result<Expense, ApiError>;
    async fn delete_expense(&self, token: &str, expense_id: i64) -> Result<(), ApiError>;

    // Dashboard
    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError>;
    async fn dashboard_summary(&self, token: &str) -> Result<DashboardSummary, ApiError>;
}

#[async_trait]
impl FarmBackend for BackendClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        BackendClient::login(self, credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        BackendClient::register(self, registration).await
    }

    async fn list_farms(&self, token: &str) -> Result<Vec<Farm>, ApiError> {
        BackendClient::list_farms(self, token).await
    }

    async fn create_farm(&self, token: &str, farm: &NewFarm) -> Result<Farm, ApiError> {
        BackendClient::create_farm(self, token, farm).await
    }

    async fn update_farm(
        &self,
        token: &str,
        farm_id: i64,
        update: &FarmUpdate,
    ) -> Result<(), ApiError> {
        BackendClient::update_farm(self, token, farm_id, update).await
    }

    async fn delete_farm(&self, token: &str, farm_id: i64) -> Result<(), ApiError> {
        BackendClient::delete_farm(self, token, farm_id).await
    }

    async fn list_livestock(&self, token: &str) -> Result<Vec<Livestock>, ApiError> {
        BackendClient::list_livestock(self, token).await
    }

    async fn create_livestock(
        &self,
        token: &str,
        livestock: &NewLivestock,
    ) -> Result<i64, ApiError> {
        BackendClient::create_livestock(self, token, livestock).await
    }

    async fn update_livestock(
        &self,
        token: &str,
        livestock_id: i64,
        update: &LivestockUpdate,
    ) -> Result<(), ApiError> {
        BackendClient::update_livestock(self, token, livestock_id, update).await
    }

    async fn delete_livestock(&self, token: &str, livestock_id: i64) -> Result<(), ApiError> {
        BackendClient::delete_livestock(self, token, livestock_id).await
    }

    async fn list_crops(&self, token: &str) -> Result<Vec<Crop>, ApiError> {
        BackendClient::list_crops(self, token).await
    }

    async fn create_crop(&self, token: &str, crop: &NewCrop) -> Result<i64, ApiError> {
        BackendClient::create_crop(self, token, crop).await
    }

    async fn update_crop(
        &self,
        token: &str,
        crop_id: i64,
        update: &CropUpdate,
    ) -> Result<(), ApiError> {
        BackendClient::update_crop(self, token, crop_id, update).await
    }

    async fn delete_crop(&self, token: &str, crop_id: i64) -> Result<(), ApiError> {
        BackendClient::delete_crop(self, token, crop_id).await
    }

    async fn list_sales(&self, token: &str) -> Result<Vec<Sale>, ApiError> {
        BackendClient::list_sales(self, token).await
    }

    async fn create_sale(&self, token: &str, sale: &NewSale) -> Result<Sale, ApiError> {
        BackendClient::create_sale(self, token, sale).await
    }

    async fn update_sale(
        &self,
        token: &str,
        sale_id: i64,
        update: &SaleUpdate,
    ) -> Result<Sale, ApiError> {
        BackendClient::update_sale(self, token, sale_id, update).await
    }

    async fn delete_sale(&self, token: &str, sale_id: i64) -> Result<(), ApiError> {
        BackendClient::delete_sale(self, token, sale_id).await
    }

    async fn expenses_for_farm(
        &self,
        token: &str,
        farm_id: i64,
    ) -> Result<ExpenseReport, ApiError> {
        BackendClient::expenses_for_farm(self, token, farm_id).await
    }

    async fn create_expense(
        &self,
        token: &str,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        BackendClient::create_expense(self, token, expense).await
    }

    async fn update_expense(
        &self,
        token: &str,
        expense_id: i64,
        update: &ExpenseUpdate,
    ) -> Result<Expense, ApiError> {
        BackendClient::update_expense(self, token, expense_id, update).await
    }

    async fn delete_expense(&self, token: &str, expense_id: i64) -> Result<(), ApiError> {
        BackendClient::delete_expense(self, token, expense_id).await
    }

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        BackendClient::dashboard_stats(self, token).await
    }

    async fn dashboard_summary(&self, token: &str) -> Result<DashboardSummary, ApiError> {
        BackendClient::dashboard_summary(self, token).await
    }
}
