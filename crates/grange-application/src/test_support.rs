//! In-memory fakes for use-case tests.
//!
//! `FakeBackend` stands in for the REST backend and counts list calls, so
//! tests can assert that the farm-scoped fetch never touches a resource
//! endpoint when the user has no farm. `MemorySessionStore` is a session
//! store without a file behind it.

use async_trait::async_trait;
use grange_api::auth::{Credentials, Registration};
use grange_api::expenses::ExpenseReport;
use grange_api::{ApiError, FarmBackend};
use grange_core::crop::{Crop, CropUpdate, NewCrop};
use grange_core::dashboard::{DashboardStats, DashboardSummary};
use grange_core::error::Result as CoreResult;
use grange_core::expense::{Expense, ExpenseUpdate, NewExpense};
use grange_core::farm::{Farm, FarmUpdate, NewFarm};
use grange_core::livestock::{Livestock, LivestockUpdate, NewLivestock};
use grange_core::sale::{NewSale, Sale, SaleUpdate};
use grange_core::session::{Session, SessionStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Call counters shared with tests.
#[derive(Default)]
pub struct Counters {
    farm_lists: AtomicUsize,
    livestock_lists: AtomicUsize,
    crop_lists: AtomicUsize,
    sale_lists: AtomicUsize,
    expense_fetches: AtomicUsize,
}

impl Counters {
    pub fn farm_lists(&self) -> usize {
        self.farm_lists.load(Ordering::SeqCst)
    }

    /// Total resource-collection fetches (everything except the farm list).
    pub fn resource_fetches(&self) -> usize {
        self.livestock_lists.load(Ordering::SeqCst)
            + self.crop_lists.load(Ordering::SeqCst)
            + self.sale_lists.load(Ordering::SeqCst)
            + self.expense_fetches.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct State {
    farms: Vec<Farm>,
    livestock: Vec<Livestock>,
    crops: Vec<Crop>,
    sales: Vec<Sale>,
    expenses: Vec<Expense>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id + 1000
    }
}

/// Configurable in-memory backend.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
    counters: Arc<Counters>,
    reject_tokens: bool,
}

impl FakeBackend {
    pub fn with_farms(self, farms: Vec<Farm>) -> Self {
        self.state.lock().unwrap().farms = farms;
        self
    }

    pub fn with_livestock(self, livestock: Vec<Livestock>) -> Self {
        self.state.lock().unwrap().livestock = livestock;
        self
    }

    pub fn with_crops(self, crops: Vec<Crop>) -> Self {
        self.state.lock().unwrap().crops = crops;
        self
    }

    pub fn with_sales(self, sales: Vec<Sale>) -> Self {
        self.state.lock().unwrap().sales = sales;
        self
    }

    pub fn with_expenses(self, expenses: Vec<Expense>) -> Self {
        self.state.lock().unwrap().expenses = expenses;
        self
    }

    /// Every authenticated call answers Unauthorized.
    pub fn rejecting_tokens(mut self) -> Self {
        self.reject_tokens = true;
        self
    }

    pub fn counters(&self) -> Arc<Counters> {
        self.counters.clone()
    }

    fn check(&self, _token: &str) -> Result<(), ApiError> {
        if self.reject_tokens {
            Err(ApiError::Unauthorized)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FarmBackend for FakeBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<String, ApiError> {
        if self.reject_tokens {
            return Err(ApiError::Unauthorized);
        }
        Ok("fake-token".to_string())
    }

    async fn register(&self, _registration: &Registration) -> Result<String, ApiError> {
        Ok("User registered".to_string())
    }

    async fn list_farms(&self, token: &str) -> Result<Vec<Farm>, ApiError> {
        self.check(token)?;
        self.counters.farm_lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().farms.clone())
    }

    async fn create_farm(&self, token: &str, farm: &NewFarm) -> Result<Farm, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let created = Farm {
            farm_id: state.next_id(),
            farm_name: farm.farm_name.clone(),
            location: farm.location.clone(),
            size_acres: farm.size_acres,
        };
        state.farms.push(created.clone());
        Ok(created)
    }

    async fn update_farm(
        &self,
        token: &str,
        farm_id: i64,
        update: &FarmUpdate,
    ) -> Result<(), ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.farms.iter_mut().find(|f| f.farm_id == farm_id) {
            if let Some(name) = &update.farm_name {
                existing.farm_name = name.clone();
            }
            if let Some(location) = &update.location {
                existing.location = Some(location.clone());
            }
            if let Some(size) = update.size_acres {
                existing.size_acres = Some(size);
            }
        }
        Ok(())
    }

    async fn delete_farm(&self, token: &str, farm_id: i64) -> Result<(), ApiError> {
        self.check(token)?;
        self.state.lock().unwrap().farms.retain(|f| f.farm_id != farm_id);
        Ok(())
    }

    async fn list_livestock(&self, token: &str) -> Result<Vec<Livestock>, ApiError> {
        self.check(token)?;
        self.counters.livestock_lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().livestock.clone())
    }

    async fn create_livestock(
        &self,
        token: &str,
        livestock: &NewLivestock,
    ) -> Result<i64, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.livestock.push(Livestock {
            livestock_id: id,
            farm_id: livestock.farm_id,
            animal_type: livestock.animal_type.clone(),
            quantity: livestock.quantity,
            purchase_date: livestock.purchase_date,
            health_status: livestock.health_status.clone(),
        });
        Ok(id)
    }

    async fn update_livestock(
        &self,
        token: &str,
        livestock_id: i64,
        update: &LivestockUpdate,
    ) -> Result<(), ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state
            .livestock
            .iter_mut()
            .find(|l| l.livestock_id == livestock_id)
        {
            if let Some(animal_type) = &update.animal_type {
                existing.animal_type = animal_type.clone();
            }
            if let Some(quantity) = update.quantity {
                existing.quantity = quantity;
            }
        }
        Ok(())
    }

    async fn delete_livestock(&self, token: &str, livestock_id: i64) -> Result<(), ApiError> {
        self.check(token)?;
        self.state
            .lock()
            .unwrap()
            .livestock
            .retain(|l| l.livestock_id != livestock_id);
        Ok(())
    }

    async fn list_crops(&self, token: &str) -> Result<Vec<Crop>, ApiError> {
        self.check(token)?;
        self.counters.crop_lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().crops.clone())
    }

    async fn create_crop(&self, token: &str, crop: &NewCrop) -> Result<i64, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.crops.push(Crop {
            crop_id: id,
            farm_id: crop.farm_id,
            crop_name: crop.crop_name.clone(),
            crop_type: crop.crop_type.clone(),
            planting_date: crop.planting_date,
            harvest_date: crop.harvest_date,
            expected_yield: crop.expected_yield,
        });
        Ok(id)
    }

    async fn update_crop(
        &self,
        token: &str,
        crop_id: i64,
        update: &CropUpdate,
    ) -> Result<(), ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.crops.iter_mut().find(|c| c.crop_id == crop_id) {
            if let Some(name) = &update.crop_name {
                existing.crop_name = name.clone();
            }
            if let Some(expected_yield) = update.expected_yield {
                existing.expected_yield = Some(expected_yield);
            }
        }
        Ok(())
    }

    async fn delete_crop(&self, token: &str, crop_id: i64) -> Result<(), ApiError> {
        self.check(token)?;
        self.state.lock().unwrap().crops.retain(|c| c.crop_id != crop_id);
        Ok(())
    }

    async fn list_sales(&self, token: &str) -> Result<Vec<Sale>, ApiError> {
        self.check(token)?;
        self.counters.sale_lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().sales.clone())
    }

    async fn create_sale(&self, token: &str, sale: &NewSale) -> Result<Sale, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let created = Sale {
            sale_id: state.next_id(),
            farm_id: sale.farm_id,
            item_name: sale.item_name.clone(),
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            total_amount: sale.quantity * sale.unit_price,
            sale_date: sale
                .sale_date
                .unwrap_or_else(|| chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            notes: sale.notes.clone(),
        };
        state.sales.push(created.clone());
        Ok(created)
    }

    async fn update_sale(
        &self,
        token: &str,
        sale_id: i64,
        update: &SaleUpdate,
    ) -> Result<Sale, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let existing = state
            .sales
            .iter_mut()
            .find(|s| s.sale_id == sale_id)
            .ok_or(ApiError::Server {
                status: 404,
                message: "Sale not found".to_string(),
            })?;
        if let Some(item_name) = &update.item_name {
            existing.item_name = item_name.clone();
        }
        if let Some(quantity) = update.quantity {
            existing.quantity = quantity;
        }
        if let Some(unit_price) = update.unit_price {
            existing.unit_price = unit_price;
        }
        existing.total_amount = existing.quantity * existing.unit_price;
        Ok(existing.clone())
    }

    async fn delete_sale(&self, token: &str, sale_id: i64) -> Result<(), ApiError> {
        self.check(token)?;
        self.state.lock().unwrap().sales.retain(|s| s.sale_id != sale_id);
        Ok(())
    }

    async fn expenses_for_farm(
        &self,
        token: &str,
        farm_id: i64,
    ) -> Result<ExpenseReport, ApiError> {
        self.check(token)?;
        self.counters.expense_fetches.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        let expenses: Vec<Expense> = state
            .expenses
            .iter()
            .filter(|e| e.farm_id == farm_id)
            .cloned()
            .collect();
        let total_expenses = expenses.iter().map(|e| e.amount).sum();
        Ok(ExpenseReport {
            expenses,
            total_expenses,
        })
    }

    async fn create_expense(
        &self,
        token: &str,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let created = Expense {
            expense_id: state.next_id(),
            farm_id: expense.farm_id,
            amount: expense.amount,
            description: expense.description.clone(),
            date: expense.date,
        };
        state.expenses.push(created.clone());
        Ok(created)
    }

    async fn update_expense(
        &self,
        token: &str,
        expense_id: i64,
        update: &ExpenseUpdate,
    ) -> Result<Expense, ApiError> {
        self.check(token)?;
        let mut state = self.state.lock().unwrap();
        let existing = state
            .expenses
            .iter_mut()
            .find(|e| e.expense_id == expense_id)
            .ok_or(ApiError::Server {
                status: 404,
                message: "Expense not found".to_string(),
            })?;
        if let Some(amount) = update.amount {
            existing.amount = amount;
        }
        if let Some(description) = &update.description {
            existing.description = Some(description.clone());
        }
        Ok(existing.clone())
    }

    async fn delete_expense(&self, token: &str, expense_id: i64) -> Result<(), ApiError> {
        self.check(token)?;
        self.state
            .lock()
            .unwrap()
            .expenses
            .retain(|e| e.expense_id != expense_id);
        Ok(())
    }

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        self.check(token)?;
        let state = self.state.lock().unwrap();
        let total_sales: f64 = state.sales.iter().map(|s| s.total_amount).sum();
        let total_expenses: f64 = state.expenses.iter().map(|e| e.amount).sum();
        Ok(DashboardStats {
            total_farms: state.farms.len() as i64,
            total_livestock: state.livestock.iter().map(|l| l.quantity).sum(),
            total_crops: state.crops.len() as i64,
            total_sales,
            total_expenses,
            net_profit: total_sales - total_expenses,
            farms: vec![],
            recent_sales: vec![],
            recent_expenses: vec![],
        })
    }

    async fn dashboard_summary(&self, token: &str) -> Result<DashboardSummary, ApiError> {
        let stats = self.dashboard_stats(token).await?;
        Ok(DashboardSummary {
            total_farms: stats.total_farms,
            total_sales: stats.total_sales,
            total_expenses: stats.total_expenses,
            net_profit: stats.net_profit,
        })
    }
}

/// Session store without durable storage behind it.
pub struct MemorySessionStore {
    state: tokio::sync::Mutex<Session>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn login(&self, token: &str, farm_id: Option<i64>) -> CoreResult<()> {
        let mut state = self.state.lock().await;
        let selected = farm_id.or(state.selected_farm_id);
        *state = Session::authenticated(token, selected);
        Ok(())
    }

    async fn logout(&self) -> CoreResult<()> {
        *self.state.lock().await = Session::logged_out();
        Ok(())
    }

    async fn set_farm_id(&self, farm_id: i64) -> CoreResult<()> {
        self.state.lock().await.selected_farm_id = Some(farm_id);
        Ok(())
    }

    async fn session(&self) -> Session {
        self.state.lock().await.clone()
    }
}

/// An authenticated in-memory store.
pub fn fake_store(token: &str, farm_id: Option<i64>) -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore {
        state: tokio::sync::Mutex::new(Session::authenticated(token, farm_id)),
    })
}

/// A logged-out in-memory store.
pub fn logged_out_store() -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore {
        state: tokio::sync::Mutex::new(Session::logged_out()),
    })
}

pub fn farm(farm_id: i64) -> Farm {
    Farm {
        farm_id,
        farm_name: format!("Farm {farm_id}"),
        location: None,
        size_acres: None,
    }
}

pub fn livestock(livestock_id: i64, farm_id: i64) -> Livestock {
    Livestock {
        livestock_id,
        farm_id,
        animal_type: "goat".to_string(),
        quantity: 5,
        purchase_date: None,
        health_status: None,
    }
}

pub fn crop(crop_id: i64, farm_id: i64) -> Crop {
    Crop {
        crop_id,
        farm_id,
        crop_name: "Maize".to_string(),
        crop_type: None,
        planting_date: None,
        harvest_date: None,
        expected_yield: Some(10.0),
    }
}

pub fn sale(sale_id: i64, farm_id: i64, total_amount: f64) -> Sale {
    Sale {
        sale_id,
        farm_id,
        item_name: "Milk".to_string(),
        quantity: 1.0,
        unit_price: total_amount,
        total_amount,
        sale_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        notes: None,
    }
}

pub fn expense(expense_id: i64, farm_id: i64, amount: f64) -> Expense {
    Expense {
        expense_id,
        farm_id,
        amount,
        description: None,
        date: None,
    }
}
