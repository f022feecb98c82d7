//! Sales endpoints.
//!
//! Unlike livestock and crops, sales can also be fetched pre-filtered by
//! farm (`/sales/farm/{farm_id}`) and aggregated over a date range
//! (`/sales/total`).

use crate::client::{BackendClient, MessageResponse};
use crate::error::ApiError;
use grange_core::sale::{NewSale, Sale, SaleUpdate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SalesEnvelope {
    sales: Vec<Sale>,
}

#[derive(Debug, Deserialize)]
struct SaleEnvelope {
    sale: Sale,
}

#[derive(Debug, Deserialize)]
struct TotalSalesEnvelope {
    total_sales: f64,
}

impl BackendClient {
    /// Fetches all sales across the user's farms.
    pub async fn list_sales(&self, token: &str) -> Result<Vec<Sale>, ApiError> {
        let envelope: SalesEnvelope = self.get(token, "/sales/").await?;
        Ok(envelope.sales)
    }

    /// Fetches sales for one farm, filtered server-side.
    pub async fn sales_for_farm(&self, token: &str, farm_id: i64) -> Result<Vec<Sale>, ApiError> {
        let envelope: SalesEnvelope = self.get(token, &format!("/sales/farm/{farm_id}")).await?;
        Ok(envelope.sales)
    }

    /// Creates a sale. The backend computes `total_amount`.
    pub async fn create_sale(&self, token: &str, sale: &NewSale) -> Result<Sale, ApiError> {
        let envelope: SaleEnvelope = self.post(token, "/sales/", sale).await?;
        Ok(envelope.sale)
    }

    /// Updates a sale by id, returning the updated record.
    pub async fn update_sale(
        &self,
        token: &str,
        sale_id: i64,
        update: &SaleUpdate,
    ) -> Result<Sale, ApiError> {
        let envelope: SaleEnvelope = self
            .put(token, &format!("/sales/{sale_id}"), update)
            .await?;
        Ok(envelope.sale)
    }

    /// Deletes a sale by id.
    pub async fn delete_sale(&self, token: &str, sale_id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self.delete(token, &format!("/sales/{sale_id}")).await?;
        Ok(())
    }

    /// Total sales amount over an optional date range (YYYY-MM-DD).
    pub async fn total_sales(
        &self,
        token: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<f64, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(start) = start_date {
            query.push(("start_date", start));
        }
        if let Some(end) = end_date {
            query.push(("end_date", end));
        }

        let envelope: TotalSalesEnvelope = self
            .get_with_query(token, "/sales/total", &query)
            .await?;
        Ok(envelope.total_sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_envelope_decodes() {
        let json = r#"{"sale": {
            "sale_id": 11, "farm_id": 1, "item_name": "Milk", "quantity": 20.0,
            "unit_price": 1.5, "total_amount": 30.0, "sale_date": "2026-08-01"
        }}"#;
        let envelope: SaleEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.sale.total_amount, 30.0);
        assert!(envelope.sale.notes.is_none());
    }

    #[test]
    fn test_total_sales_envelope_decodes() {
        let envelope: TotalSalesEnvelope =
            serde_json::from_str(r#"{"total_sales": 812.25}"#).unwrap();
        assert_eq!(envelope.total_sales, 812.25);
    }
}
