use crate::commands::utils::print_state;
use anyhow::Result;
use grange_application::FarmContext;
use grange_application::sales::SalesScreen;
use grange_core::sale::Sale;

fn line(sale: &Sale) -> String {
    format!(
        "{:>6}  {}  {} x {:.2} = {:.2}  ({})",
        sale.sale_id, sale.item_name, sale.quantity, sale.unit_price, sale.total_amount,
        sale.sale_date
    )
}

pub async fn list(ctx: FarmContext) -> Result<()> {
    print_state(SalesScreen::new(ctx).load().await, line)
}

pub async fn add(ctx: FarmContext, item_name: &str, quantity: f64, unit_price: f64) -> Result<()> {
    let state = SalesScreen::new(ctx)
        .add(item_name, quantity, unit_price)
        .await?;
    println!("✅ Recorded sale of {item_name}");
    print_state(state, line)
}

pub async fn edit(
    ctx: FarmContext,
    sale_id: i64,
    item_name: &str,
    quantity: f64,
    unit_price: f64,
) -> Result<()> {
    let state = SalesScreen::new(ctx)
        .edit(sale_id, item_name, quantity, unit_price)
        .await?;
    print_state(state, line)
}

pub async fn remove(ctx: FarmContext, sale_id: i64) -> Result<()> {
    let state = SalesScreen::new(ctx).remove(sale_id).await?;
    println!("Deleted sale {sale_id}.");
    print_state(state, line)
}
