use anyhow::Result;
use grange_application::FarmContext;
use grange_application::dashboard::DashboardScreen;

pub async fn run(ctx: FarmContext, summary: bool) -> Result<()> {
    let screen = DashboardScreen::new(ctx);

    if summary {
        let s = screen.summary().await?;
        println!("Farms: {}", s.total_farms);
        println!("Sales: {:.2}", s.total_sales);
        println!("Expenses: {:.2}", s.total_expenses);
        println!("Net profit: {:.2}", s.net_profit);
        return Ok(());
    }

    let stats = screen.load().await?;
    println!("Farms: {}", stats.total_farms);
    println!("Livestock: {}", stats.total_livestock);
    println!("Crops: {}", stats.total_crops);
    println!("Sales: {:.2}", stats.total_sales);
    println!("Expenses: {:.2}", stats.total_expenses);
    println!("Net profit: {:.2}", stats.net_profit);

    if !stats.farms.is_empty() {
        println!();
        for farm in &stats.farms {
            println!(
                "{:>6}  {}  sales {:.2}  expenses {:.2}  profit {:.2}",
                farm.farm_id, farm.farm_name, farm.total_sales, farm.total_expenses, farm.profit
            );
        }
    }
    Ok(())
}
