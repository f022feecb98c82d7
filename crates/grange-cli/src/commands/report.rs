use anyhow::Result;
use grange_application::FarmContext;
use grange_application::reports::{ReportOutcome, ReportScreen};

pub async fn run(ctx: FarmContext) -> Result<()> {
    match ReportScreen::new(ctx).build().await? {
        ReportOutcome::NoFarm => {
            println!("No farm yet. Create one with `grange farm add <name>`.");
        }
        ReportOutcome::Ready(report) => {
            println!("Report for {} ({})", report.farm_name, report.farm_id);
            println!("Livestock head: {}", report.livestock_head);
            println!("Crops: {}", report.crop_count);
            println!("Sales revenue: {:.2}", report.sales_revenue);
            println!("Expenses: {:.2}", report.expense_total);
            println!("Net: {:.2}", report.net);
        }
    }
    Ok(())
}
