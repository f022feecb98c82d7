use crate::commands::utils::print_state;
use anyhow::Result;
use grange_application::FarmContext;
use grange_application::crops::CropsScreen;
use grange_core::crop::Crop;

fn line(crop: &Crop) -> String {
    let expected = crop
        .expected_yield
        .map(|y| format!("{y} expected"))
        .unwrap_or_else(|| "-".to_string());
    format!("{:>6}  {}  {}", crop.crop_id, crop.crop_name, expected)
}

pub async fn list(ctx: FarmContext) -> Result<()> {
    print_state(CropsScreen::new(ctx).load().await, line)
}

pub async fn add(ctx: FarmContext, name: &str, expected_yield: f64) -> Result<()> {
    let state = CropsScreen::new(ctx).add(name, expected_yield).await?;
    println!("✅ Added crop {name}");
    print_state(state, line)
}

pub async fn edit(ctx: FarmContext, crop_id: i64, name: &str, expected_yield: f64) -> Result<()> {
    let state = CropsScreen::new(ctx)
        .edit(crop_id, name, expected_yield)
        .await?;
    print_state(state, line)
}

pub async fn remove(ctx: FarmContext, crop_id: i64) -> Result<()> {
    let state = CropsScreen::new(ctx).remove(crop_id).await?;
    println!("Deleted crop {crop_id}.");
    print_state(state, line)
}
