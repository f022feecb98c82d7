use crate::commands::utils::print_state;
use anyhow::Result;
use grange_application::FarmContext;
use grange_application::livestock::LivestockScreen;
use grange_core::livestock::Livestock;

fn line(animal: &Livestock) -> String {
    format!(
        "{:>6}  {}  x{}",
        animal.livestock_id, animal.animal_type, animal.quantity
    )
}

pub async fn list(ctx: FarmContext) -> Result<()> {
    print_state(LivestockScreen::new(ctx).load().await, line)
}

pub async fn add(ctx: FarmContext, animal_type: &str, quantity: i64) -> Result<()> {
    let state = LivestockScreen::new(ctx).add(animal_type, quantity).await?;
    println!("✅ Added {quantity} {animal_type}");
    print_state(state, line)
}

pub async fn edit(
    ctx: FarmContext,
    livestock_id: i64,
    animal_type: &str,
    quantity: i64,
) -> Result<()> {
    let state = LivestockScreen::new(ctx)
        .edit(livestock_id, animal_type, quantity)
        .await?;
    print_state(state, line)
}

pub async fn remove(ctx: FarmContext, livestock_id: i64) -> Result<()> {
    let state = LivestockScreen::new(ctx).remove(livestock_id).await?;
    println!("Deleted livestock {livestock_id}.");
    print_state(state, line)
}
