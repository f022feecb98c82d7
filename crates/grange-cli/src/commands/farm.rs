use crate::commands::utils::opt;
use anyhow::Result;
use grange_application::FarmContext;
use grange_application::farms::FarmDirectory;

pub async fn list(ctx: FarmContext) -> Result<()> {
    let farms = FarmDirectory::new(ctx).list().await?;
    if farms.is_empty() {
        println!("No farms yet. Create one with `grange farm add <name>`.");
        return Ok(());
    }
    for farm in &farms {
        let acres = farm
            .size_acres
            .map(|a| format!("{a} acres"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>6}  {}  {}  {}",
            farm.farm_id,
            farm.farm_name,
            opt(&farm.location),
            acres
        );
    }
    Ok(())
}

pub async fn add(
    ctx: FarmContext,
    name: &str,
    location: Option<&str>,
    acres: Option<f64>,
) -> Result<()> {
    let created = FarmDirectory::new(ctx).add(name, location, acres).await?;
    println!("✅ Created farm {} ({})", created.farm_name, created.farm_id);
    Ok(())
}

pub async fn select(ctx: FarmContext, farm_id: i64) -> Result<()> {
    FarmDirectory::new(ctx).select(farm_id).await?;
    println!("Selected farm {farm_id}.");
    Ok(())
}

pub async fn remove(ctx: FarmContext, farm_id: i64) -> Result<()> {
    FarmDirectory::new(ctx).remove(farm_id).await?;
    println!("Deleted farm {farm_id}.");
    Ok(())
}
