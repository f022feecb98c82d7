use anyhow::Result;
use grange_application::FarmContext;
use grange_application::auth::{AuthFlow, StartRoute};

pub async fn login(ctx: FarmContext, email: &str, password: &str) -> Result<()> {
    AuthFlow::new(ctx).login(email, password).await?;
    println!("✅ Logged in as {email}");
    Ok(())
}

pub async fn register(
    ctx: FarmContext,
    full_name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<()> {
    let message = AuthFlow::new(ctx)
        .register(full_name, email, phone, password)
        .await?;
    println!("✅ {message}");
    println!("Log in with `grange login {email} <password>`.");
    Ok(())
}

pub async fn logout(ctx: FarmContext) -> Result<()> {
    AuthFlow::new(ctx).logout().await?;
    println!("Logged out.");
    Ok(())
}

pub async fn status(ctx: FarmContext) -> Result<()> {
    let session = ctx.session().session().await;
    match &session.selected_farm_id {
        Some(id) => println!("Selected farm: {id}"),
        None => println!("Selected farm: none"),
    }

    match AuthFlow::new(ctx).start_route().await? {
        StartRoute::Login => println!("Not logged in."),
        StartRoute::FarmCreation => {
            println!("Logged in, no farm yet. Create one with `grange farm add <name>`.")
        }
        StartRoute::Main => println!("Logged in."),
    }
    Ok(())
}
