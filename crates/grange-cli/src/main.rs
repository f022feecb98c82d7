use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "grange")]
#[command(about = "Grange - farm management from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        email: String,
        password: String,
    },
    /// Register a new account
    Register {
        full_name: String,
        email: String,
        password: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Clear the stored session
    Logout,
    /// Show session state and where the app would start
    Status,
    /// Manage farms
    Farm {
        #[command(subcommand)]
        action: FarmAction,
    },
    /// Manage livestock on the selected farm
    Livestock {
        #[command(subcommand)]
        action: LivestockAction,
    },
    /// Manage crops on the selected farm
    Crop {
        #[command(subcommand)]
        action: CropAction,
    },
    /// Manage sales on the selected farm
    Sale {
        #[command(subcommand)]
        action: SaleAction,
    },
    /// Manage expenses on the selected farm
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },
    /// Show cross-farm dashboard statistics
    Dashboard {
        /// Totals only, without the per-farm breakdown
        #[arg(long)]
        summary: bool,
    },
    /// Build the financial report for the selected farm
    Report,
}

#[derive(Subcommand)]
enum FarmAction {
    /// List your farms
    List,
    /// Create a farm (selected automatically when it is your first)
    Add {
        name: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        acres: Option<f64>,
    },
    /// Select the active farm
    Select { farm_id: i64 },
    /// Delete a farm
    Remove { farm_id: i64 },
}

#[derive(Subcommand)]
enum LivestockAction {
    /// List livestock on the selected farm
    List,
    /// Add livestock
    Add { animal_type: String, quantity: i64 },
    /// Update a livestock record
    Edit {
        livestock_id: i64,
        animal_type: String,
        quantity: i64,
    },
    /// Delete a livestock record
    Remove { livestock_id: i64 },
}

#[derive(Subcommand)]
enum CropAction {
    /// List crops on the selected farm
    List,
    /// Add a crop
    Add { name: String, expected_yield: f64 },
    /// Update a crop
    Edit {
        crop_id: i64,
        name: String,
        expected_yield: f64,
    },
    /// Delete a crop
    Remove { crop_id: i64 },
}

#[derive(Subcommand)]
enum SaleAction {
    /// List sales of the selected farm
    List,
    /// Record a sale (the backend computes the total)
    Add {
        item_name: String,
        quantity: f64,
        unit_price: f64,
    },
    /// Update a sale
    Edit {
        sale_id: i64,
        item_name: String,
        quantity: f64,
        unit_price: f64,
    },
    /// Delete a sale
    Remove { sale_id: i64 },
}

#[derive(Subcommand)]
enum ExpenseAction {
    /// List expenses of the selected farm with the farm total
    List,
    /// Record an expense
    Add {
        amount: f64,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update an expense
    Edit {
        expense_id: i64,
        amount: f64,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an expense
    Remove { expense_id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::context::build()?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(ctx, &email, &password).await,
        Commands::Register {
            full_name,
            email,
            password,
            phone,
        } => commands::auth::register(ctx, &full_name, &email, &phone, &password).await,
        Commands::Logout => commands::auth::logout(ctx).await,
        Commands::Status => commands::auth::status(ctx).await,
        Commands::Farm { action } => match action {
            FarmAction::List => commands::farm::list(ctx).await,
            FarmAction::Add {
                name,
                location,
                acres,
            } => commands::farm::add(ctx, &name, location.as_deref(), acres).await,
            FarmAction::Select { farm_id } => commands::farm::select(ctx, farm_id).await,
            FarmAction::Remove { farm_id } => commands::farm::remove(ctx, farm_id).await,
        },
        Commands::Livestock { action } => match action {
            LivestockAction::List => commands::livestock::list(ctx).await,
            LivestockAction::Add {
                animal_type,
                quantity,
            } => commands::livestock::add(ctx, &animal_type, quantity).await,
            LivestockAction::Edit {
                livestock_id,
                animal_type,
                quantity,
            } => commands::livestock::edit(ctx, livestock_id, &animal_type, quantity).await,
            LivestockAction::Remove { livestock_id } => {
                commands::livestock::remove(ctx, livestock_id).await
            }
        },
        Commands::Crop { action } => match action {
            CropAction::List => commands::crop::list(ctx).await,
            CropAction::Add {
                name,
                expected_yield,
            } => commands::crop::add(ctx, &name, expected_yield).await,
            CropAction::Edit {
                crop_id,
                name,
                expected_yield,
            } => commands::crop::edit(ctx, crop_id, &name, expected_yield).await,
            CropAction::Remove { crop_id } => commands::crop::remove(ctx, crop_id).await,
        },
        Commands::Sale { action } => match action {
            SaleAction::List => commands::sale::list(ctx).await,
            SaleAction::Add {
                item_name,
                quantity,
                unit_price,
            } => commands::sale::add(ctx, &item_name, quantity, unit_price).await,
            SaleAction::Edit {
                sale_id,
                item_name,
                quantity,
                unit_price,
            } => commands::sale::edit(ctx, sale_id, &item_name, quantity, unit_price).await,
            SaleAction::Remove { sale_id } => commands::sale::remove(ctx, sale_id).await,
        },
        Commands::Expense { action } => match action {
            ExpenseAction::List => commands::expense::list(ctx).await,
            ExpenseAction::Add {
                amount,
                description,
            } => commands::expense::add(ctx, amount, description.as_deref()).await,
            ExpenseAction::Edit {
                expense_id,
                amount,
                description,
            } => commands::expense::edit(ctx, expense_id, amount, description.as_deref()).await,
            ExpenseAction::Remove { expense_id } => {
                commands::expense::remove(ctx, expense_id).await
            }
        },
        Commands::Dashboard { summary } => commands::dashboard::run(ctx, summary).await,
        Commands::Report => commands::report::run(ctx).await,
    }
}
