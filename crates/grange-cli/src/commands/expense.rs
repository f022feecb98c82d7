use crate::commands::utils::{opt, print_state};
use anyhow::Result;
use grange_application::FarmContext;
use grange_application::expenses::{ExpenseSheet, ExpensesScreen};
use grange_core::expense::Expense;

fn line(expense: &Expense) -> String {
    format!(
        "{:>6}  {:.2}  {}",
        expense.expense_id,
        expense.amount,
        opt(&expense.description)
    )
}

fn print_sheet(sheet: ExpenseSheet) -> Result<()> {
    let total = sheet.total;
    print_state(sheet.state, line)?;
    println!("Total expenses: {total:.2}");
    Ok(())
}

pub async fn list(ctx: FarmContext) -> Result<()> {
    print_sheet(ExpensesScreen::new(ctx).load().await)
}

pub async fn add(ctx: FarmContext, amount: f64, description: Option<&str>) -> Result<()> {
    let sheet = ExpensesScreen::new(ctx).add(amount, description).await?;
    println!("✅ Recorded expense of {amount:.2}");
    print_sheet(sheet)
}

pub async fn edit(
    ctx: FarmContext,
    expense_id: i64,
    amount: f64,
    description: Option<&str>,
) -> Result<()> {
    let sheet = ExpensesScreen::new(ctx)
        .edit(expense_id, amount, description)
        .await?;
    print_sheet(sheet)
}

pub async fn remove(ctx: FarmContext, expense_id: i64) -> Result<()> {
    let sheet = ExpensesScreen::new(ctx).remove(expense_id).await?;
    println!("Deleted expense {expense_id}.");
    print_sheet(sheet)
}
