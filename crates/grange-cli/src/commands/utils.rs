use anyhow::Result;
use grange_application::ScreenState;

/// Prints a loaded screen state one line per item.
pub fn print_state<T>(state: ScreenState<T>, line: impl Fn(&T) -> String) -> Result<()> {
    match state {
        ScreenState::Loaded { farm_id, items } => {
            if items.is_empty() {
                println!("No records for farm {farm_id}.");
            } else {
                for item in &items {
                    println!("{}", line(item));
                }
            }
            Ok(())
        }
        ScreenState::NoFarm => {
            println!("No farm yet. Create one with `grange farm add <name>`.");
            Ok(())
        }
        ScreenState::Failed(e) => Err(e.into()),
        ScreenState::Idle | ScreenState::Loading => Ok(()),
    }
}

pub fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
