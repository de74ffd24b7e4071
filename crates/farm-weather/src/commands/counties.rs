//! Counties command - lists the county registry.

use crate::commands::CommandHandler;
use crate::dashboard::Dashboard;
use crate::error::AppResult;
use advisory_client::County;

pub struct CountiesHandler;

impl CommandHandler for CountiesHandler {
    fn trigger(&self) -> &str {
        "counties"
    }

    fn execute(&self, _args: &str, _dashboard: &mut Dashboard) -> AppResult<String> {
        let names: Vec<&str> = County::all().map(|c| c.name()).collect();
        let rows: Vec<String> = names
            .chunks(4)
            .map(|row| {
                row.iter()
                    .map(|name| format!("{:<18}", name))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();

        Ok(format!(
            "Kenyan counties ({}):\n{}",
            names.len(),
            rows.join("\n")
        ))
    }
}
