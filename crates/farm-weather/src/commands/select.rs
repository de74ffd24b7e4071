//! Select command - picks the county whose advisory is shown.

use crate::commands::CommandHandler;
use crate::dashboard::Dashboard;
use crate::error::{AppError, AppResult};
use crate::render;
use advisory_client::County;

pub struct SelectHandler;

impl CommandHandler for SelectHandler {
    fn trigger(&self) -> &str {
        "select"
    }

    fn execute(&self, args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        // An empty selection behaves like `clear`.
        if args.is_empty() {
            dashboard.select_county(None);
            return Ok(render::advisory_panel(dashboard.advisory_view()));
        }

        let county = County::lookup(args).ok_or_else(|| {
            AppError::Input(format!(
                "Unknown county '{}'. Type `counties` to list valid names.",
                args
            ))
        })?;

        dashboard.select_county(Some(county));
        Ok(format!(
            "{}\n\n{}",
            render::county_selector(dashboard.selected_county()),
            render::advisory_panel(dashboard.advisory_view())
        ))
    }
}
