//! Clear command - deselects the county and drops its advisory.

use crate::commands::CommandHandler;
use crate::dashboard::Dashboard;
use crate::error::AppResult;
use crate::render;

pub struct ClearHandler;

impl CommandHandler for ClearHandler {
    fn trigger(&self) -> &str {
        "clear"
    }

    fn execute(&self, _args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        dashboard.select_county(None);
        Ok(render::advisory_panel(dashboard.advisory_view()))
    }
}
