//! Show command - redraws the whole dashboard.

use crate::commands::CommandHandler;
use crate::dashboard::Dashboard;
use crate::error::AppResult;

pub struct ShowHandler;

impl CommandHandler for ShowHandler {
    fn trigger(&self) -> &str {
        "show"
    }

    fn execute(&self, _args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        Ok(dashboard.render())
    }
}
