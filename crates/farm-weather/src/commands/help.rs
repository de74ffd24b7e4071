//! Help command - displays available commands.

use crate::commands::CommandHandler;
use crate::dashboard::Dashboard;
use crate::error::AppResult;

pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn trigger(&self) -> &str {
        "help"
    }

    fn execute(&self, _args: &str, _dashboard: &mut Dashboard) -> AppResult<String> {
        Ok(r#"Commands:
  select <county>        Show the weather advisory for a county
  select / clear         Clear the selected county
  counties               List all 47 counties
  phone <number>         Set the phone number for SMS alerts (e.g., 0712345678)
  alerts-county <county> Set the county for SMS alerts
  subscribe              Subscribe to SMS alerts
  unsubscribe            Stop SMS alerts
  show                   Redraw the whole dashboard
  help                   Show this message
  quit                   Exit

County names are case-insensitive. Numbers may be written 07XX..., 01XX... or +254..."#
            .into())
    }
}
