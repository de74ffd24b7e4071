//! Terminal command handlers.

mod clear;
mod counties;
mod help;
mod phone;
mod select;
mod show;
mod subscribe;

pub use clear::ClearHandler;
pub use counties::CountiesHandler;
pub use help::HelpHandler;
pub use phone::{AlertsCountyHandler, PhoneHandler};
pub use select::SelectHandler;
pub use show::ShowHandler;
pub use subscribe::{SubscribeHandler, UnsubscribeHandler};

use crate::dashboard::Dashboard;
use crate::error::AppResult;

/// Command handler trait.
pub trait CommandHandler: Send + Sync {
    /// Command trigger word (e.g., "select", "help").
    fn trigger(&self) -> &str;

    /// Check if this handler matches the input line.
    fn matches(&self, input: &str) -> bool {
        let (command, _) = split_command(input);
        command.eq_ignore_ascii_case(self.trigger())
    }

    /// Execute the command with everything after the trigger word.
    fn execute(&self, args: &str, dashboard: &mut Dashboard) -> AppResult<String>;
}

/// Split an input line into its trigger word and the trimmed remainder.
pub fn split_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    }
}

/// Every handler the terminal client understands.
pub fn default_handlers() -> Vec<Box<dyn CommandHandler>> {
    vec![
        Box::new(SelectHandler),
        Box::new(ClearHandler),
        Box::new(CountiesHandler),
        Box::new(PhoneHandler),
        Box::new(AlertsCountyHandler),
        Box::new(SubscribeHandler),
        Box::new(UnsubscribeHandler),
        Box::new(ShowHandler),
        Box::new(HelpHandler),
    ]
}
