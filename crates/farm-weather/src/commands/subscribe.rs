//! Subscribe and unsubscribe commands.

use crate::commands::CommandHandler;
use crate::dashboard::{Dashboard, SubscriptionAction};
use crate::error::AppResult;
use crate::render;

fn submit(action: SubscriptionAction, dashboard: &mut Dashboard) -> AppResult<String> {
    match dashboard.submit(action) {
        Ok(()) => Ok(render::subscription_panel(dashboard.form())),
        Err(notice) => Ok(notice.to_string()),
    }
}

pub struct SubscribeHandler;

impl CommandHandler for SubscribeHandler {
    fn trigger(&self) -> &str {
        "subscribe"
    }

    fn execute(&self, _args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        submit(SubscriptionAction::Subscribe, dashboard)
    }
}

pub struct UnsubscribeHandler;

impl CommandHandler for UnsubscribeHandler {
    fn trigger(&self) -> &str {
        "unsubscribe"
    }

    fn execute(&self, _args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        submit(SubscriptionAction::Unsubscribe, dashboard)
    }
}
