//! Subscription form inputs - phone number and alert county.

use crate::commands::CommandHandler;
use crate::dashboard::Dashboard;
use crate::error::{AppError, AppResult};
use crate::render;
use advisory_client::County;

pub struct PhoneHandler;

impl CommandHandler for PhoneHandler {
    fn trigger(&self) -> &str {
        "phone"
    }

    fn execute(&self, args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        // Validation happens on submit, matching the form's behaviour.
        match dashboard.set_phone_number(args) {
            Ok(()) => Ok(render::subscription_panel(dashboard.form())),
            Err(notice) => Ok(notice.to_string()),
        }
    }
}

pub struct AlertsCountyHandler;

impl CommandHandler for AlertsCountyHandler {
    fn trigger(&self) -> &str {
        "alerts-county"
    }

    fn execute(&self, args: &str, dashboard: &mut Dashboard) -> AppResult<String> {
        let county = County::lookup(args).ok_or_else(|| {
            AppError::Input(format!(
                "Unknown county '{}'. Type `counties` to list valid names.",
                args
            ))
        })?;

        match dashboard.set_alerts_county(county) {
            Ok(()) => Ok(render::subscription_panel(dashboard.form())),
            Err(notice) => Ok(notice.to_string()),
        }
    }
}
