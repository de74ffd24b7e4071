//! Plain-text rendering of dashboard sections.

use crate::dashboard::{AdvisoryView, SubscriptionForm, SubscriptionStatus};
use advisory_client::{AdvisorySnapshot, County, Severity};

const RULE: &str = "────────────────────────────────────────────────────────";

pub fn hero() -> String {
    [
        "Agricultural Weather Advisory System",
        RULE,
        "Get real-time weather updates and farming advice for your county.",
        "Select a Kenyan county to view current weather conditions, receive",
        "agricultural advisories, and subscribe to SMS alerts.",
        "",
        "  Weather Updates · Farming Advice · SMS Alerts",
    ]
    .join("\n")
}

pub fn county_selector(selected: Option<County>) -> String {
    match selected {
        Some(county) => format!("Select County\n  Currently viewing: {}", county),
        None => "Select County\n  Choose a county to view advisory... (type `select <county>`)".into(),
    }
}

pub fn advisory_panel(view: &AdvisoryView) -> String {
    match view {
        AdvisoryView::NoCountySelected => [
            "No Advisory Loaded Yet",
            "Select a county to view current weather conditions and personalized",
            "agricultural advisories.",
        ]
        .join("\n"),
        AdvisoryView::Loading { county } => format!("Loading advisory for {}...", county),
        AdvisoryView::Error { message, .. } => format!("⚠ {}", message),
        AdvisoryView::Loaded { county, snapshot } => weather_card(county, snapshot),
    }
}

fn weather_card(county: &County, snapshot: &AdvisorySnapshot) -> String {
    let weather = &snapshot.weather;
    let advisory = &snapshot.advisory;

    [
        format!("Weather in {}", county),
        RULE.to_string(),
        format!(
            "  {}  {}°C  {}",
            snapshot.icon().symbol(),
            weather.temperature,
            weather.condition
        ),
        format!(
            "  Humidity: {}%   Wind: {} km/h",
            weather.humidity, weather.wind_speed
        ),
        format!("  Updated {}", snapshot.fetched_at.format("%H:%M UTC")),
        String::new(),
        format!("{} [{}]", advisory.title, severity_tag(advisory.severity)),
        RULE.to_string(),
        format!("  {}", advisory.message),
    ]
    .join("\n")
}

fn severity_tag(severity: Severity) -> String {
    severity.as_str().to_uppercase()
}

pub fn subscription_panel(form: &SubscriptionForm) -> String {
    let county = form
        .county()
        .map(|c| c.name())
        .unwrap_or("(not selected)");

    let mut lines = vec!["SMS Weather Alerts".to_string(), RULE.to_string()];

    match form.status() {
        SubscriptionStatus::Subscribed => {
            lines.push("  You're Subscribed!".into());
            lines.push(format!("  Receiving alerts for {} county", county));
            lines.push("  Type `unsubscribe` to stop alerts.".into());
        }
        SubscriptionStatus::Unsubscribed => {
            let phone = if form.phone_number().is_empty() {
                "(not set)"
            } else {
                form.phone_number()
            };
            lines.push(format!("  Phone number:     {}", phone));
            lines.push(format!("  County for alerts: {}", county));
            lines.push("  Type `phone <number>` then `subscribe`.".into());
        }
    }

    if form.is_loading() {
        lines.push("  Sending request...".into());
    }

    lines.join("\n")
}
