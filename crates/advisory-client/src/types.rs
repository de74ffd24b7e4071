//! Advisory API types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw advisory payload from `GET /api/advisory/{county}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryResponse {
    pub temperature: f64,
    pub humidity: f64,
    #[serde(rename = "weatherCondition")]
    pub weather_condition: String,
    #[serde(rename = "advisoryText")]
    pub advisory_text: String,
}

/// Subscribe/unsubscribe request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub county: String,
}

/// Error body returned by the subscription endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Urgency tier derived from temperature and humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Classify raw (unrounded) readings.
    ///
    /// All comparisons are strict: 30°C exactly is not "high".
    pub fn from_readings(temperature: f64, humidity: f64) -> Self {
        if temperature > 30.0 || humidity > 85.0 || temperature < 15.0 {
            Severity::High
        } else if temperature > 28.0 || humidity > 75.0 || temperature < 18.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon family for a free-text weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    Rainy,
    Cloudy,
}

impl WeatherIcon {
    pub fn from_condition(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        if condition.contains("clear") || condition.contains("sunny") {
            WeatherIcon::Sunny
        } else if condition.contains("rain") || condition.contains("drizzle") {
            WeatherIcon::Rainy
        } else {
            WeatherIcon::Cloudy
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "☀",
            WeatherIcon::Rainy => "🌧",
            WeatherIcon::Cloudy => "☁",
        }
    }
}

/// Presentation-ready weather readings.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    /// Degrees Celsius, rounded.
    pub temperature: i64,
    pub condition: String,
    /// Relative humidity percent, rounded.
    pub humidity: i64,
    /// km/h. The backend does not report wind yet, so this is always 0.
    pub wind_speed: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Advisory for one county, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorySnapshot {
    pub county: String,
    pub weather: WeatherSummary,
    pub advisory: Advisory,
    pub fetched_at: DateTime<Utc>,
}

impl AdvisorySnapshot {
    /// Map a raw payload. Severity is computed before rounding.
    pub fn from_response(county: impl Into<String>, response: AdvisoryResponse) -> Self {
        let severity = Severity::from_readings(response.temperature, response.humidity);

        Self {
            county: county.into(),
            weather: WeatherSummary {
                temperature: round_half_up(response.temperature),
                condition: response.weather_condition,
                humidity: round_half_up(response.humidity),
                wind_speed: 0,
            },
            advisory: Advisory {
                title: "Farming Advisory".into(),
                message: response.advisory_text,
                severity,
            },
            fetched_at: Utc::now(),
        }
    }

    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::from_condition(&self.weather.condition)
    }
}

/// Round to the nearest integer with halves going toward positive infinity
/// (-2.5 becomes -2, 2.5 becomes 3).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}
