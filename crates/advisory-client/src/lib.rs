//! Farm weather advisory API client.
//!
//! Fetches per-county weather advisories and manages SMS alert
//! subscriptions against the advisory backend. Also carries the small
//! amount of domain logic the views share: the county registry, phone
//! number validation and severity classification.

mod client;
mod counties;
mod error;
mod phone;
mod types;

pub use client::{AdvisoryApi, AdvisoryClient};
pub use counties::{County, KENYAN_COUNTIES};
pub use error::AdvisoryError;
pub use phone::{is_valid_phone, normalize_phone};
pub use types::*;
