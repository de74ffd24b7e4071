//! SMS alert subscription form.

use super::notice::Notice;
use advisory_client::{is_valid_phone, normalize_phone, AdvisoryError, County, SubscriptionRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Unsubscribed,
    Subscribed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionAction {
    Subscribe,
    Unsubscribe,
}

/// Local, ephemeral form state. The backend is the system of record; this
/// only remembers what the last confirmed request did.
#[derive(Debug)]
pub struct SubscriptionForm {
    phone_number: String,
    county: Option<County>,
    loading: bool,
    status: SubscriptionStatus,
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self {
            phone_number: String::new(),
            county: None,
            loading: false,
            status: SubscriptionStatus::Unsubscribed,
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn county(&self) -> Option<County> {
        self.county
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Edit the phone number. Refused while subscribed or mid-request, since
    /// unsubscribing sends the confirmed phone and county back.
    pub fn set_phone_number(&mut self, phone: impl Into<String>) -> Result<(), Notice> {
        self.ensure_editable()?;
        self.phone_number = phone.into();
        Ok(())
    }

    pub fn set_county(&mut self, county: County) -> Result<(), Notice> {
        self.ensure_editable()?;
        self.county = Some(county);
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), Notice> {
        if self.loading {
            return Err(Notice::destructive(
                "Please Wait",
                "A subscription request is already in progress.",
            ));
        }
        if self.status == SubscriptionStatus::Subscribed {
            return Err(Notice::destructive(
                "Already Subscribed",
                "Unsubscribe first to change your alert settings.",
            ));
        }
        Ok(())
    }

    /// Track the page-level county selection.
    ///
    /// Ignored while subscribed or mid-request so the county an active
    /// subscription belongs to cannot drift.
    pub fn follow_selection(&mut self, selected: Option<County>) {
        if self.status == SubscriptionStatus::Subscribed || self.loading {
            return;
        }
        if let Some(county) = selected {
            self.county = Some(county);
        }
    }

    /// Validate and mark a request as in flight.
    ///
    /// On success the returned request must be sent and its outcome passed
    /// to [`SubscriptionForm::finish`].
    pub fn begin(&mut self, action: SubscriptionAction) -> Result<SubscriptionRequest, Notice> {
        if self.loading {
            return Err(Notice::destructive(
                "Please Wait",
                "A subscription request is already in progress.",
            ));
        }

        match action {
            SubscriptionAction::Subscribe => {
                if self.status == SubscriptionStatus::Subscribed {
                    return Err(Notice::destructive(
                        "Already Subscribed",
                        "Unsubscribe first to change your alert settings.",
                    ));
                }
                if self.phone_number.trim().is_empty() || self.county.is_none() {
                    return Err(Notice::destructive(
                        "Missing Information",
                        "Please enter your phone number and select a county.",
                    ));
                }
                if !is_valid_phone(&self.phone_number) {
                    return Err(Notice::destructive(
                        "Invalid Phone Number",
                        "Please enter a valid Kenyan phone number (e.g., 0712345678).",
                    ));
                }
            }
            SubscriptionAction::Unsubscribe => {
                if self.status != SubscriptionStatus::Subscribed {
                    return Err(Notice::destructive(
                        "Not Subscribed",
                        "There is no active subscription to cancel.",
                    ));
                }
            }
        }

        let county = self.county.ok_or_else(|| {
            Notice::destructive(
                "Missing Information",
                "Please enter your phone number and select a county.",
            )
        })?;

        self.loading = true;
        Ok(SubscriptionRequest {
            phone_number: normalize_phone(&self.phone_number),
            county: county.name().to_string(),
        })
    }

    /// Record the outcome of a request started with [`SubscriptionForm::begin`].
    ///
    /// Failures leave status and phone number untouched.
    pub fn finish(
        &mut self,
        action: SubscriptionAction,
        result: Result<(), AdvisoryError>,
    ) -> Notice {
        self.loading = false;

        match (action, result) {
            (SubscriptionAction::Subscribe, Ok(())) => {
                self.status = SubscriptionStatus::Subscribed;
                let county = self.county.map(|c| c.name()).unwrap_or_default();
                Notice::info(
                    "Successfully Subscribed!",
                    format!("You will receive SMS alerts for {} county.", county),
                )
            }
            (SubscriptionAction::Subscribe, Err(e)) => {
                Notice::destructive("Subscription Failed", e.to_string())
            }
            (SubscriptionAction::Unsubscribe, Ok(())) => {
                self.status = SubscriptionStatus::Unsubscribed;
                self.phone_number.clear();
                Notice::info("Unsubscribed", "You have been unsubscribed from SMS alerts.")
            }
            (SubscriptionAction::Unsubscribe, Err(e)) => {
                Notice::destructive("Unsubscribe Failed", e.to_string())
            }
        }
    }
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self::new()
    }
}
