//! Dashboard composition root.
//!
//! Owns the one selected-county cell and everything derived from it. All
//! mutation happens on the main loop; network work is spawned and reports
//! back as [`AppEvent`]s.

mod notice;
mod selection;
mod subscription;

pub use notice::Notice;
pub use selection::{AdvisoryView, FetchTicket, SelectionState};
pub use subscription::{SubscriptionAction, SubscriptionForm, SubscriptionStatus};

use crate::render;
use advisory_client::{AdvisoryApi, AdvisoryError, AdvisorySnapshot, County, SubscriptionRequest};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Completion of spawned network work.
#[derive(Debug)]
pub enum AppEvent {
    AdvisoryFetched {
        ticket: FetchTicket,
        result: Result<AdvisorySnapshot, AdvisoryError>,
    },
    SubscriptionFinished {
        action: SubscriptionAction,
        result: Result<(), AdvisoryError>,
    },
}

pub struct Dashboard {
    api: Arc<dyn AdvisoryApi>,
    events: UnboundedSender<AppEvent>,
    selection: SelectionState,
    form: SubscriptionForm,
}

impl Dashboard {
    pub fn new(api: Arc<dyn AdvisoryApi>, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            api,
            events,
            selection: SelectionState::new(),
            form: SubscriptionForm::new(),
        }
    }

    pub fn selected_county(&self) -> Option<County> {
        self.selection.selected()
    }

    pub fn advisory_view(&self) -> &AdvisoryView {
        self.selection.view()
    }

    pub fn form(&self) -> &SubscriptionForm {
        &self.form
    }

    /// Change the selected county, dispatching a fetch for non-empty picks.
    pub fn select_county(&mut self, county: Option<County>) {
        match county {
            Some(county) => info!("County selected: {}", county),
            None => info!("County selection cleared"),
        }

        self.form.follow_selection(county);

        if let Some(ticket) = self.selection.select(county) {
            self.spawn_fetch(ticket);
        }
    }

    pub fn set_phone_number(&mut self, phone: &str) -> Result<(), Notice> {
        self.form.set_phone_number(phone)
    }

    pub fn set_alerts_county(&mut self, county: County) -> Result<(), Notice> {
        self.form.set_county(county)
    }

    /// Validate the form and dispatch the request. Validation failures are
    /// returned immediately and never reach the network.
    pub fn submit(&mut self, action: SubscriptionAction) -> Result<(), Notice> {
        let request = self.form.begin(action)?;
        self.spawn_subscription(action, request);
        Ok(())
    }

    /// Apply a completion event. Returns the text to show, or `None` when a
    /// stale advisory was discarded.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<String> {
        match event {
            AppEvent::AdvisoryFetched { ticket, result } => {
                if self.selection.complete(ticket, result) {
                    Some(render::advisory_panel(self.selection.view()))
                } else {
                    None
                }
            }
            AppEvent::SubscriptionFinished { action, result } => {
                let notice = self.form.finish(action, result);
                Some(format!(
                    "{}\n\n{}",
                    notice,
                    render::subscription_panel(&self.form)
                ))
            }
        }
    }

    /// Render every section, top to bottom.
    pub fn render(&self) -> String {
        [
            render::hero(),
            render::county_selector(self.selected_county()),
            render::advisory_panel(self.selection.view()),
            render::subscription_panel(&self.form),
        ]
        .join("\n\n")
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let api = self.api.clone();
        let events = self.events.clone();

        debug!(county = %ticket.county, generation = ticket.generation, "Dispatching advisory fetch");
        tokio::spawn(async move {
            let result = api.fetch_advisory(ticket.county.name()).await;
            if let Err(e) = &result {
                warn!("Advisory fetch for {} failed: {}", ticket.county, e);
            }
            if events.send(AppEvent::AdvisoryFetched { ticket, result }).is_err() {
                debug!("Event channel closed; dropping advisory result");
            }
        });
    }

    fn spawn_subscription(&self, action: SubscriptionAction, request: SubscriptionRequest) {
        let api = self.api.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = match action {
                SubscriptionAction::Subscribe => api.subscribe(&request).await,
                SubscriptionAction::Unsubscribe => api.unsubscribe(&request).await,
            };
            if events
                .send(AppEvent::SubscriptionFinished { action, result })
                .is_err()
            {
                debug!("Event channel closed; dropping subscription result");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::selection::FETCH_FAILED_MESSAGE;
    use super::*;
    use advisory_client::{AdvisoryClient, Severity};
    use std::time::Duration;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_dashboard(mock_server: &MockServer) -> (Dashboard, UnboundedReceiver<AppEvent>) {
        let client = AdvisoryClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();
        let (tx, rx) = unbounded_channel();
        (Dashboard::new(Arc::new(client), tx), rx)
    }

    async fn mount_advisory(mock_server: &MockServer, county: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/advisory/{}", county)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_select_fetches_and_renders_advisory() {
        let mock_server = MockServer::start().await;
        mount_advisory(
            &mock_server,
            "Nairobi",
            serde_json::json!({
                "temperature": 32,
                "humidity": 40,
                "weatherCondition": "Clear",
                "advisoryText": "Water crops in the evening."
            }),
        )
        .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);
        dashboard.select_county(County::lookup("Nairobi"));
        assert!(matches!(
            dashboard.advisory_view(),
            AdvisoryView::Loading { .. }
        ));

        let event = rx.recv().await.unwrap();
        let output = dashboard.handle_event(event).unwrap();

        assert!(output.contains("32°C"));
        assert!(output.contains("Clear"));
        assert!(output.contains("HIGH"));
        match dashboard.advisory_view() {
            AdvisoryView::Loaded { snapshot, .. } => {
                assert_eq!(snapshot.advisory.severity, Severity::High);
            }
            other => panic!("expected loaded view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_error_renders_error_panel() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/advisory/Lamu"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);

        let event = rx.recv().await.unwrap();
        let output = dashboard.handle_event(event).unwrap();

        assert!(output.contains(FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_clear_after_load_returns_to_initial_state() {
        let mock_server = MockServer::start().await;
        mount_advisory(
            &mock_server,
            "Meru",
            serde_json::json!({
                "temperature": 21,
                "humidity": 60,
                "weatherCondition": "Cloudy",
                "advisoryText": "Good day for weeding."
            }),
        )
        .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);
        dashboard.select_county(County::lookup("Meru"));
        let event = rx.recv().await.unwrap();
        dashboard.handle_event(event);

        dashboard.select_county(None);

        assert_eq!(dashboard.advisory_view(), &AdvisoryView::NoCountySelected);
        assert!(dashboard.render().contains("No Advisory Loaded Yet"));
    }

    #[tokio::test]
    async fn test_stale_fetch_is_dropped_after_reselect() {
        let mock_server = MockServer::start().await;
        mount_advisory(
            &mock_server,
            "Kisumu",
            serde_json::json!({
                "temperature": 35,
                "humidity": 50,
                "weatherCondition": "Sunny",
                "advisoryText": "Heat stress likely."
            }),
        )
        .await;
        mount_advisory(
            &mock_server,
            "Nakuru",
            serde_json::json!({
                "temperature": 23,
                "humidity": 55,
                "weatherCondition": "Cloudy",
                "advisoryText": "Normal operations."
            }),
        )
        .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);
        dashboard.select_county(County::lookup("Kisumu"));
        dashboard.select_county(County::lookup("Nakuru"));

        let mut applied = Vec::new();
        for _ in 0..2 {
            let event = rx.recv().await.unwrap();
            applied.push(dashboard.handle_event(event).is_some());
        }

        assert_eq!(applied.iter().filter(|a| **a).count(), 1);
        match dashboard.advisory_view() {
            AdvisoryView::Loaded { snapshot, .. } => assert_eq!(snapshot.county, "Nakuru"),
            other => panic!("expected Nakuru, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_selection_prefills_alert_county() {
        let mock_server = MockServer::start().await;
        let (mut dashboard, _rx) = create_dashboard(&mock_server);

        dashboard.select_county(County::lookup("Bungoma"));
        assert_eq!(dashboard.form().county(), County::lookup("Bungoma"));
    }

    #[tokio::test]
    async fn test_invalid_phone_never_reaches_network() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subscribe"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let (mut dashboard, _rx) = create_dashboard(&mock_server);
        dashboard.set_phone_number("12345").unwrap();
        dashboard.set_alerts_county(County::lookup("Kericho").unwrap()).unwrap();

        let notice = tokio_test::assert_err!(dashboard.submit(SubscriptionAction::Subscribe));
        assert_eq!(notice.title, "Invalid Phone Number");
    }

    #[tokio::test]
    async fn test_failed_subscribe_leaves_form_intact() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subscribe"))
            .respond_with(ResponseTemplate::new(502).set_body_json(serde_json::json!({
                "message": "SMS gateway unavailable"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);
        dashboard.set_phone_number("0712345678").unwrap();
        dashboard.set_alerts_county(County::lookup("Kericho").unwrap()).unwrap();

        tokio_test::assert_ok!(dashboard.submit(SubscriptionAction::Subscribe));
        assert!(dashboard.form().is_loading());

        let event = rx.recv().await.unwrap();
        let output = dashboard.handle_event(event).unwrap();

        assert!(output.contains("Subscription Failed: SMS gateway unavailable"));
        assert_eq!(dashboard.form().status(), SubscriptionStatus::Unsubscribed);
        assert_eq!(dashboard.form().phone_number(), "0712345678");
        assert!(!dashboard.form().is_loading());
    }

    #[tokio::test]
    async fn test_subscribe_then_unsubscribe() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subscribe"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/unsubscribe"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);
        dashboard.set_phone_number("+254 712 345 678").unwrap();
        dashboard.set_alerts_county(County::lookup("Kericho").unwrap()).unwrap();

        dashboard.submit(SubscriptionAction::Subscribe).unwrap();
        let event = rx.recv().await.unwrap();
        let output = dashboard.handle_event(event).unwrap();
        assert!(output.contains("You will receive SMS alerts for Kericho county."));
        assert_eq!(dashboard.form().status(), SubscriptionStatus::Subscribed);

        dashboard.submit(SubscriptionAction::Unsubscribe).unwrap();
        let event = rx.recv().await.unwrap();
        dashboard.handle_event(event);
        assert_eq!(dashboard.form().status(), SubscriptionStatus::Unsubscribed);
        assert!(dashboard.form().phone_number().is_empty());
    }

    #[tokio::test]
    async fn test_unsubscribe_sends_confirmed_subscription() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subscribe"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/unsubscribe"))
            .and(body_json(serde_json::json!({
                "phoneNumber": "0712345678",
                "county": "Nyeri"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (mut dashboard, mut rx) = create_dashboard(&mock_server);
        dashboard.set_phone_number("0712345678").unwrap();
        dashboard.set_alerts_county(County::lookup("Nyeri").unwrap()).unwrap();

        dashboard.submit(SubscriptionAction::Subscribe).unwrap();
        let event = rx.recv().await.unwrap();
        dashboard.handle_event(event);

        let notice = tokio_test::assert_err!(dashboard.set_phone_number(""));
        assert_eq!(notice.title, "Already Subscribed");
        tokio_test::assert_err!(dashboard.set_alerts_county(County::lookup("Lamu").unwrap()));

        dashboard.submit(SubscriptionAction::Unsubscribe).unwrap();
        let event = rx.recv().await.unwrap();
        let output = dashboard.handle_event(event).unwrap();
        assert!(output.contains("You have been unsubscribed from SMS alerts."));
    }
}
