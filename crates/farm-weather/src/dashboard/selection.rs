//! County selection and the advisory it loads.

use advisory_client::{AdvisoryError, AdvisorySnapshot, County};
use tracing::debug;

/// Shown in place of the advisory when a fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch advisory data. Please try again.";

/// Identifies one dispatched advisory fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub county: County,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryView {
    NoCountySelected,
    Loading { county: County },
    Loaded { county: County, snapshot: AdvisorySnapshot },
    Error { county: County, message: String },
}

/// Owns the selected county and the advisory view derived from it.
///
/// Every selection bumps a generation counter. A completion is applied only
/// when its ticket carries the current generation and county, so a slow
/// response for an earlier pick can never replace a newer one.
#[derive(Debug)]
pub struct SelectionState {
    generation: u64,
    view: AdvisoryView,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            generation: 0,
            view: AdvisoryView::NoCountySelected,
        }
    }

    pub fn view(&self) -> &AdvisoryView {
        &self.view
    }

    pub fn selected(&self) -> Option<County> {
        match &self.view {
            AdvisoryView::NoCountySelected => None,
            AdvisoryView::Loading { county }
            | AdvisoryView::Loaded { county, .. }
            | AdvisoryView::Error { county, .. } => Some(*county),
        }
    }

    /// Change the selection. Returns the ticket for the fetch the caller
    /// must dispatch, or `None` when the selection was cleared.
    pub fn select(&mut self, county: Option<County>) -> Option<FetchTicket> {
        self.generation += 1;

        match county {
            None => {
                self.view = AdvisoryView::NoCountySelected;
                None
            }
            Some(county) => {
                self.view = AdvisoryView::Loading { county };
                Some(FetchTicket {
                    county,
                    generation: self.generation,
                })
            }
        }
    }

    /// Apply a finished fetch. Returns `false` if it was stale and dropped.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<AdvisorySnapshot, AdvisoryError>,
    ) -> bool {
        if ticket.generation != self.generation || self.selected() != Some(ticket.county) {
            debug!(
                county = %ticket.county,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale advisory response"
            );
            return false;
        }

        self.view = match result {
            Ok(snapshot) => AdvisoryView::Loaded {
                county: ticket.county,
                snapshot,
            },
            Err(e) => {
                debug!("Advisory fetch for {} failed: {}", ticket.county, e);
                AdvisoryView::Error {
                    county: ticket.county,
                    message: FETCH_FAILED_MESSAGE.into(),
                }
            }
        };
        true
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
