//! Availability search: request body and result-set state

use serde::Serialize;
use std::future::Future;

use crate::error::{ApiError, ApiResult};

use super::{dates::DateRange, guests::GuestConfiguration, guests::RoomGuests, to_iso_millis};

/// Messages surfaced by the search banner
pub const MSG_PICK_DATES: &str = "Пожалуйста, выберите даты";
pub const MSG_SEARCH_FAILED: &str = "Ошибка поиска";
pub const MSG_SEARCH_UNAVAILABLE: &str = "Не удалось выполнить поиск номеров";

/// POST body for `/room_admin/public/search` and `/cabin_admin/search`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub start_date: String,
    pub end_date: String,
    pub guests: Vec<RoomGuests>,
}

impl AvailabilityQuery {
    pub fn new(range: &DateRange, guests: &GuestConfiguration) -> Self {
        Self {
            start_date: to_iso_millis(range.start()),
            end_date: to_iso_millis(range.end()),
            guests: guests.rooms().to_vec(),
        }
    }
}

/// Displayed result set of an availability search
///
/// A failed round leaves the previous results in place and only swaps the
/// error banner; guest and date state are never touched from here.
#[derive(Debug, Clone)]
pub struct AvailabilitySearch<T> {
    results: Vec<T>,
    error: Option<String>,
    loading: bool,
    performed: bool,
}

impl<T> Default for AvailabilitySearch<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            error: None,
            loading: false,
            performed: false,
        }
    }
}

impl<T> AvailabilitySearch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results carried over from server-side rendering
    pub fn with_initial(results: Vec<T>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether at least one search ran (gates the "nothing available" notice)
    pub fn was_performed(&self) -> bool {
        self.performed
    }

    /// Run one search round; `outcome` is the pending service call
    pub async fn run<F>(&mut self, range: &DateRange, outcome: F)
    where
        F: Future<Output = ApiResult<Vec<T>>>,
    {
        self.performed = true;
        if !range.is_searchable() {
            self.error = Some(MSG_PICK_DATES.to_string());
            return;
        }

        self.loading = true;
        self.error = None;

        match outcome.await {
            Ok(results) => self.results = results,
            Err(ApiError::Status { .. }) => {
                self.error = Some(MSG_SEARCH_FAILED.to_string());
            }
            Err(error) => {
                tracing::debug!(%error, "availability search failed");
                self.error = Some(MSG_SEARCH_UNAVAILABLE.to_string());
            }
        }

        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::future::ready;

    fn range() -> DateRange {
        DateRange::from_query(Some("2025-01-10"), Some("2025-01-12"), Utc::now())
    }

    #[tokio::test]
    async fn test_success_replaces_results() {
        let mut search = AvailabilitySearch::with_initial(vec!["old"]);
        search.run(&range(), ready(Ok(vec!["a", "b"]))).await;

        assert_eq!(search.results(), ["a", "b"]);
        assert!(search.error().is_none());
        assert!(search.was_performed());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_results() {
        let mut search = AvailabilitySearch::with_initial(vec!["old"]);
        search
            .run(
                &range(),
                ready(Err(ApiError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::new(),
                })),
            )
            .await;

        assert_eq!(search.results(), ["old"]);
        assert_eq!(search.error(), Some(MSG_SEARCH_FAILED));
    }

    #[tokio::test]
    async fn test_zero_night_range_is_rejected_without_calling() {
        let zero = DateRange::starting_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let mut search: AvailabilitySearch<&str> = AvailabilitySearch::new();
        search
            .run(&zero, ready(Ok(vec!["should not appear"])))
            .await;

        assert!(search.results().is_empty());
        assert_eq!(search.error(), Some(MSG_PICK_DATES));
    }

    #[test]
    fn test_query_body_shape() {
        let guests = GuestConfiguration::default();
        let query = AvailabilityQuery::new(&range(), &guests);
        let body = serde_json::to_value(&query).unwrap();

        assert_eq!(body["startDate"], "2025-01-10T00:00:00.000Z");
        assert_eq!(body["guests"][0]["adults"], 2);
    }
}
