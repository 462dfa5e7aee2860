//! Booking (checkout) service

use crate::{
    error::ApiResult,
    http::ApiClient,
    models::{Booking, BookingDraft, BookingStatus, MyBooking, StatusUpdate},
};

#[derive(Clone)]
pub struct BookingsService {
    api: ApiClient,
}

impl BookingsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit the checkout form; the server answers 409 when the dates
    /// overlap an existing pending/confirmed booking
    pub async fn create(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        self.api.post_json("/checkout/", draft).await
    }

    /// Admin: every booking on record
    pub async fn list(&self) -> ApiResult<Vec<Booking>> {
        self.api.get_json("/checkout/").await
    }

    /// Bookings of the authenticated guest, newest first, with listing titles
    pub async fn my(&self) -> ApiResult<Vec<MyBooking>> {
        self.api.get_json("/checkout/my").await
    }

    /// Admin: move a booking through its status lifecycle
    pub async fn set_status(&self, id: i64, status: BookingStatus) -> ApiResult<Booking> {
        self.api
            .patch_json(
                &format!("/checkout/admin/{}/status", id),
                &StatusUpdate { status },
            )
            .await
    }

    /// Delete a booking (owner or admin)
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("/checkout/{}", id)).await
    }
}
