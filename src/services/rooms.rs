//! Room catalog and availability service

use std::time::Duration;

use crate::{
    booking::{AvailabilityQuery, DateRange, GuestConfiguration},
    error::ApiResult,
    http::ApiClient,
    models::{Room, RoomDraft},
};

#[derive(Clone)]
pub struct RoomsService {
    api: ApiClient,
}

impl RoomsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Admin: full room list
    pub async fn list(&self) -> ApiResult<Vec<Room>> {
        self.api.get_json("/room_admin/").await
    }

    /// Admin: create a room from the panel draft
    pub async fn create(&self, draft: &RoomDraft) -> ApiResult<Room> {
        self.api.post_json("/room_admin/", draft).await
    }

    /// Admin: replace a room by id
    pub async fn update(&self, id: i64, room: &Room) -> ApiResult<Room> {
        self.api.put_json(&format!("/room_admin/{}/", id), room).await
    }

    /// Admin: delete a room
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("/room_admin/{}/", id)).await
    }

    /// Public room list for the booking page
    pub async fn list_public(&self) -> ApiResult<Vec<Room>> {
        self.api.get_json("/room_admin/public").await
    }

    /// Initial booking-page fetch, raced against a fixed budget; on expiry
    /// the page proceeds with an empty result set and the user searches
    /// manually
    pub async fn list_public_with_timeout(&self, budget: Duration) -> ApiResult<Vec<Room>> {
        match tokio::time::timeout(budget, self.list_public()).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(?budget, "initial room fetch timed out");
                Ok(Vec::new())
            }
        }
    }

    /// Availability search for the selected dates and guest configuration
    pub async fn search(
        &self,
        range: &DateRange,
        guests: &GuestConfiguration,
    ) -> ApiResult<Vec<Room>> {
        let query = AvailabilityQuery::new(range, guests);
        self.api.post_json("/room_admin/public/search", &query).await
    }
}
