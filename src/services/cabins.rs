//! Cabin catalog and availability service

use crate::{
    booking::{AvailabilityQuery, DateRange, GuestConfiguration},
    error::ApiResult,
    http::ApiClient,
    models::{Cabin, CabinDraft},
};

#[derive(Clone)]
pub struct CabinsService {
    api: ApiClient,
}

impl CabinsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Cabin list; the same collection serves the public page and the panel
    pub async fn list(&self) -> ApiResult<Vec<Cabin>> {
        self.api.get_json("/cabin_admin/").await
    }

    /// Admin: create a cabin from the panel draft
    pub async fn create(&self, draft: &CabinDraft) -> ApiResult<Cabin> {
        self.api.post_json("/cabin_admin/", draft).await
    }

    /// Admin: replace a cabin by id
    pub async fn update(&self, id: i64, cabin: &Cabin) -> ApiResult<Cabin> {
        self.api.put_json(&format!("/cabin_admin/{}/", id), cabin).await
    }

    /// Admin: delete a cabin
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("/cabin_admin/{}/", id)).await
    }

    /// Availability search for the selected dates and guest configuration
    pub async fn search(
        &self,
        range: &DateRange,
        guests: &GuestConfiguration,
    ) -> ApiResult<Vec<Cabin>> {
        let query = AvailabilityQuery::new(range, guests);
        self.api.post_json("/cabin_admin/search", &query).await
    }
}
