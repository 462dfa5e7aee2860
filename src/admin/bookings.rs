//! Booking desk: the bookings table of the admin panel
//!
//! Wraps the generic store and adds the status lifecycle control. While a
//! status request is in flight its booking id is held, so the panel can
//! disable that row's control; on success only the status field of the local
//! record changes.

use async_trait::async_trait;

use super::{
    resource::{AdminResource, BookingAdmin},
    store::{EntityStore, BOOKING_MESSAGES},
};
use crate::{
    error::ApiResult,
    models::{Booking, BookingDraft, BookingStatus},
    services::bookings::BookingsService,
};

/// The bookings resource plus its status lifecycle endpoint
#[async_trait]
pub trait BookingActions: AdminResource<Entity = Booking, Draft = BookingDraft> {
    async fn set_status(&self, id: i64, status: BookingStatus) -> ApiResult<Booking>;
}

#[async_trait]
impl BookingActions for BookingAdmin {
    async fn set_status(&self, id: i64, status: BookingStatus) -> ApiResult<Booking> {
        self.service().set_status(id, status).await
    }
}

pub struct BookingDesk<R: BookingActions = BookingAdmin> {
    store: EntityStore<R>,
    pending_status: Option<i64>,
}

impl BookingDesk<BookingAdmin> {
    pub fn new(service: BookingsService) -> Self {
        Self::over(BookingAdmin::new(service))
    }
}

impl<R: BookingActions> BookingDesk<R> {
    pub fn over(resource: R) -> Self {
        Self {
            store: EntityStore::new(resource, BOOKING_MESSAGES),
            pending_status: None,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        self.store.items()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.store.error()
    }

    /// Id of the booking whose status change is still running, if any
    pub fn pending_status(&self) -> Option<i64> {
        self.pending_status
    }

    pub fn is_status_pending(&self, id: i64) -> bool {
        self.pending_status == Some(id)
    }

    pub async fn refresh(&mut self) -> bool {
        self.store.refresh().await
    }

    pub async fn delete<C>(&mut self, id: i64, confirm: C) -> bool
    where
        C: FnOnce(&str) -> bool,
    {
        self.store.delete(id, confirm).await
    }

    /// Move a booking to a new status; a second change for the same booking
    /// is ignored while the first is in flight
    pub async fn set_status(&mut self, id: i64, status: BookingStatus) -> bool {
        if self.is_status_pending(id) {
            return false;
        }
        self.pending_status = Some(id);

        let outcome = self.store.resource().set_status(id, status).await;
        self.pending_status = None;

        match outcome {
            Ok(saved) => {
                self.store.patch(id, |booking| booking.status = saved.status);
                true
            }
            Err(error) => {
                tracing::warn!(%error, booking = id, "status update failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use chrono::{TimeZone, Utc};
    use mockall::mock;

    mock! {
        Desk {}

        #[async_trait]
        impl AdminResource for Desk {
            type Entity = Booking;
            type Draft = BookingDraft;

            async fn fetch_all(&self) -> ApiResult<Vec<Booking>>;
            async fn create(&self, draft: &BookingDraft) -> ApiResult<Booking>;
            async fn update(&self, edited: &Booking) -> ApiResult<Booking>;
            async fn remove(&self, id: i64) -> ApiResult<()>;
        }

        #[async_trait]
        impl BookingActions for Desk {
            async fn set_status(&self, id: i64, status: BookingStatus) -> ApiResult<Booking>;
        }
    }

    fn booking(id: i64, status: BookingStatus) -> Booking {
        let stamp = Utc.with_ymd_and_hms(2025, 1, 20, 8, 30, 0).unwrap();
        Booking {
            id,
            object_type: crate::models::BookableType::Room,
            object_id: 4,
            last_name: "Иванов".to_string(),
            first_name: "Иван".to_string(),
            middle_name: None,
            phone: "+7 700 000 00 00".to_string(),
            email: "ivanov@otd.ru".to_string(),
            citizenship: "RU".to_string(),
            comments: None,
            payment: "card".to_string(),
            start_date: stamp,
            end_date: stamp,
            user_id: None,
            room_id: Some(4),
            cabin_id: None,
            status,
            created_at: stamp,
        }
    }

    #[tokio::test]
    async fn test_set_status_patches_only_local_status() {
        let mut resource = MockDesk::new();
        resource
            .expect_fetch_all()
            .returning(|| Ok(vec![booking(11, BookingStatus::Pending)]));
        resource
            .expect_set_status()
            .returning(|id, status| Ok(booking(id, status)));

        let mut desk = BookingDesk::over(resource);
        desk.refresh().await;

        assert!(desk.set_status(11, BookingStatus::Confirmed).await);
        assert_eq!(desk.bookings()[0].status, BookingStatus::Confirmed);
        assert_eq!(desk.bookings()[0].last_name, "Иванов");
        assert!(desk.pending_status().is_none());
    }

    #[tokio::test]
    async fn test_failed_status_change_leaves_record() {
        let mut resource = MockDesk::new();
        resource
            .expect_fetch_all()
            .returning(|| Ok(vec![booking(11, BookingStatus::Pending)]));
        resource.expect_set_status().returning(|_, _| {
            Err(ApiError::Status {
                status: reqwest::StatusCode::BAD_REQUEST,
                message: "invalid transition".to_string(),
            })
        });

        let mut desk = BookingDesk::over(resource);
        desk.refresh().await;

        assert!(!desk.set_status(11, BookingStatus::Cancelled).await);
        assert_eq!(desk.bookings()[0].status, BookingStatus::Pending);
        assert!(desk.pending_status().is_none());
    }

    #[tokio::test]
    async fn test_delete_uses_booking_prompt() {
        let mut resource = MockDesk::new();
        resource
            .expect_fetch_all()
            .returning(|| Ok(vec![booking(11, BookingStatus::Pending)]));
        resource.expect_remove().returning(|_| Ok(()));

        let mut desk = BookingDesk::over(resource);
        desk.refresh().await;

        let deleted = desk
            .delete(11, |prompt| {
                assert_eq!(prompt, "Удалить бронирование?");
                true
            })
            .await;

        assert!(deleted);
        assert!(desk.bookings().is_empty());
    }
}
