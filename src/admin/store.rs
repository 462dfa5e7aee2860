//! Panel state for one admin-managed collection
//!
//! The store mirrors the back-office page behavior: every mutation talks to
//! the server first and only touches the local list with what the server
//! returned. There are no optimistic updates and no retries; a failed call
//! leaves the list as it was and raises a localized banner.

use super::resource::{AdminResource, Identified};

/// Localized banner/prompt strings for one entity kind
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
}

pub const USER_MESSAGES: Messages = Messages {
    load_failed: "Ошибка загрузки данных",
    create_failed: "Ошибка создания пользователя",
    update_failed: "Ошибка обновления пользователя",
    delete_failed: "Ошибка удаления",
    confirm_delete: "Удалить пользователя?",
};

pub const ROOM_MESSAGES: Messages = Messages {
    load_failed: "Ошибка загрузки данных",
    create_failed: "Ошибка создания комнаты",
    update_failed: "Ошибка обновления комнаты",
    delete_failed: "Ошибка удаления",
    confirm_delete: "Удалить номер?",
};

pub const CABIN_MESSAGES: Messages = Messages {
    load_failed: "Ошибка загрузки данных",
    create_failed: "Ошибка создания домика",
    update_failed: "Ошибка обновления домика",
    delete_failed: "Ошибка удаления",
    confirm_delete: "Удалить домик?",
};

pub const BOOKING_MESSAGES: Messages = Messages {
    load_failed: "Ошибка загрузки данных",
    create_failed: "Ошибка при бронировании",
    update_failed: "Ошибка обновления статуса",
    delete_failed: "Ошибка удаления",
    confirm_delete: "Удалить бронирование?",
};

pub struct EntityStore<R: AdminResource> {
    resource: R,
    messages: Messages,
    items: Vec<R::Entity>,
    error: Option<&'static str>,
}

impl<R: AdminResource> EntityStore<R> {
    pub fn new(resource: R, messages: Messages) -> Self {
        Self {
            resource,
            messages,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Reload the collection; on failure the stale list stays visible under
    /// the load-failed banner
    pub async fn refresh(&mut self) -> bool {
        match self.resource.fetch_all().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "admin refresh failed");
                self.error = Some(self.messages.load_failed);
                false
            }
        }
    }

    /// Create from a draft; the server-returned record is appended exactly
    /// once
    pub async fn create(&mut self, draft: &R::Draft) -> bool {
        match self.resource.create(draft).await {
            Ok(created) => {
                self.items.push(created);
                self.error = None;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "admin create failed");
                self.error = Some(self.messages.create_failed);
                false
            }
        }
    }

    /// Save an edited record; on success the matching list entry is replaced
    /// with what the server returned
    pub async fn update(&mut self, edited: &R::Entity) -> bool {
        match self.resource.update(edited).await {
            Ok(saved) => {
                if let Some(slot) = self.items.iter_mut().find(|e| e.id() == saved.id()) {
                    *slot = saved;
                }
                self.error = None;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "admin update failed");
                self.error = Some(self.messages.update_failed);
                false
            }
        }
    }

    /// Delete after the blocking confirmation hook agrees; declining is not
    /// an error
    pub async fn delete<C>(&mut self, id: i64, confirm: C) -> bool
    where
        C: FnOnce(&str) -> bool,
    {
        if !confirm(self.messages.confirm_delete) {
            return false;
        }

        match self.resource.remove(id).await {
            Ok(()) => {
                self.items.retain(|e| e.id() != id);
                self.error = None;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "admin delete failed");
                self.error = Some(self.messages.delete_failed);
                false
            }
        }
    }

    pub(super) fn resource(&self) -> &R {
        &self.resource
    }

    pub(super) fn patch<F>(&mut self, id: i64, apply: F)
    where
        F: FnOnce(&mut R::Entity),
    {
        if let Some(entity) = self.items.iter_mut().find(|e| e.id() == id) {
            apply(entity);
        }
    }
}
