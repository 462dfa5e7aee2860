//! Per-room guest configuration for an availability search

use serde::{Deserialize, Serialize};

/// Adults floor for a room; a room cannot be booked without an adult
pub const ADULTS_FLOOR: u32 = 1;

/// Adult/children counts for one requested room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGuests {
    pub adults: u32,
    pub children: u32,
}

/// Which counter of a room entry is being changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Adults,
    Children,
}

/// Ordered per-room guest counts
///
/// Invariants: at least one room entry always exists; adults never drop below
/// [`ADULTS_FLOOR`], children never below zero. Out-of-range indices are
/// silent no-ops, matching the form behavior this models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestConfiguration {
    rooms: Vec<RoomGuests>,
}

impl Default for GuestConfiguration {
    /// The search form opens with one room for two adults
    fn default() -> Self {
        Self {
            rooms: vec![RoomGuests {
                adults: 2,
                children: 0,
            }],
        }
    }
}

impl GuestConfiguration {
    pub fn rooms(&self) -> &[RoomGuests] {
        &self.rooms
    }

    /// Append another room with the default single adult
    pub fn add_room(&mut self) {
        self.rooms.push(RoomGuests {
            adults: 1,
            children: 0,
        });
    }

    /// Remove a room entry; keeps the last remaining room
    pub fn remove_room(&mut self, index: usize) {
        if self.rooms.len() > 1 && index < self.rooms.len() {
            self.rooms.remove(index);
        }
    }

    /// Set a counter, clamped to its floor; accepts the raw value a +/-
    /// stepper produces, which may be negative
    pub fn set(&mut self, index: usize, field: GuestField, value: i64) {
        let Some(entry) = self.rooms.get_mut(index) else {
            return;
        };
        match field {
            GuestField::Adults => entry.adults = value.max(ADULTS_FLOOR as i64) as u32,
            GuestField::Children => entry.children = value.max(0) as u32,
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn total_adults(&self) -> u32 {
        self.rooms.iter().map(|r| r.adults).sum()
    }

    pub fn total_children(&self) -> u32 {
        self.rooms.iter().map(|r| r.children).sum()
    }

    /// Encode for the single JSON `guests` query parameter
    pub fn to_query_value(&self) -> String {
        serde_json::to_string(&self.rooms).unwrap_or_default()
    }

    /// Decode the `guests` query parameter; malformed or empty input yields
    /// `None` so the caller keeps its current configuration. Each decoded
    /// entry is normalized onto the floors.
    pub fn from_query_value(raw: &str) -> Option<Self> {
        #[derive(Deserialize)]
        struct RawGuests {
            adults: Option<i64>,
            children: Option<i64>,
        }

        let parsed: Vec<RawGuests> = serde_json::from_str(raw).ok()?;
        if parsed.is_empty() {
            return None;
        }

        let rooms = parsed
            .into_iter()
            .map(|g| RoomGuests {
                adults: g.adults.unwrap_or(1).max(ADULTS_FLOOR as i64) as u32,
                children: g.children.unwrap_or(0).max(0) as u32,
            })
            .collect();

        Some(Self { rooms })
    }
}
