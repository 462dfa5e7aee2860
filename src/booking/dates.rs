//! Stay date range for the booking flow
//!
//! Seeded from "now" or from the `checkIn`/`checkOut` query parameters. The
//! pair always satisfies `end >= start`: an inverted range collapses onto its
//! start date instead of propagating downstream.

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Zero-night range anchored at the given instant
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start: now,
            end: now,
        }
    }

    pub fn now() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Seed from query parameters; anything missing or unparseable falls back
    /// to `now` (start) or to the start itself (end)
    pub fn from_query(
        check_in: Option<&str>,
        check_out: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let start = check_in.and_then(parse_stamp).unwrap_or(now);
        let end = check_out.and_then(parse_stamp).unwrap_or(start);
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Atomic overwrite of the whole pair (the calendar widget replaces both
    /// dates on every selection); the clamp invariant applies here too
    pub fn set(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.start = start;
        self.end = end.max(start);
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// At least one night selected; the precondition for running a search
    pub fn is_searchable(&self) -> bool {
        self.end > self.start
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC)
fn parse_stamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
