//! Semantic validation of reservation requests.
//!
//! Pure functions over the raw request fields. All violated constraints
//! are collected and returned together rather than failing on the first,
//! so the caller sees every problem in one response.

use chrono::{Months, NaiveDate, NaiveTime};
use serde::Serialize;

use roomhub_entity::Room;

/// First bookable hour of the day (inclusive).
pub const OPENING_HOUR: u32 = 8;
/// First non-bookable hour of the evening (exclusive upper bound).
pub const CLOSING_HOUR: u32 = 20;
/// Maximum booking horizon in months from today.
pub const MAX_ADVANCE_MONTHS: u32 = 6;

/// A single violated field constraint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// The offending request field.
    pub field: &'static str,
    /// Caller-safe description of the violation.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A fully validated slot request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSlot {
    /// Calendar day.
    pub date: NaiveDate,
    /// Start time.
    pub time: NaiveTime,
    /// Room.
    pub room: Room,
}

/// Validate the raw (date, time, room) fields of a reservation request
/// against `today` (the server-local calendar day).
///
/// Returns the parsed slot, or every violated constraint.
pub fn validate_slot(
    date: &str,
    time: &str,
    room: &str,
    today: NaiveDate,
) -> Result<ValidSlot, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let date = match check_date(date, today) {
        Ok(d) => Some(d),
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let time = match check_time(time) {
        Ok(t) => Some(t),
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let room = match room.parse::<Room>() {
        Ok(r) => Some(r),
        Err(e) => {
            violations.push(FieldViolation::new("room", e.message));
            None
        }
    };

    match (date, time, room) {
        (Some(date), Some(time), Some(room)) => Ok(ValidSlot { date, time, room }),
        _ => Err(violations),
    }
}

fn check_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, FieldViolation> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        FieldViolation::new("date", "Invalid date format (use ISO 8601: YYYY-MM-DD)")
    })?;

    if date < today {
        return Err(FieldViolation::new("date", "The date cannot be in the past"));
    }

    let horizon = today
        .checked_add_months(Months::new(MAX_ADVANCE_MONTHS))
        .unwrap_or(NaiveDate::MAX);
    if date > horizon {
        return Err(FieldViolation::new(
            "date",
            "Reservations cannot be made more than 6 months in advance",
        ));
    }

    Ok(date)
}

fn check_time(raw: &str) -> Result<NaiveTime, FieldViolation> {
    let raw = raw.trim();

    // Strict HH:MM, 24-hour, zero-padded.
    let parsed = match raw.as_bytes() {
        [h1 @ b'0'..=b'9', h2 @ b'0'..=b'9', b':', m1 @ b'0'..=b'9', m2 @ b'0'..=b'9'] => {
            let hour = u32::from((h1 - b'0') * 10 + (h2 - b'0'));
            let minute = u32::from((m1 - b'0') * 10 + (m2 - b'0'));
            NaiveTime::from_hms_opt(hour, minute, 0)
        }
        _ => None,
    };

    let time = parsed
        .ok_or_else(|| FieldViolation::new("time", "Invalid time format (use HH:MM, 24-hour)"))?;

    let hour = chrono::Timelike::hour(&time);
    if !(OPENING_HOUR..CLOSING_HOUR).contains(&hour) {
        return Err(FieldViolation::new(
            "time",
            "The time must be between 08:00 and 19:59",
        ));
    }

    Ok(time)
}
