// crates/core/src/calendar.rs
//! Google Calendar deep links for blocking focus time.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::session::{FocusSession, PLACEHOLDER_TITLE};

/// Event length assumed for a session that has not ended yet.
const DEFAULT_EVENT_MINUTES: i64 = 60;

/// A calendar-provider URL plus the resolved event title.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct CalendarLink {
    pub url: String,
    pub title: String,
}

/// Format a timestamp as `YYYYMMDDTHHMMSSZ`.
fn to_calendar_format(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Build a Google Calendar "create event" URL covering the session's range.
///
/// An active session gets a default 60-minute block. No external service is
/// contacted; this is pure string construction.
pub fn calendar_link(session: &FocusSession) -> CalendarLink {
    let start = session.started_at;
    let end = session
        .ended_at
        .unwrap_or(start + Duration::minutes(DEFAULT_EVENT_MINUTES));

    let trimmed = session.task_title.trim();
    let title = if trimmed.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        trimmed.to_string()
    };

    let dates = format!(
        "{}/{}",
        urlencoding::encode(&to_calendar_format(start)),
        urlencoding::encode(&to_calendar_format(end)),
    );
    let url = format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}",
        urlencoding::encode(&title),
        dates,
    );

    CalendarLink { url, title }
}
