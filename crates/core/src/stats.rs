// crates/core/src/stats.rs
//! Aggregate focus statistics derived from a user's session history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::session::FocusSession;

/// Today and all-time focus counters.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct FocusStats {
    pub total_sessions: u64,
    pub total_minutes: u64,
    pub today_sessions: u64,
    pub today_minutes: u64,
}

/// Aggregate counters over a user's full session history.
///
/// Completed sessions contribute `floor(duration / 60s)` minutes, never
/// negative even with inconsistent clocks. Active sessions count toward the
/// session counters (today's, if started today) but contribute zero minutes.
/// "Today" is the UTC calendar date of `now`.
pub fn compute_stats(sessions: &[FocusSession], now: DateTime<Utc>) -> FocusStats {
    let today = now.date_naive();
    let mut stats = FocusStats {
        total_sessions: sessions.len() as u64,
        ..FocusStats::default()
    };

    for session in sessions {
        let started_today = session.started_at.date_naive() == today;
        if started_today {
            stats.today_sessions += 1;
        }
        let Some(ended_at) = session.ended_at else {
            continue;
        };
        let minutes = ((ended_at - session.started_at).num_seconds().max(0) / 60) as u64;
        stats.total_minutes += minutes;
        if started_today {
            stats.today_minutes += minutes;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(started: DateTime<Utc>, ended: Option<DateTime<Utc>>) -> FocusSession {
        FocusSession {
            id: "s".to_string(),
            user_id: "u".to_string(),
            task_title: "t".to_string(),
            started_at: started,
            ended_at: ended,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn empty_history_is_all_zeroes() {
        assert_eq!(compute_stats(&[], Utc::now()), FocusStats::default());
    }

    #[test]
    fn minutes_are_floored() {
        // 2024-01-01T10:00:00Z
        let start = at(1_704_103_200);
        let now = start + chrono::Duration::hours(1);
        let sessions = [
            session(start, Some(start + chrono::Duration::seconds(25 * 60 + 59))),
            session(start, Some(start + chrono::Duration::seconds(59))),
        ];

        let stats = compute_stats(&sessions, now);
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_minutes, 25);
        assert_eq!(stats.today_sessions, 2);
        assert_eq!(stats.today_minutes, 25);
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let start = at(1_704_103_200);
        let sessions = [session(start, Some(start - chrono::Duration::minutes(5)))];

        let stats = compute_stats(&sessions, start);
        assert_eq!(stats.total_minutes, 0);
    }

    #[test]
    fn active_sessions_count_but_add_no_minutes() {
        let start = at(1_704_103_200);
        let sessions = [
            session(start, None),
            session(start, Some(start + chrono::Duration::minutes(30))),
        ];

        let stats = compute_stats(&sessions, start + chrono::Duration::hours(2));
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_minutes, 30);
        assert_eq!(stats.today_sessions, 2);
        assert_eq!(stats.today_minutes, 30);
    }

    #[test]
    fn yesterday_counts_toward_totals_only() {
        let yesterday_start = at(1_704_103_200); // 2024-01-01T10:00:00Z
        let today = at(1_704_189_600); // 2024-01-02T10:00:00Z
        let sessions = [
            session(
                yesterday_start,
                Some(yesterday_start + chrono::Duration::minutes(45)),
            ),
            session(today, Some(today + chrono::Duration::minutes(20))),
        ];

        let stats = compute_stats(&sessions, today + chrono::Duration::hours(1));
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_minutes, 65);
        assert_eq!(stats.today_sessions, 1);
        assert_eq!(stats.today_minutes, 20);
    }
}
