use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const EXPIRED_LABEL: &str = "EXPIRED";
pub const CONCLUDED_LABEL: &str = "Concluded";
pub const GIVEAWAY_TICK_MS: u32 = 1000;
pub const PERIOD_TICK_MS: u32 = 60_000;
pub const DEFAULT_GIVEAWAY_HOURS: i64 = 2;

/// What the giveaway badge and timer should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveawayClock {
    Running(String),
    Expired,
}

impl GiveawayClock {
    pub fn label(&self) -> &str {
        match self {
            Self::Running(time) => time,
            Self::Expired => EXPIRED_LABEL,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Giveaway {
    pub title: String,
    pub description: String,
    pub is_live: bool,
    pub end_time: DateTime<Utc>,
}

impl Giveaway {
    pub fn starting_now(now: DateTime<Utc>) -> Self {
        Self {
            title: "Raffle".to_string(),
            description: "Enter the codeword given by the raffle host before it expires to gain an entry to the raffle.".to_string(),
            is_live: true,
            end_time: now + Duration::hours(DEFAULT_GIVEAWAY_HOURS),
        }
    }

    pub fn clock(&self, now: DateTime<Utc>) -> GiveawayClock {
        giveaway_clock(self.end_time, now)
    }

    /// Entries are accepted only while live and before the deadline.
    pub fn accepts_entries(&self, now: DateTime<Utc>) -> bool {
        self.is_live && !self.clock(now).is_expired()
    }
}

/// `HH:MM:SS` until `end`. Whole days are dropped from the hour field.
pub fn giveaway_clock(end: DateTime<Utc>, now: DateTime<Utc>) -> GiveawayClock {
    let remaining = end - now;
    if remaining <= Duration::zero() {
        return GiveawayClock::Expired;
    }
    let secs = remaining.num_seconds();
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    GiveawayClock::Running(format!("{:02}:{:02}:{:02}", hours, minutes, seconds))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeaderboardPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_active: bool,
}

impl LeaderboardPeriod {
    pub fn time_left(&self, now: DateTime<Utc>) -> String {
        let remaining = self.end - now;
        if remaining <= Duration::zero() {
            return CONCLUDED_LABEL.to_string();
        }
        let mins = remaining.num_minutes();
        let days = mins / (24 * 60);
        let hours = (mins % (24 * 60)) / 60;
        let minutes = mins % 60;
        if days > 0 {
            format!("{}d {}h {}m", days, hours, minutes)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }

    pub fn progress_percent(&self, now: DateTime<Utc>) -> f64 {
        if !self.is_active {
            return 100.0;
        }
        let total = (self.end - self.start).num_milliseconds();
        if total <= 0 {
            return 100.0;
        }
        let elapsed = (now - self.start).num_milliseconds();
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn format_date(date: DateTime<Utc>) -> String {
        date.format("%b %-d, %I:%M %p UTC").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_giveaway_clock_pads_fields() {
        let now = at(10, 0, 0);
        assert_eq!(giveaway_clock(at(12, 0, 0), now).label(), "02:00:00");
        assert_eq!(giveaway_clock(at(10, 1, 5), now).label(), "00:01:05");
    }

    #[test]
    fn test_giveaway_clock_expires_at_deadline() {
        let now = at(10, 0, 0);
        assert!(giveaway_clock(now, now).is_expired());
        assert_eq!(giveaway_clock(at(9, 0, 0), now).label(), EXPIRED_LABEL);
    }

    #[test]
    fn test_giveaway_clock_drops_whole_days() {
        let now = at(10, 0, 0);
        let end = now + Duration::hours(25) + Duration::minutes(3);
        assert_eq!(giveaway_clock(end, now).label(), "01:03:00");
    }

    #[test]
    fn test_giveaway_entries_close_when_offline_or_expired() {
        let now = at(10, 0, 0);
        let mut giveaway = Giveaway::starting_now(now);
        assert!(giveaway.accepts_entries(now));
        assert!(!giveaway.accepts_entries(now + Duration::hours(3)));
        giveaway.is_live = false;
        assert!(!giveaway.accepts_entries(now));
    }

    #[test]
    fn test_period_time_left() {
        let period = LeaderboardPeriod {
            start: at(0, 0, 0),
            end: at(0, 0, 0) + Duration::days(3) + Duration::hours(4) + Duration::minutes(30),
            is_active: true,
        };
        assert_eq!(period.time_left(at(0, 0, 0)), "3d 4h 30m");
        assert_eq!(period.time_left(period.end - Duration::minutes(90)), "1h 30m");
        assert_eq!(period.time_left(period.end), CONCLUDED_LABEL);
    }

    #[test]
    fn test_period_progress() {
        let period = LeaderboardPeriod {
            start: at(0, 0, 0),
            end: at(10, 0, 0),
            is_active: true,
        };
        assert_eq!(period.progress_percent(at(5, 0, 0)), 50.0);
        assert_eq!(period.progress_percent(at(11, 0, 0)), 100.0);
        assert_eq!(period.progress_percent(at(0, 0, 0) - Duration::hours(1)), 0.0);
        let inactive = LeaderboardPeriod { is_active: false, ..period };
        assert_eq!(inactive.progress_percent(at(1, 0, 0)), 100.0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(LeaderboardPeriod::format_date(at(14, 5, 0)), "Aug 1, 02:05 PM UTC");
    }
}
