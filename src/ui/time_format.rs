use chrono::{DateTime, Local, TimeZone};
use chrono_humanize::HumanTime;
use std::fmt::Display;

/// Event times as "Nov 14, 2023, 10:13 PM" in local time. Missing or zero
/// timestamps read "N/A".
pub fn format_timestamp_to_local(ts: Option<i64>) -> String {
    match ts.filter(|t| *t != 0) {
        Some(ts) => format_in(&Local, ts),
        None => "N/A".to_string(),
    }
}

fn format_in<Tz: TimeZone>(tz: &Tz, ts: i64) -> String
where
    Tz::Offset: Display,
{
    match tz.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// "in 3 days" / "2 hours ago" relative to `now`.
pub fn format_relative(ts: Option<i64>, now: DateTime<Local>) -> Option<String> {
    let dt = Local.timestamp_opt(ts.filter(|t| *t != 0)?, 0).single()?;
    Some(HumanTime::from(dt.signed_duration_since(now)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_missing_or_zero_is_na() {
        assert_eq!(format_timestamp_to_local(None), "N/A");
        assert_eq!(format_timestamp_to_local(Some(0)), "N/A");
    }

    #[test]
    fn test_medium_date_short_time() {
        assert_eq!(format_in(&Utc, 1_700_000_000), "Nov 14, 2023, 10:13 PM");
        assert_eq!(format_in(&Utc, 1_704_070_800), "Jan 1, 2024, 1:00 AM");
    }

    #[test]
    fn test_relative_time() {
        let now = Local::now();
        let later = (now + Duration::days(3) + Duration::hours(2)).timestamp();
        assert_eq!(format_relative(Some(later), now).as_deref(), Some("in 3 days"));
        assert_eq!(format_relative(Some(0), now), None);
    }
}
