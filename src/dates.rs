//! Calendar helpers anchored to the yard's clock.
//!
//! Every "today"/"yesterday" decision in the system uses a fixed UTC-03:00
//! offset, never the host timezone. Day boundaries and the retention cutoff
//! must agree across requests or the cleanup endpoints would prune rows the
//! caixa page still shows.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Fixed UTC-03:00 offset, in seconds east of UTC.
pub const YARD_OFFSET_SECS: i32 = -3 * 3600;

pub fn yard_offset() -> FixedOffset {
    FixedOffset::east_opt(YARD_OFFSET_SECS).expect("UTC-03:00 is a valid offset")
}

/// Current calendar day on the yard's clock.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&yard_offset()).date_naive()
}

/// Half-open UTC window `[00:00:00, next day 00:00:00)` covering `date`
/// on the yard's clock. Used to select "today's" rows by `created_at`.
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date
        .and_time(NaiveTime::MIN)
        .and_local_timezone(yard_offset())
        .single()
        .expect("fixed offsets have no DST gaps")
        .with_timezone(&Utc);
    (start, start + Duration::days(1))
}

/// Retention cutoff: two calendar days before `today`. Rows dated on or
/// before the cutoff are eligible for deletion.
pub fn retention_cutoff(today: NaiveDate) -> NaiveDate {
    today - Duration::days(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn cutoff_is_two_calendar_days_back() {
        assert_eq!(retention_cutoff(date("2025-01-10")), date("2025-01-08"));
    }

    #[test]
    fn cutoff_crosses_month_boundary() {
        assert_eq!(retention_cutoff(date("2025-03-01")), date("2025-02-27"));
    }

    #[test]
    fn cutoff_crosses_year_boundary() {
        assert_eq!(retention_cutoff(date("2025-01-01")), date("2024-12-30"));
    }

    #[test]
    fn day_window_starts_at_local_midnight() {
        let (start, end) = day_window(date("2025-01-10"));
        // Local midnight at UTC-03:00 is 03:00 UTC.
        assert_eq!(start.to_rfc3339(), "2025-01-10T03:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-01-11T03:00:00+00:00");
    }

    #[test]
    fn last_second_of_the_day_is_inside_the_window() {
        let (start, end) = day_window(date("2025-01-10"));
        let almost_midnight: DateTime<Utc> =
            "2025-01-11T02:59:59.500Z".parse().unwrap();
        assert!(almost_midnight >= start && almost_midnight < end);
    }
}
