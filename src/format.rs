use chrono::{DateTime, Local, NaiveDateTime};

/// Parse a server timestamp such as `2019-05-12T10:11:12.345` as local time.
/// Timestamps with an offset (`Z`, `+02:00`) are converted to local time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// "5 minutes ago" style rendering relative to `now`. Unparsable input is
/// returned unchanged.
pub fn time_ago_from(raw: &str, now: NaiveDateTime) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let seconds = (now - then).num_seconds().max(0);
    let (amount, unit) = match seconds {
        0..=59 => return "just now".to_string(),
        60..=3_599 => (seconds / 60, "minute"),
        3_600..=86_399 => (seconds / 3_600, "hour"),
        86_400..=2_591_999 => (seconds / 86_400, "day"),
        2_592_000..=31_535_999 => (seconds / 2_592_000, "month"),
        _ => (seconds / 31_536_000, "year"),
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

pub fn time_ago(raw: &str) -> String {
    time_ago_from(raw, Local::now().naive_local())
}

/// "1 point", "3 points", "-2 points".
pub fn points(score: i64) -> String {
    if score.abs() == 1 {
        format!("{score} point")
    } else {
        format!("{score} points")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn parses_with_and_without_fraction() {
        assert!(parse_timestamp("2019-05-12T10:11:12").is_some());
        assert!(parse_timestamp("2019-05-12T10:11:12.123456").is_some());
        assert!(parse_timestamp("2019-05-12 10:11:12").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn utc_timestamps_are_shifted_to_local_time() {
        let instant = Utc.with_ymd_and_hms(2019, 5, 12, 10, 11, 12).unwrap();
        assert_eq!(
            parse_timestamp("2019-05-12T10:11:12Z"),
            Some(instant.with_timezone(&Local).naive_local())
        );

        let now = instant.with_timezone(&Local).naive_local();
        assert_eq!(time_ago_from("2019-05-12T07:11:12Z", now), "3 hours ago");
        assert_eq!(time_ago_from("2019-05-12T12:11:12+02:00", now), "just now");
    }

    #[test]
    fn relative_units() {
        let now = at("2020-01-10T12:00:00");
        assert_eq!(time_ago_from("2020-01-10T11:59:30", now), "just now");
        assert_eq!(time_ago_from("2020-01-10T11:59:00", now), "1 minute ago");
        assert_eq!(time_ago_from("2020-01-10T09:00:00", now), "3 hours ago");
        assert_eq!(time_ago_from("2020-01-08T12:00:00", now), "2 days ago");
        assert_eq!(time_ago_from("2018-01-10T12:00:00", now), "2 years ago");
    }

    #[test]
    fn future_timestamps_read_as_now() {
        let now = at("2020-01-10T12:00:00");
        assert_eq!(time_ago_from("2020-01-10T12:05:00", now), "just now");
    }

    #[test]
    fn unparsable_is_passed_through() {
        let now = at("2020-01-10T12:00:00");
        assert_eq!(time_ago_from("n/a", now), "n/a");
    }

    #[test]
    fn points_pluralizes() {
        assert_eq!(points(1), "1 point");
        assert_eq!(points(-1), "-1 point");
        assert_eq!(points(0), "0 points");
        assert_eq!(points(12), "12 points");
    }
}
