//! Byte count and time formatting.
//!
//! [human_size] reproduces the GNU `ls -h` display convention byte for byte:
//! one fractional digit below ten units, always rounding up.

use chrono::{DateTime, Datelike, Local};

use std::time::SystemTime;

const UNITS: [&str; 5] = ["", "K", "M", "G", "T"];
// ceil(1024 / 10), the width of one displayed tenth of a unit
const TENTH: u64 = 1024 / 10 + 1;
const MAX_SCALE_STEPS: usize = 12;

/// Formats a byte count the way `ls -h` does, e.g. `1536 -> "1.5K"`.
///
/// Scaling stops at the "T" unit; larger counts print as whole tebibytes.
pub fn human_size(n: u64) -> String {
    let mut whole = n;
    let mut unit_size: u64 = 1;
    let mut steps = 0;
    while steps < MAX_SCALE_STEPS && steps < UNITS.len() - 1 {
        if whole / 1024 == 0 {
            break;
        }
        whole /= 1024;
        unit_size *= 1024;
        steps += 1;
    }

    let mut frac = n - whole * unit_size;
    if frac != 0 && steps > 0 {
        if whole < 10 {
            let lower_size = unit_size / 1024;
            frac = frac / lower_size / TENTH + 1;
            if frac == 10 {
                whole += 1;
                frac = 0;
            }
        } else {
            whole += 1;
        }
    }

    let unit = UNITS[steps];
    if steps > 0 && (1..10).contains(&whole) {
        format!("{}.{}{}", whole, frac, unit)
    } else {
        format!("{}{}", whole, unit)
    }
}

/// Number of decimal digits needed to print `n`.
pub fn decimal_len(mut n: u64) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

/// Short relative phrase such as "3 days ago" or "2 hours from now".
pub fn relative_time(then: SystemTime, now: SystemTime) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const WEEK: u64 = 7 * DAY;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 12 * MONTH;
    const LONG_TIME: u64 = 37 * YEAR;

    let (secs, suffix) = match now.duration_since(then) {
        Ok(d) => (d.as_secs(), "ago"),
        Err(e) => (e.duration().as_secs(), "from now"),
    };

    let (count, unit) = match secs {
        0 => return "now".to_string(),
        s if s < MINUTE => (s, "second"),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < WEEK => (s / DAY, "day"),
        s if s < MONTH => (s / WEEK, "week"),
        s if s < YEAR => (s / MONTH, "month"),
        s if s < LONG_TIME => (s / YEAR, "year"),
        _ => return format!("a long while {}", suffix),
    };

    if count == 1 {
        format!("1 {} {}", unit, suffix)
    } else {
        format!("{} {}s {}", count, unit, suffix)
    }
}

/// Formats a modification time for long format.
///
/// Entries from the current year show the time of day, older or future years
/// show the year in its place.
pub fn format_timestamp(mod_time: SystemTime, now: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(mod_time);
    let now: DateTime<Local> = DateTime::from(now);
    if dt.year() == now.year() {
        dt.format("%b %e %H:%M").to_string()
    } else {
        dt.format("%b %e  %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    #[test]
    fn human_sizes_match_gnu() {
        assert_eq!(human_size(0), "0");
        assert_eq!(human_size(5), "5");
        assert_eq!(human_size(1023), "1023");
        assert_eq!(human_size(1024), "1.0K");
        assert_eq!(human_size(1025), "1.1K");
        assert_eq!(human_size(1536), "1.5K");
        assert_eq!(human_size(10240), "10K");
        assert_eq!(human_size(10241), "11K");
        assert_eq!(human_size(1024 * 1024), "1.0M");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn fraction_carries_into_whole() {
        // 9.99K rounds up past 9.9K
        assert_eq!(human_size(10239), "10K");
        assert_eq!(human_size(2047), "2.0K");
    }

    #[test]
    fn scale_stops_at_tebibytes() {
        let tib = 1u64 << 40;
        assert_eq!(human_size(tib), "1.0T");
        assert_eq!(human_size(1024 * tib), "1024T");
        assert_eq!(human_size(1024 * tib + 1), "1025T");
        assert_eq!(human_size(u64::MAX), "16777216T");
    }

    #[test]
    fn decimal_lengths() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(1234567), 7);
        assert_eq!(decimal_len(u64::MAX), 20);
    }

    #[test]
    fn relative_phrases() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(2_000_000_000);
        let ago = |s: u64| relative_time(now - Duration::from_secs(s), now);
        assert_eq!(ago(0), "now");
        assert_eq!(ago(1), "1 second ago");
        assert_eq!(ago(45), "45 seconds ago");
        assert_eq!(ago(3 * 3600), "3 hours ago");
        assert_eq!(ago(3 * 86400), "3 days ago");
        assert_eq!(ago(14 * 86400), "2 weeks ago");
        assert_eq!(ago(400 * 86400), "1 year ago");
        assert_eq!(ago(60 * 365 * 86400), "a long while ago");
        assert_eq!(
            relative_time(now + Duration::from_secs(120), now),
            "2 minutes from now"
        );
    }

    #[test]
    fn timestamp_year_rule() -> Result<(), Box<dyn std::error::Error>> {
        let now: SystemTime = Local
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .ok_or("ambiguous time")?
            .into();
        let same_year: SystemTime = Local
            .with_ymd_and_hms(2024, 3, 4, 9, 5, 0)
            .single()
            .ok_or("ambiguous time")?
            .into();
        let last_year: SystemTime = Local
            .with_ymd_and_hms(2021, 11, 15, 9, 5, 0)
            .single()
            .ok_or("ambiguous time")?
            .into();
        assert_eq!(format_timestamp(same_year, now), "Mar  4 09:05");
        assert_eq!(format_timestamp(last_year, now), "Nov 15  2021");
        Ok(())
    }
}
