//! Wall clock access and relative-time labels.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

/// Current time. Uses `Date.now()` in the browser, the system clock elsewhere.
#[must_use]
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Human label for how long ago `then` was, e.g. `"5 min ago"`.
///
/// Timestamps in the future read as "Just now".
#[must_use]
pub fn relative_label(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - then;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();

    if minutes < 1 {
        "Just now".to_owned()
    } else if hours < 1 {
        format!("{minutes} min ago")
    } else if days < 1 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}
