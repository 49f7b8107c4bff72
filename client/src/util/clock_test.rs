use super::*;

use time::Duration;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-02-14 12:00:00 UTC);

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(relative_label(NOW - Duration::seconds(59), NOW), "Just now");
    assert_eq!(relative_label(NOW, NOW), "Just now");
}

#[test]
fn future_reads_as_just_now() {
    assert_eq!(relative_label(NOW + Duration::minutes(5), NOW), "Just now");
}

#[test]
fn minutes() {
    assert_eq!(relative_label(NOW - Duration::minutes(5), NOW), "5 min ago");
    assert_eq!(relative_label(NOW - Duration::minutes(59), NOW), "59 min ago");
}

#[test]
fn hours_pluralize() {
    assert_eq!(relative_label(NOW - Duration::hours(1), NOW), "1 hour ago");
    assert_eq!(relative_label(NOW - Duration::hours(2), NOW), "2 hours ago");
}

#[test]
fn days_pluralize() {
    assert_eq!(relative_label(NOW - Duration::days(1), NOW), "1 day ago");
    assert_eq!(relative_label(NOW - Duration::days(3), NOW), "3 days ago");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_is_after_epoch() {
    assert!(now() > OffsetDateTime::UNIX_EPOCH);
}
