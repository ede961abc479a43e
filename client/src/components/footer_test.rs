use super::*;

#[test]
fn epoch_is_1970() {
    assert_eq!(year_from_unix_days(0), 1970);
    assert_eq!(year_from_unix_days(-1), 1969);
}

#[test]
fn year_boundaries() {
    // 2000-01-01 and 2000-12-31 (leap year).
    assert_eq!(year_from_unix_days(10_957), 2000);
    assert_eq!(year_from_unix_days(11_322), 2000);
    assert_eq!(year_from_unix_days(11_323), 2001);
    // 2026-01-01.
    assert_eq!(year_from_unix_days(20_454), 2026);
    assert_eq!(year_from_unix_days(20_453), 2025);
}
