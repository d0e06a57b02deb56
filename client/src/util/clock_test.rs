use super::*;

#[test]
fn clock_time_pads_to_two_digits() {
    assert_eq!(ClockTime::new(9, 5).to_string(), "09:05");
    assert_eq!(ClockTime::new(23, 59).to_string(), "23:59");
}

#[test]
fn clock_time_wraps_out_of_range_values() {
    assert_eq!(ClockTime::new(24, 60), ClockTime::new(0, 0));
}

#[test]
fn clock_time_from_epoch_millis_is_utc_time_of_day() {
    // 1970-01-02T13:07:30Z
    let ms = (24 * 3600 + 13 * 3600 + 7 * 60 + 30) * 1000;
    assert_eq!(ClockTime::from_epoch_millis(ms), ClockTime::new(13, 7));
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}
