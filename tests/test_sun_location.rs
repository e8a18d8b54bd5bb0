mod common;

use suntrack::{sun_location, CalendarDate, Suntrack};

use crate::common::assert_horizon_close;

#[test]
fn test_somerset_nj() {
    let date = CalendarDate::new(2012, 9, 7, 19, 0, 0.0);
    assert_horizon_close(&sun_location(&date, 40.5, 74.5), 45.453, 47.026);
}

#[test]
fn test_miami_fl() {
    let date = CalendarDate::new(2012, 9, 7, 19, 30, 0.0);
    assert_horizon_close(&sun_location(&date, 25.76, 80.21), 52.751, 63.075);
}

#[test]
fn test_san_francisco() {
    let date = CalendarDate::new(2012, 9, 7, 19, 45, 0.0);
    assert_horizon_close(&sun_location(&date, 37.766, 122.42), 57.513, 10.446);
}

#[test]
fn test_facade_matches_free_function() {
    let tracker = Suntrack::new();
    let date: CalendarDate = "2012-09-07T19:00:00".parse().unwrap();
    assert_eq!(
        tracker.sun_location(&date, 40.5, 74.5),
        sun_location(&date, 40.5, 74.5)
    );
}
