mod common;

use suntrack::{sirius_location, CalendarDate};

use crate::common::assert_horizon_close;

#[test]
fn test_somerset_nj_midnight() {
    let date = CalendarDate::new(2012, 1, 16, 0, 0, 0.0);
    assert_horizon_close(&sirius_location(&date, 40.5, 74.5), 9.598, 238.104);
}

#[test]
fn test_somerset_nj_4am() {
    let date = CalendarDate::new(2012, 1, 16, 4, 0, 0.0);
    assert_horizon_close(&sirius_location(&date, 40.5, 74.5), 32.765, 0.885);
}
