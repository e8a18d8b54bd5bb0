mod common;

use approx::assert_relative_eq;
use suntrack::{sirius_location, CalendarDate, Suntrack, SuntrackError};

use crate::common::assert_horizon_close;

const STARS: &str = "tests/data/stars.csv";

#[test]
fn test_load_catalog_file() {
    let tracker = Suntrack::from_catalog_path(STARS).unwrap();
    let catalog = tracker.catalog();
    assert_eq!(catalog.len(), 4);

    let mut names: Vec<&str> = catalog.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["arcturus", "polaris", "sirius", "vega"]);

    let polaris = catalog.position("polaris").unwrap();
    assert_relative_eq!(polaris.declination, 89.2641111111111, epsilon = 1e-12);
    assert_relative_eq!(polaris.right_ascension, 2.5303055555555556, epsilon = 1e-12);
}

#[test]
fn test_catalog_star_locations() {
    let tracker = Suntrack::from_catalog_path(STARS).unwrap();
    let date = CalendarDate::new(2012, 1, 16, 0, 0, 0.0);

    let vega = tracker.star_location("vega", &date, 40.5, 74.5).unwrap();
    assert_horizon_close(&vega, 5.773, 222.132);

    let sirius = tracker.star_location("sirius", &date, 40.5, 74.5).unwrap();
    assert_eq!(sirius, sirius_location(&date, 40.5, 74.5));
}

#[test]
fn test_polaris_altitude_is_close_to_latitude() {
    let tracker = Suntrack::from_catalog_path(STARS).unwrap();
    for hour in [0, 6, 12, 18] {
        let date = CalendarDate::new(2012, 1, 16, hour, 0, 0.0);
        let h = tracker.star_location("polaris", &date, 40.5, 74.5).unwrap();
        assert!((h.altitude - 40.5).abs() < 1.0, "altitude {}", h.altitude);
    }
}

#[test]
fn test_missing_catalog_file() {
    assert!(matches!(
        Suntrack::from_catalog_path("tests/data/no_such_file.csv"),
        Err(SuntrackError::IoError(_))
    ));
}
