//! Modeled day length.
//!
//! The model comes from the "length of day" formulas on gandraxa.com. It does
//! not agree exactly with published sunrise/sunset tables.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

/// Tilt of the earth's axis relative to its orbital plane, in degrees.
pub const AXIAL_TILT_DEGREES: f64 = 23.439;

const DAYS_PER_YEAR: f64 = 365.25;

/// Proportion of `date` during which the sun is up at `latitude` degrees.
///
/// 0 means the sun never rises, 1 means it never sets.
pub fn day_length(date: NaiveDate, latitude: f64) -> f64 {
    let axis = AXIAL_TILT_DEGREES.to_radians();

    // Angle between this date and Dec 21 of the same year, treating a year as
    // a full circle. Negative before the solstice.
    let days = i64::from(date.ordinal()) - i64::from(winter_solstice_ordinal(date.year()));
    let date_angle = days as f64 * 2.0 * PI / DAYS_PER_YEAR;

    let m = 1.0 - latitude.to_radians().tan() * (axis * date_angle.cos()).tan();

    // m < 0: the sun never rises; m > 2: it never sets.
    let m = m.clamp(0.0, 2.0);
    (1.0 - m).acos() / PI
}

/// Day of the year of December 21st.
fn winter_solstice_ordinal(year: i32) -> u32 {
    if is_leap_year(year) {
        356
    } else {
        355
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
