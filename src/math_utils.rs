/// Numeric helpers shared by the transforms and layouts
use chrono::TimeDelta;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Proportion `p` of the way from `x1` to `x2`
///
/// `p = 0` yields `x1` and `p = 1` yields `x2`. Values outside `[0, 1]`
/// extrapolate along the same line.
pub fn interp<T>(x1: T, x2: T, p: T) -> T
where
    T: num_traits::Float,
{
    x1 + p * (x2 - x1)
}

/// Length of `delta` in days, keeping the fractional part
pub fn fractional_days(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// A `TimeDelta` spanning `days` days, rounded to the millisecond
pub fn days_delta(days: f64) -> TimeDelta {
    TimeDelta::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

/// Format a coordinate pair the way path commands expect it
pub fn fmt_xy(x: f64, y: f64) -> String {
    format!("{x:.1} {y:.1}")
}
