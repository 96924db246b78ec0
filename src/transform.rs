//! Coordinate transforms from band coordinates to page coordinates.
//!
//! A band coordinate is a pair `(position, radius)`:
//!
//! - `position` runs along the band. For a [`SpiralTransform`] it is a date
//!   and time; for a [`CircularBand`] it is an angle in `[0, cycle)`.
//! - `radius` runs across the band: 0 is the inner edge, 1 the outer edge.
//!   Values outside `[0, 1]` place things inboard or outboard of the band and
//!   are never clamped.
//!
//! Position 0 of a revolution sits due north of the center and increasing
//! positions travel clockwise.
//!
//! Besides points, transforms emit SVG path commands. Arcs are circle arcs
//! standing in for pieces of spiral, which is good enough as long as the span
//! of one arc is small next to its radius.

use chrono::NaiveDateTime;
use euclid::default::Point2D;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{CalendarError, Result};
use crate::math_utils::{fmt_xy, fractional_days, interp};

/// A fragment of SVG path data.
///
/// Fragments compose by concatenation. Every command after the first carries
/// its own leading space, so `a + b` is always well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData(String);

impl PathData {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Command letters in order, e.g. `['M', 'A', 'L', 'A', 'Z']`
    pub fn commands(&self) -> Vec<char> {
        self.0.chars().filter(|c| c.is_ascii_alphabetic()).collect()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PathData> for String {
    fn from(path: PathData) -> Self {
        path.0
    }
}

impl Add for PathData {
    type Output = PathData;

    fn add(mut self, rhs: PathData) -> PathData {
        self.0.push_str(&rhs.0);
        self
    }
}

impl AddAssign for PathData {
    fn add_assign(&mut self, rhs: PathData) {
        self.0.push_str(&rhs.0);
    }
}

/// Mapping from band coordinates to page coordinates.
///
/// Implementors supply the proportion of a revolution and the distance from
/// the center; the path commands are derived from those.
pub trait BandTransform {
    type Position: Copy + PartialOrd;

    fn center(&self) -> Point2D<f64>;

    /// Revolutions travelled at `position` (1.0 is one full circuit).
    fn proportion(&self, position: Self::Position) -> f64;

    /// Distance from the center of `(position, radius)`, in user units.
    fn pixel_radius(&self, position: Self::Position, radius: f64) -> f64;

    /// Position halfway between `a` and `b`.
    fn midpoint(&self, a: Self::Position, b: Self::Position) -> Self::Position;

    fn to_point(&self, position: Self::Position, radius: f64) -> Point2D<f64> {
        let c = self.center();
        let angle = self.proportion(position) * 2.0 * PI;
        let r = self.pixel_radius(position, radius);
        Point2D::new(c.x + angle.sin() * r, c.y - angle.cos() * r)
    }

    /// Move to `(position, radius)`. No leading space.
    fn move_to(&self, position: Self::Position, radius: f64) -> PathData {
        let p = self.to_point(position, radius);
        PathData(format!("M {}", fmt_xy(p.x, p.y)))
    }

    /// Straight line from the current point to `(position, radius)`.
    fn line_to(&self, position: Self::Position, radius: f64) -> PathData {
        let p = self.to_point(position, radius);
        PathData(format!(" L {}", fmt_xy(p.x, p.y)))
    }

    /// Arc from `(a, radius)` to `(b, radius)`, assuming the current point is
    /// already `(a, radius)`.
    ///
    /// The arc is a circle arc whose radius is the band radius at the middle
    /// of the span. Sweep is clockwise only when `b` lies ahead of `a`, so a
    /// zero-length span gets sweep 0.
    fn segment(&self, a: Self::Position, b: Self::Position, radius: f64) -> PathData {
        let rpx = self.pixel_radius(self.midpoint(a, b), radius);
        let sweep = u8::from(self.proportion(b) > self.proportion(a));
        let end = self.to_point(b, radius);
        PathData(format!(
            " A {rpx:.1} {rpx:.1} 0 0 {sweep} {}",
            fmt_xy(end.x, end.y)
        ))
    }

    /// Closed region from `a` to `b` between radii `r1` and `r2`.
    fn section(&self, a: Self::Position, b: Self::Position, r1: f64, r2: f64) -> PathData {
        self.move_to(a, r1)
            + self.segment(a, b, r1)
            + self.line_to(b, r2)
            + self.segment(b, a, r2)
            + PathData(" Z".to_string())
    }

    /// Straight line at `position` from radius `r1` to `r2`.
    fn radial(&self, position: Self::Position, r1: f64, r2: f64) -> PathData {
        self.move_to(position, r1) + self.line_to(position, r2)
    }
}

/// Dates wound around a spiral.
///
/// `(reference_start, 0)` lies `start_radius` units due north of the center
/// and `(reference_end, 0)` lies `end_radius` units due north, one revolution
/// later. Radius 1 is `thickness` units further out than radius 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralTransform {
    center: Point2D<f64>,
    reference_start: NaiveDateTime,
    reference_end: NaiveDateTime,
    revolution_days: f64,
    start_radius: f64,
    end_radius: f64,
    thickness: f64,
}

impl SpiralTransform {
    pub fn new(
        center: Point2D<f64>,
        reference_start: NaiveDateTime,
        reference_end: NaiveDateTime,
        start_radius: f64,
        end_radius: f64,
        thickness: f64,
    ) -> Result<Self> {
        // Spans shorter than the millisecond resolution count as empty.
        let revolution_days = fractional_days(reference_end - reference_start);
        if !(revolution_days > 0.0) {
            return Err(CalendarError::DegenerateReferenceRange {
                start: reference_start.to_string(),
                end: reference_end.to_string(),
            });
        }
        Ok(Self {
            center,
            reference_start,
            reference_end,
            revolution_days,
            start_radius,
            end_radius,
            thickness,
        })
    }

    pub fn reference_start(&self) -> NaiveDateTime {
        self.reference_start
    }

    pub fn reference_end(&self) -> NaiveDateTime {
        self.reference_end
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }
}

impl BandTransform for SpiralTransform {
    type Position = NaiveDateTime;

    fn center(&self) -> Point2D<f64> {
        self.center
    }

    fn proportion(&self, position: NaiveDateTime) -> f64 {
        fractional_days(position - self.reference_start) / self.revolution_days
    }

    fn pixel_radius(&self, position: NaiveDateTime, radius: f64) -> f64 {
        let p = self.proportion(position);
        interp(self.start_radius, self.end_radius, p) + interp(0.0, self.thickness, radius)
    }

    fn midpoint(&self, a: NaiveDateTime, b: NaiveDateTime) -> NaiveDateTime {
        a + (b - a) / 2
    }
}

/// Angles laid around a ring of constant radius.
///
/// Angles run from 0 to `cycle`; both ends are the top of the ring. The inner
/// edge is `radius` units from the center and the outer edge `thickness`
/// units further.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularBand {
    center: Point2D<f64>,
    radius: f64,
    thickness: f64,
    cycle: f64,
}

impl CircularBand {
    pub fn new(center: Point2D<f64>, radius: f64, thickness: f64, cycle: f64) -> Result<Self> {
        if !(cycle.is_finite() && cycle > 0.0) {
            return Err(CalendarError::InvalidCycle(cycle));
        }
        Ok(Self {
            center,
            radius,
            thickness,
            cycle,
        })
    }

    pub fn cycle(&self) -> f64 {
        self.cycle
    }
}

impl BandTransform for CircularBand {
    type Position = f64;

    fn center(&self) -> Point2D<f64> {
        self.center
    }

    fn proportion(&self, angle: f64) -> f64 {
        angle / self.cycle
    }

    fn pixel_radius(&self, _angle: f64, radius: f64) -> f64 {
        interp(self.radius, self.radius + self.thickness, radius)
    }

    fn midpoint(&self, a: f64, b: f64) -> f64 {
        a + (b - a) / 2.0
    }
}
