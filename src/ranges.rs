//! Enumeration of sub-ranges along a band.
//!
//! All iterators here are lazy and treat their range as half-open
//! `[start, end)`. An empty or inverted range yields nothing, and a step
//! past the representable range clips to `end` and stops.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

/// A position that can move forward by a step of type `D`.
pub trait Step<D>: Copy + PartialOrd {
    /// `None` when the result is not representable.
    fn checked_step(self, step: D) -> Option<Self>;
}

impl Step<f64> for f64 {
    fn checked_step(self, step: f64) -> Option<f64> {
        Some(self + step).filter(|p| !p.is_infinite())
    }
}

impl Step<TimeDelta> for NaiveDate {
    fn checked_step(self, step: TimeDelta) -> Option<NaiveDate> {
        self.checked_add_signed(step)
    }
}

impl Step<TimeDelta> for NaiveDateTime {
    fn checked_step(self, step: TimeDelta) -> Option<NaiveDateTime> {
        self.checked_add_signed(step)
    }
}

/// First day of the month following `date`.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() < 12 {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    }
}

/// `(start, end)` pairs for each month overlapping `start..end`, clipped to
/// that range.
pub fn months(start: NaiveDate, end: NaiveDate) -> Months {
    Months {
        next: Some(start),
        end,
    }
}

#[derive(Debug, Clone)]
pub struct Months {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Months {
    type Item = (NaiveDate, NaiveDate);

    fn next(&mut self) -> Option<Self::Item> {
        let d = self.next.filter(|d| *d < self.end)?;
        // A month past the representable range simply ends the enumeration.
        let n = next_month(d);
        self.next = n;
        Some((d, n.map_or(self.end, |n| n.min(self.end))))
    }
}

/// Contiguous `(p, min(p + step, end))` pairs covering `start..end`.
///
/// A step that does not move forward yields nothing.
pub fn intervals<P, D>(start: P, end: P, step: D) -> Intervals<P, D>
where
    P: Step<D>,
    D: Copy,
{
    // A step that overflows at once still moves forward.
    let advancing = start.checked_step(step).map_or(true, |p| p > start);
    Intervals {
        next: advancing.then_some(start),
        end,
        step,
    }
}

#[derive(Debug, Clone)]
pub struct Intervals<P, D> {
    next: Option<P>,
    end: P,
    step: D,
}

impl<P, D> Iterator for Intervals<P, D>
where
    P: Step<D>,
    D: Copy,
{
    type Item = (P, P);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next.filter(|p| *p < self.end)?;
        let stepped = start.checked_step(self.step);
        self.next = stepped;
        let end = match stepped {
            Some(p) if p < self.end => p,
            _ => self.end,
        };
        Some((start, end))
    }
}

/// Sample points `start, start + step, ...` below `end`, followed by `end`
/// itself.
///
/// Used where a range is drawn rather than tiled: consecutive points bound
/// the arcs of an edge, and every point gets a tick.
pub fn points<P, D>(start: P, end: P, step: D) -> Points<P, D>
where
    P: Step<D>,
    D: Copy,
{
    Points {
        inner: intervals(start, end, step),
        last: None,
    }
}

#[derive(Debug, Clone)]
pub struct Points<P, D> {
    inner: Intervals<P, D>,
    last: Option<P>,
}

impl<P, D> Iterator for Points<P, D>
where
    P: Step<D>,
    D: Copy,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        match self.inner.next() {
            Some((start, end)) => {
                self.last = Some(end);
                Some(start)
            }
            None => self.last.take(),
        }
    }
}
