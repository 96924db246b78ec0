//! A date range drawn along a band: shaded months, edge lines, day ticks and
//! curved month, year and date labels.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use log::debug;

use crate::color_utils::{color_attr, ShadingColors, LABEL_GRAY};
use crate::daylight::day_length;
use crate::error::Result;
use crate::labels::{curved_label, LabelIds};
use crate::layout::Layout;
use crate::math_utils::days_delta;
use crate::models::SpiralConfig;
use crate::picture::Element;
use crate::ranges::{months, points};
use crate::transform::{BandTransform, PathData};

/// Days between the sample points of the band edges.
const EDGE_STEP_DAYS: i64 = 10;

/// Span of day-of-month values valid in every month.
const MONTH_LABEL_FIRST_DAY: u32 = 3;
const MONTH_LABEL_LAST_DAY: u32 = 28;

const MONTH_LABEL_RADIUS: f64 = 1.2;
const YEAR_LABEL_RADIUS: f64 = -0.6;
const WEEK_LABEL_RADIUS: f64 = 0.8;
/// Week labels start this far into their day.
const WEEK_LABEL_OFFSET_DAYS: f64 = 0.3;
const WEEK_LABEL_SPAN_DAYS: i64 = 7;

const SHORT_TICK: (f64, f64) = (0.4, 0.6);
const LABEL_FONT_SIZE: u32 = 40;

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn week_label_span(day: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = midnight(day).checked_add_signed(days_delta(WEEK_LABEL_OFFSET_DAYS))?;
    let end = start.checked_add_signed(TimeDelta::days(WEEK_LABEL_SPAN_DAYS))?;
    Some((start, end))
}

/// Calendar of `start..end` drawn on any date-positioned band.
pub struct Calendar<'a, T> {
    transform: &'a T,
    start: NaiveDate,
    end: NaiveDate,
    latitude: Option<f64>,
    labels: bool,
    highlight: Option<NaiveDate>,
    week_start: Weekday,
    shading: ShadingColors,
    ids: LabelIds,
}

impl<'a, T> Calendar<'a, T>
where
    T: BandTransform<Position = NaiveDateTime>,
{
    /// Plain calendar: gray and white months, short day ticks, no labels.
    pub fn new(transform: &'a T, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            transform,
            start,
            end,
            latitude: None,
            labels: false,
            highlight: None,
            week_start: Weekday::Mon,
            shading: ShadingColors::default(),
            ids: LabelIds::new("spiralLabelPath"),
        }
    }

    pub fn from_config(transform: &'a T, config: &SpiralConfig) -> Result<Self> {
        let mut calendar = Self::new(transform, config.display_start, config.display_end)
            .with_labels(config.labels)
            .with_week_start(config.week_start)
            .with_shading(config.shading_colors()?);
        if let Some(latitude) = config.latitude {
            calendar = calendar.with_latitude(latitude);
        }
        if let Some(day) = config.highlight {
            calendar = calendar.with_highlight(day);
        }
        Ok(calendar)
    }

    /// Size day ticks by modeled day length at `latitude` degrees.
    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Draw text labels. This covers the month and year names and also the
    /// day-of-month numbers on each week start; without it the calendar
    /// carries no text at all.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_highlight(mut self, day: NaiveDate) -> Self {
        self.highlight = Some(day);
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_shading(mut self, shading: ShadingColors) -> Self {
        self.shading = shading;
        self
    }

    /// Number of label ids handed out so far.
    pub fn labels_issued(&self) -> u32 {
        self.ids.issued()
    }

    /// Alternating backgrounds for the months, across the full band.
    pub fn month_sections(&self) -> Element {
        let mut g = Element::group();
        let sections = months(self.start, self.end).zip(self.shading.alternating());
        for ((start, end), color) in sections {
            let d = self.transform.section(midnight(start), midnight(end), 0.0, 1.0);
            g.push(
                Element::path(d)
                    .with_attr("stroke", "none")
                    .with_attr("fill", color_attr(color)),
            );
        }
        debug!("shaded {} month sections", g.children().count());
        g
    }

    /// Month names outside the band, plus the year inside it at each year's
    /// first month.
    pub fn month_labels(&mut self) -> Element {
        let mut g = Element::group()
            .with_attr("fill", color_attr(LABEL_GRAY))
            .with_attr("font-size", LABEL_FONT_SIZE);
        let mut defs = Element::defs();
        let mut texts = Vec::new();

        let mut done_year = None;
        for (month_start, _) in months(self.start, self.end) {
            // Stretch the label over the whole month, whatever part of it
            // is displayed.
            let (Some(start), Some(end)) = (
                month_start.with_day(MONTH_LABEL_FIRST_DAY),
                month_start.with_day(MONTH_LABEL_LAST_DAY),
            ) else {
                continue;
            };
            let (start_dt, end_dt) = (midnight(start), midnight(end));

            let name = start.format("%B").to_string();
            let label = curved_label(
                self.transform,
                &mut self.ids,
                &name,
                start_dt,
                end_dt,
                MONTH_LABEL_RADIUS,
            );
            defs.push(label.guide);
            texts.push(label.text);

            if done_year != Some(start.year()) {
                done_year = Some(start.year());
                let year = start.format("%Y").to_string();
                let label = curved_label(
                    self.transform,
                    &mut self.ids,
                    &year,
                    start_dt,
                    end_dt,
                    YEAR_LABEL_RADIUS,
                );
                defs.push(label.guide);
                texts.push(label.text);
            }
        }

        g.push(defs);
        for text in texts {
            g.push(text);
        }
        g
    }

    /// Edge of the band at `radius`, as arcs between points ten days apart.
    pub fn band_edge(&self, radius: f64) -> Option<Element> {
        let step = TimeDelta::days(EDGE_STEP_DAYS);
        let mut days = points(self.start, self.end, step).map(midnight);
        let first = days.next()?;
        let mut d: PathData = self.transform.move_to(first, radius);
        let mut prev = first;
        for t in days {
            d += self.transform.segment(prev, t, radius);
            prev = t;
        }
        Some(Element::path(d))
    }

    /// Tick for one day: full width on the first day of the week, otherwise
    /// short or sized by day length.
    pub fn day_tick(&self, day: NaiveDate) -> Element {
        let position = midnight(day);
        let d = if day.weekday() == self.week_start {
            self.transform.radial(position, 0.0, 1.0)
        } else {
            let (r1, r2) = match self.latitude {
                Some(latitude) => {
                    let half = day_length(day, latitude) / 2.0;
                    (0.5 - half, 0.5 + half)
                }
                None => SHORT_TICK,
            };
            self.transform.radial(position, r1, r2)
        };

        let mut tick = Element::path(d);
        if self.highlight == Some(day) {
            tick.set_attr("stroke-width", 4);
        }
        tick
    }

    /// Band edges, day ticks and day-of-month labels on each week start.
    pub fn frame(&mut self) -> Element {
        let mut f = Element::group()
            .with_attr("fill", "none")
            .with_attr("stroke", "black")
            .with_attr("stroke-width", 1);

        for radius in [0.0, 1.0] {
            if let Some(edge) = self.band_edge(radius) {
                f.push(edge);
            }
        }

        let mut defs = Element::defs();
        let mut body = Vec::new();
        for day in points(self.start, self.end, TimeDelta::days(1)) {
            body.push(self.day_tick(day));

            if self.labels && day.weekday() == self.week_start {
                // Skip labels that would run past the last representable date.
                let Some((label_start, label_end)) = week_label_span(day) else {
                    continue;
                };
                let text = format!(" {}", day.day());
                let label = curved_label(
                    self.transform,
                    &mut self.ids,
                    &text,
                    label_start,
                    label_end,
                    WEEK_LABEL_RADIUS,
                );
                defs.push(label.guide);
                body.push(label.text);
            }
        }

        f.push(defs);
        for element in body {
            f.push(element);
        }
        f
    }
}

impl<T> Layout for Calendar<'_, T>
where
    T: BandTransform<Position = NaiveDateTime>,
{
    fn element(&mut self) -> Element {
        let mut g = Element::group();
        g.push(self.month_sections());
        if self.labels {
            g.push(self.month_labels());
        }
        g.push(self.frame());
        debug!("calendar issued {} label ids", self.ids.issued());
        g
    }
}
