//! One week around a ring, with day names in English, hiragana and kanji.

use log::debug;

use crate::color_utils::{color_attr, ShadingColors, DAY_NAME_GRAY};
use crate::error::Result;
use crate::labels::{curved_label, LabelIds};
use crate::layout::Layout;
use crate::models::WeekConfig;
use crate::picture::Element;
use crate::ranges::intervals;
use crate::transform::BandTransform;

pub const ENGLISH_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const HIRAGANA_DAYS: [&str; 7] = [
    "げつようび",
    "かようび",
    "すいようび",
    "もくようび",
    "きんようび",
    "どようび",
    "にちようび",
];

pub const KANJI_DAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Where each script sits within a day: start offset, radius, font size.
const NAME_ROWS: [(&[&str; 7], f64, f64, u32); 3] = [
    (&ENGLISH_DAYS, 0.05, 0.1, 40),
    (&HIRAGANA_DAYS, 0.05, 0.33, 40),
    (&KANJI_DAYS, 0.03, 0.6, 80),
];

/// Days of a `cycle`-long ring, one unit of angle per day, starting Monday.
pub struct Week<'a, T> {
    transform: &'a T,
    cycle: f64,
    labels: bool,
    shading: Option<ShadingColors>,
    ids: LabelIds,
}

impl<'a, T> Week<'a, T>
where
    T: BandTransform<Position = f64>,
{
    pub fn new(transform: &'a T, cycle: f64) -> Self {
        Self {
            transform,
            cycle,
            labels: true,
            shading: None,
            ids: LabelIds::new("arcLabelPath"),
        }
    }

    pub fn from_config(transform: &'a T, config: &WeekConfig) -> Result<Self> {
        let mut week = Self::new(transform, config.cycle).with_labels(config.labels);
        if let Some(shading) = config.shading_colors()? {
            week = week.with_shading(shading);
        }
        Ok(week)
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_shading(mut self, shading: ShadingColors) -> Self {
        self.shading = Some(shading);
        self
    }

    pub fn labels_issued(&self) -> u32 {
        self.ids.issued()
    }

    /// Outlined sections, one per day, filled alternately when shaded.
    pub fn day_sections(&self) -> Element {
        let mut g = Element::group()
            .with_attr("stroke", "black")
            .with_attr("fill", "none")
            .with_attr("stroke-width", 4);

        let mut fills = self.shading.map(|s| s.alternating());
        for (start, end) in intervals(0.0, self.cycle, 1.0) {
            let mut section = Element::path(self.transform.section(start, end, 0.0, 1.0));
            if let Some(color) = fills.as_mut().and_then(Iterator::next) {
                section.set_attr("fill", color_attr(color));
            }
            g.push(section);
        }
        g
    }

    pub fn day_labels(&mut self) -> Element {
        let mut g = Element::group().with_attr("fill", color_attr(DAY_NAME_GRAY));
        let mut defs = Element::defs();
        let mut texts = Vec::new();

        for (i, (start, end)) in intervals(0.0, self.cycle, 1.0).enumerate() {
            for (names, offset, radius, font_size) in NAME_ROWS {
                let label = curved_label(
                    self.transform,
                    &mut self.ids,
                    names[i % names.len()],
                    start + offset,
                    end,
                    radius,
                );
                defs.push(label.guide);
                texts.push(label.text.with_attr("font-size", font_size));
            }
        }

        g.push(defs);
        for text in texts {
            g.push(text);
        }
        g
    }
}

impl<T> Layout for Week<'_, T>
where
    T: BandTransform<Position = f64>,
{
    fn element(&mut self) -> Element {
        let mut g = Element::group();
        g.push(self.day_sections());
        if self.labels {
            g.push(self.day_labels());
        }
        debug!("week issued {} label ids", self.ids.issued());
        g
    }
}
