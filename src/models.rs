use chrono::{NaiveDate, NaiveDateTime, Weekday};
use euclid::default::Point2D;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color_utils::{Shading, ShadingColors};
use crate::error::{CalendarError, Result};
use crate::picture::UNITS_PER_INCH;
use crate::transform::{CircularBand, SpiralTransform};

const SPIRAL_PRESET: &str = include_str!("../presets/spiral.json");
const SOLAR_PRESET: &str = include_str!("../presets/solar.json");
const WEEK_PRESET: &str = include_str!("../presets/week.json");

/// Everything needed to draw one poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterConfig {
    pub page: PageConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_in: f64,
    pub height_in: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutConfig {
    Spiral(SpiralConfig),
    Week(WeekConfig),
}

/// A date range wound around a spiral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralConfig {
    /// Defaults to the center of the page.
    #[serde(default)]
    pub center: Option<Point2D<f64>>,
    /// Date due north of the center at `start_radius`.
    pub reference_start: NaiveDateTime,
    /// One revolution later, due north at `end_radius`.
    pub reference_end: NaiveDateTime,
    pub start_radius: f64,
    pub end_radius: f64,
    pub thickness: f64,
    pub display_start: NaiveDate,
    pub display_end: NaiveDate,
    /// Scale day ticks by modeled day length at this latitude (degrees).
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default = "default_labels")]
    pub labels: bool,
    /// Day drawn with a heavier tick.
    #[serde(default)]
    pub highlight: Option<NaiveDate>,
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
    #[serde(default)]
    pub shading: Shading,
}

/// One week laid out as a ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default)]
    pub center: Option<Point2D<f64>>,
    pub radius: f64,
    pub thickness: f64,
    #[serde(default = "default_cycle")]
    pub cycle: f64,
    #[serde(default = "default_labels")]
    pub labels: bool,
    /// Alternate fills for the days; outlines only when absent.
    #[serde(default)]
    pub shading: Option<Shading>,
}

fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalendarError::NonFiniteDimension { name, value })
    }
}

fn default_labels() -> bool {
    true
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

fn default_cycle() -> f64 {
    7.0
}

impl PageConfig {
    /// Page size in user units (points).
    pub fn view_size(&self) -> (f64, f64) {
        (self.width_in * UNITS_PER_INCH, self.height_in * UNITS_PER_INCH)
    }

    pub fn center(&self) -> Point2D<f64> {
        let (w, h) = self.view_size();
        Point2D::new(w / 2.0, h / 2.0)
    }

    fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width_in) && valid(self.height_in) {
            Ok(())
        } else {
            Err(CalendarError::InvalidPage {
                width: self.width_in,
                height: self.height_in,
            })
        }
    }
}

impl SpiralConfig {
    pub fn transform(&self, page: &PageConfig) -> Result<SpiralTransform> {
        SpiralTransform::new(
            self.center.unwrap_or_else(|| page.center()),
            self.reference_start,
            self.reference_end,
            self.start_radius,
            self.end_radius,
            self.thickness,
        )
    }

    pub fn shading_colors(&self) -> Result<ShadingColors> {
        self.shading.resolve()
    }

    fn validate(&self, page: &PageConfig) -> Result<()> {
        require_finite("start_radius", self.start_radius)?;
        require_finite("end_radius", self.end_radius)?;
        require_finite("thickness", self.thickness)?;
        self.transform(page)?;
        if self.display_end <= self.display_start {
            return Err(CalendarError::InvertedDisplayRange {
                start: self.display_start.to_string(),
                end: self.display_end.to_string(),
            });
        }
        if let Some(latitude) = self.latitude {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(CalendarError::InvalidLatitude(latitude));
            }
        }
        self.shading_colors()?;
        Ok(())
    }
}

impl WeekConfig {
    pub fn transform(&self, page: &PageConfig) -> Result<CircularBand> {
        CircularBand::new(
            self.center.unwrap_or_else(|| page.center()),
            self.radius,
            self.thickness,
            self.cycle,
        )
    }

    pub fn shading_colors(&self) -> Result<Option<ShadingColors>> {
        self.shading.as_ref().map(Shading::resolve).transpose()
    }

    fn validate(&self, page: &PageConfig) -> Result<()> {
        require_finite("radius", self.radius)?;
        require_finite("thickness", self.thickness)?;
        self.transform(page)?;
        self.shading_colors()?;
        Ok(())
    }
}

impl PosterConfig {
    /// Spiral calendar with month, year and date labels.
    pub fn spiral() -> Result<Self> {
        Self::from_json(SPIRAL_PRESET)
    }

    /// Spiral calendar whose day ticks show day length at 45° north.
    pub fn solar() -> Result<Self> {
        Self::from_json(SOLAR_PRESET)
    }

    /// Week ring with English and Japanese day names.
    pub fn week() -> Result<Self> {
        Self::from_json(WEEK_PRESET)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PosterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations that would draw degenerate geometry.
    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;
        match &self.layout {
            LayoutConfig::Spiral(spiral) => spiral.validate(&self.page),
            LayoutConfig::Week(week) => week.validate(&self.page),
        }
    }

    /// File name used when no output path is given.
    pub fn default_output(&self) -> &'static str {
        match self.layout {
            LayoutConfig::Spiral(_) => "calendar.svg",
            LayoutConfig::Week(_) => "week.svg",
        }
    }
}
