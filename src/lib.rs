pub mod calendar;
pub mod color_utils;
pub mod converter;
pub mod daylight;
pub mod error;
pub mod labels;
pub mod layout;
pub mod logging;
pub mod math_utils;
pub mod models;
pub mod picture;
pub mod ranges;
pub mod renderer;
pub mod transform;
pub mod week;

pub use calendar::Calendar;
pub use converter::convert_svg_to_png;
pub use error::CalendarError;
pub use layout::Layout;
pub use models::{LayoutConfig, PageConfig, PosterConfig, SpiralConfig, WeekConfig};
pub use renderer::{build_picture, generate_svg};
pub use transform::{BandTransform, CircularBand, PathData, SpiralTransform};
pub use week::Week;
