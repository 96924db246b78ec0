use log::info;

use crate::calendar::Calendar;
use crate::error::Result;
use crate::layout::Layout;
use crate::models::{LayoutConfig, PosterConfig};
use crate::picture::{Element, Picture};
use crate::week::Week;

/// Build the complete poster document for `config`.
pub fn build_picture(config: &PosterConfig) -> Result<Picture> {
    config.validate()?;

    let mut picture = Picture::new(config.page.width_in, config.page.height_in);
    let (width, height) = config.page.view_size();
    picture.push(
        Element::rect(0.0, 0.0, width, height)
            .with_attr("fill", "white")
            .with_attr("stroke", "none"),
    );

    let element = match &config.layout {
        LayoutConfig::Spiral(spiral) => {
            let transform = spiral.transform(&config.page)?;
            Calendar::from_config(&transform, spiral)?.element()
        }
        LayoutConfig::Week(week) => {
            let transform = week.transform(&config.page)?;
            Week::from_config(&transform, week)?.element()
        }
    };
    picture.push(element);

    Ok(picture)
}

/// Render `config` to SVG text.
pub fn generate_svg(config: &PosterConfig) -> Result<String> {
    let svg = build_picture(config)?.to_svg_string()?;
    info!("generated {} bytes of SVG", svg.len());
    Ok(svg)
}
