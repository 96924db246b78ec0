use log::debug;
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::Pixmap;

use crate::error::{CalendarError, Result};

/// usvg resolves absolute units (`in`, `pt`) at this resolution
const SOURCE_DPI: f32 = 96.0;

/// Rasterize `svg_content` to a PNG at `output_path`.
///
/// `dpi` sets the output resolution; `None` keeps usvg's 96 dpi. Text is
/// drawn with the system fonts.
pub fn convert_svg_to_png(svg_content: &str, output_path: &Path, dpi: Option<u32>) -> Result<()> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_str(svg_content, &options)
        .map_err(|e| CalendarError::Render(e.to_string()))?;

    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    debug!("rasterizing at {width}x{height} px");

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| CalendarError::Render(format!("cannot allocate {width}x{height} pixmap")))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(output_path)
        .map_err(|e| CalendarError::Render(e.to_string()))?;
    Ok(())
}
