//! Text that follows the band.
//!
//! A label is two elements: a guide path stored in a `<defs>` under a fresh
//! id, and a `<text>` whose `<textPath>` refers to that id. Callers decide
//! where each of the two goes.

use crate::picture::Element;
use crate::transform::BandTransform;

/// Identifier source for label guide paths.
///
/// Ids are `"<prefix>-<n>"` with `n` counting up from 1. Each layout owns
/// its own counter; ids are unique within one layout.
#[derive(Debug, Clone)]
pub struct LabelIds {
    prefix: &'static str,
    issued: u32,
}

impl LabelIds {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, issued: 0 }
    }

    pub fn fresh(&mut self) -> String {
        self.issued += 1;
        format!("{}-{}", self.prefix, self.issued)
    }

    pub fn issued(&self) -> u32 {
        self.issued
    }
}

/// Guide path and text of one label, ready to be placed in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvedLabel {
    /// Belongs in a `<defs>`.
    pub guide: Element,
    pub text: Element,
}

/// Display `text` along the band from `start` to `end` at `radius`.
///
/// Guides carry a visible stroke, which shows only if they are moved out of
/// the defs.
pub fn curved_label<T: BandTransform>(
    transform: &T,
    ids: &mut LabelIds,
    text: &str,
    start: T::Position,
    end: T::Position,
    radius: f64,
) -> CurvedLabel {
    let id = ids.fresh();
    let guide = transform.move_to(start, radius) + transform.segment(start, end, radius);
    let guide = Element::path(guide)
        .with_attr("id", &id)
        .with_attr("stroke", "black")
        .with_attr("fill", "none")
        .with_attr("stroke-width", 4);

    CurvedLabel {
        guide,
        text: Element::text_on_path(text, &id),
    }
}
