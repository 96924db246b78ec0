use crate::picture::Element;

/// Something that draws itself as one group of elements.
///
/// Layouts hand out fresh label ids while drawing, hence `&mut self`.
pub trait Layout {
    fn element(&mut self) -> Element;
}
