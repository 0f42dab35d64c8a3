use crate::core::{HorizontalPosition, ItemAlign, Orientation, ResolvedAlign};

/// Resolves the declared item alignment before entries are built.
///
/// `Auto` becomes `Right` only for a right-positioned vertical legend, where
/// labels read toward the panel edge; every other combination reads left.
#[must_use]
pub fn resolve_item_align(
    align: ItemAlign,
    position: HorizontalPosition,
    orient: Orientation,
) -> ResolvedAlign {
    match align {
        ItemAlign::Left => ResolvedAlign::Left,
        ItemAlign::Right => ResolvedAlign::Right,
        ItemAlign::Auto => {
            if position == HorizontalPosition::Right && orient == Orientation::Vertical {
                ResolvedAlign::Right
            } else {
                ResolvedAlign::Left
            }
        }
    }
}
