use crate::core::ResolvedAlign;
use crate::render::{
    Color, EntryElement, EntryGroup, LabelPrimitive, RectPrimitive, SymbolFactory, SymbolKind,
    TextHAlign, TextStyle,
};

/// Gap between the symbol swatch and the label anchor.
pub(crate) const LABEL_GAP_PX: f64 = 5.0;

/// Composed secondary glyph height as a fraction of the item height.
const COMPOSED_SYMBOL_RATIO: f64 = 0.8;

/// Synthesizes one legend entry's visual group.
///
/// The group contains, in paint order: the primary symbol swatch at local
/// origin, an optional composed secondary glyph centered in the swatch, the
/// label, and finally an invisible hit rect covering everything before it.
/// When `interactive` is false every child is silenced so pointer events fall
/// through to the entry's own handlers only.
///
/// `align` must already be resolved; `ItemAlign::Auto` is the caller's
/// problem (see `resolve_item_align`).
#[must_use]
pub fn build_entry_group(
    name: &str,
    text_style: &TextStyle,
    legend_symbol: &SymbolKind,
    data_symbol: Option<&SymbolKind>,
    item_width: f64,
    item_height: f64,
    align: ResolvedAlign,
    color: Option<Color>,
    interactive: bool,
    factory: &dyn SymbolFactory,
) -> EntryGroup {
    let mut group = EntryGroup::new();

    group.add(EntryElement::Symbol(factory.create_symbol(
        legend_symbol,
        0.0,
        0.0,
        item_width,
        item_height,
        color,
    )));

    // Compose e.g. a line-series glyph over its swatch background.
    if let Some(symbol) = data_symbol {
        if symbol != legend_symbol && *symbol != SymbolKind::None {
            let size = item_height * COMPOSED_SYMBOL_RATIO;
            group.add(EntryElement::Symbol(factory.create_symbol(
                symbol,
                (item_width - size) / 2.0,
                (item_height - size) / 2.0,
                size,
                size,
                color,
            )));
        }
    }

    let (label_x, h_align) = match align {
        ResolvedAlign::Left => (item_width + LABEL_GAP_PX, TextHAlign::Left),
        ResolvedAlign::Right => (-LABEL_GAP_PX, TextHAlign::Right),
    };
    group.add(EntryElement::Label(LabelPrimitive::new(
        name,
        label_x,
        item_height / 2.0,
        text_style.clone(),
        h_align,
    )));

    // Widen the pointer-interactive area to symbol + label with no gap.
    let hit_bounds = group.bounding_rect();
    group.add(EntryElement::HitRect(RectPrimitive::invisible(hit_bounds)));

    group.set_silent_children(!interactive);
    group
}
