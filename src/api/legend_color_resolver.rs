use crate::core::{SampleParams, SeriesColor};
use crate::render::Color;

/// Determines the display color for one legend entry.
///
/// Unselected entries always take the configured disabled color. A computed
/// series color is sampled once with the first data item's parameters rather
/// than per entry; a panicking callback is not caught here. An absent raw
/// color resolves to `None` and falls through to the backend default.
#[must_use]
pub fn resolve_entry_color(
    raw: Option<&SeriesColor>,
    selected: bool,
    disabled_color: Color,
    sample: Option<&SampleParams>,
) -> Option<Color> {
    if !selected {
        return Some(disabled_color);
    }
    match raw {
        None => None,
        Some(SeriesColor::Fixed(color)) => Some(*color),
        Some(SeriesColor::Computed(callback)) => sample.map(|params| callback(params)),
    }
}
