mod group;
mod primitives;
mod symbol;
mod text_metrics;

pub use group::{EntryChild, EntryElement, EntryGroup};
pub use primitives::{Color, LabelPrimitive, RectPrimitive, TextHAlign, TextStyle};
pub use symbol::{DefaultSymbolFactory, SymbolFactory, SymbolGlyph, SymbolKind};
pub(crate) use text_metrics::estimate_label_width_px;
