pub mod selection;
pub mod series;
pub mod types;

pub use selection::{SelectionMap, SelectionState};
pub use series::{
    DataItem, DataSet, SampleParams, SeriesColor, SeriesHandle, SeriesRegistry, SeriesVisuals,
};
pub use types::{Bounds, HorizontalPosition, ItemAlign, Orientation, ResolvedAlign};
