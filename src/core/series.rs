use std::fmt;
use std::sync::Arc;

use crate::render::{Color, SymbolKind};

/// Derived parameters of one data item, handed to computed series colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleParams {
    pub series_name: String,
    pub data_index: usize,
    pub name: String,
    pub value: Option<f64>,
    pub color: Option<Color>,
}

/// Series-level visual attribute that is either a fixed value or a callback
/// evaluated against one data item's parameters.
#[derive(Clone)]
pub enum SeriesColor {
    Fixed(Color),
    Computed(Arc<dyn Fn(&SampleParams) -> Color + Send + Sync>),
}

impl SeriesColor {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&SampleParams) -> Color + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }
}

impl fmt::Debug for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(color) => f.debug_tuple("Fixed").field(color).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// One item of a series data set, as seen by the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    pub name: String,
    pub value: Option<f64>,
    pub color: Option<Color>,
}

impl DataItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Ordered, read-only snapshot of a series' data items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    items: Vec<DataItem>,
}

impl DataSet {
    #[must_use]
    pub fn new(items: Vec<DataItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataItem> {
        self.items.iter()
    }

    /// Derived parameters for the item at `index`, or `None` past the end.
    #[must_use]
    pub fn sample_params(&self, index: usize, series_name: &str) -> Option<SampleParams> {
        self.items.get(index).map(|item| SampleParams {
            series_name: series_name.to_owned(),
            data_index: index,
            name: item.name.clone(),
            value: item.value,
            color: item.color,
        })
    }
}

/// Typed series visual attributes consulted by the legend.
#[derive(Debug, Clone, Default)]
pub struct SeriesVisuals {
    pub color: Option<SeriesColor>,
    pub symbol: Option<SymbolKind>,
    pub legend_symbol: Option<SymbolKind>,
}

/// Read-only render-time snapshot of one registered chart series.
///
/// Series names are not guaranteed unique across a registry. A series that
/// supplies `legend_data` acts as a legend-data provider: its items produce
/// per-item legend entries instead of one entry for the whole series.
#[derive(Debug, Clone)]
pub struct SeriesHandle {
    name: String,
    visuals: SeriesVisuals,
    data: DataSet,
    legend_data: Option<DataSet>,
}

impl SeriesHandle {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visuals: SeriesVisuals::default(),
            data: DataSet::default(),
            legend_data: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: SeriesColor) -> Self {
        self.visuals.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: SymbolKind) -> Self {
        self.visuals.symbol = Some(symbol);
        self
    }

    #[must_use]
    pub fn with_legend_symbol(mut self, symbol: SymbolKind) -> Self {
        self.visuals.legend_symbol = Some(symbol);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: DataSet) -> Self {
        self.data = data;
        self
    }

    /// Marks this series as a legend-data provider with its own item set.
    #[must_use]
    pub fn with_legend_data(mut self, data: DataSet) -> Self {
        self.legend_data = Some(data);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn visuals(&self) -> &SeriesVisuals {
        &self.visuals
    }

    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    #[must_use]
    pub fn legend_data(&self) -> Option<&DataSet> {
        self.legend_data.as_ref()
    }
}

/// Registration-ordered collection of live series snapshots.
#[derive(Debug, Clone, Default)]
pub struct SeriesRegistry {
    series: Vec<SeriesHandle>,
}

impl SeriesRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, series: SeriesHandle) {
        self.series.push(series);
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesHandle) -> Self {
        self.register(series);
        self
    }

    /// First registered series with the given name, if any.
    #[must_use]
    pub fn series_by_name(&self, name: &str) -> Option<&SeriesHandle> {
        self.series.iter().find(|series| series.name() == name)
    }

    /// Walks all series in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesHandle> {
        self.series.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
