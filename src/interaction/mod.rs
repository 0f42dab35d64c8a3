use serde::{Deserialize, Serialize};

/// Pointer gesture observed on one legend entry by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Click,
    Enter,
    Leave,
}

/// Semantic intent emitted toward the host's action bus.
///
/// `Highlight`/`Downplay` carry an empty `name` for whole-series scope;
/// per-item entries carry the owning series plus the item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendIntent {
    ToggleSelect { name: String },
    Highlight { series_name: String, name: String },
    Downplay { series_name: String, name: String },
}

/// Immutable per-entry intent parameters, bound at entry construction time.
///
/// Storing the record on the entry keeps dispatch free of captured loop state;
/// a rebuilt scene rebinds everything from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentBinding {
    pub select_name: String,
    pub series_name: String,
    pub data_name: String,
}

impl IntentBinding {
    /// Binding for a whole-series entry: select, highlight and downplay all
    /// target the series itself.
    #[must_use]
    pub fn for_series(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            select_name: name.clone(),
            series_name: name,
            data_name: String::new(),
        }
    }

    /// Binding for a per-item entry: selection toggles the item, while
    /// highlight and downplay scope to the owning series.
    #[must_use]
    pub fn for_data_item(series_name: impl Into<String>, item_name: impl Into<String>) -> Self {
        let item_name = item_name.into();
        Self {
            select_name: item_name.clone(),
            series_name: series_name.into(),
            data_name: item_name,
        }
    }
}

/// Fire-and-forget sink for legend intents.
///
/// Dispatching never blocks and returns nothing; any re-render caused by an
/// intent happens on a later, independent pass.
pub trait DispatchBus {
    fn dispatch(&mut self, intent: LegendIntent);
}

/// Bus that records intents in order, for tests and headless hosts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingDispatchBus {
    pub intents: Vec<LegendIntent>,
}

impl RecordingDispatchBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DispatchBus for RecordingDispatchBus {
    fn dispatch(&mut self, intent: LegendIntent) {
        self.intents.push(intent);
    }
}
