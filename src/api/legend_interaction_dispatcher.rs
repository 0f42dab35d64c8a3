use tracing::trace;

use crate::interaction::{DispatchBus, LegendIntent, PointerEvent};

use super::LegendEntry;

/// Maps a pointer gesture on an entry to its semantic intent and fires it at
/// the bus.
///
/// The intent parameters come from the entry's immutable binding, so repeated
/// dispatches are stable regardless of what the host did in between.
pub fn dispatch_pointer_event(entry: &LegendEntry, event: PointerEvent, bus: &mut dyn DispatchBus) {
    let binding = &entry.binding;
    let intent = match event {
        PointerEvent::Click => LegendIntent::ToggleSelect {
            name: binding.select_name.clone(),
        },
        PointerEvent::Enter => LegendIntent::Highlight {
            series_name: binding.series_name.clone(),
            name: binding.data_name.clone(),
        },
        PointerEvent::Leave => LegendIntent::Downplay {
            series_name: binding.series_name.clone(),
            name: binding.data_name.clone(),
        },
    };
    trace!(entry = %entry.name, ?event, "dispatching legend intent");
    bus.dispatch(intent);
}
