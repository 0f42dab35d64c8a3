use legend_rs::api::{
    FlowListLayout, LegendConfig, LegendEntryDeclaration, dispatch_pointer_event, render_legend,
};
use legend_rs::core::{DataItem, DataSet, SelectionMap, SeriesColor, SeriesHandle, SeriesRegistry};
use legend_rs::interaction::{LegendIntent, PointerEvent, RecordingDispatchBus};
use legend_rs::render::{Color, DefaultSymbolFactory};

fn scene_with(registry: &SeriesRegistry, names: &[&str]) -> legend_rs::api::LegendScene {
    let config = LegendConfig::new().with_entries(
        names
            .iter()
            .map(|name| LegendEntryDeclaration::new(*name))
            .collect(),
    );
    render_legend(
        &config,
        registry,
        &SelectionMap::new(),
        &DefaultSymbolFactory,
        &FlowListLayout,
    )
    .expect("render legend")
}

fn whole_series_registry() -> SeriesRegistry {
    SeriesRegistry::new().with_series(
        SeriesHandle::new("sales")
            .with_color(SeriesColor::Fixed(Color::rgb(0.2, 0.6, 0.4)))
            .with_data(DataSet::new(vec![DataItem::new("first")])),
    )
}

fn provider_registry() -> SeriesRegistry {
    SeriesRegistry::new().with_series(SeriesHandle::new("pie").with_legend_data(DataSet::new(
        vec![DataItem::new("slice").with_color(Color::rgb(0.9, 0.5, 0.1))],
    )))
}

#[test]
fn click_emits_toggle_select_with_the_entry_name() {
    let registry = whole_series_registry();
    let scene = scene_with(&registry, &["sales"]);
    let entry = scene.entry_by_name("sales").expect("entry");

    let mut bus = RecordingDispatchBus::new();
    dispatch_pointer_event(entry, PointerEvent::Click, &mut bus);

    assert_eq!(
        bus.intents,
        vec![LegendIntent::ToggleSelect {
            name: "sales".to_owned()
        }]
    );
}

#[test]
fn hover_on_a_series_entry_scopes_to_the_whole_series() {
    let registry = whole_series_registry();
    let scene = scene_with(&registry, &["sales"]);
    let entry = scene.entry_by_name("sales").expect("entry");

    let mut bus = RecordingDispatchBus::new();
    dispatch_pointer_event(entry, PointerEvent::Enter, &mut bus);
    dispatch_pointer_event(entry, PointerEvent::Leave, &mut bus);

    assert_eq!(
        bus.intents,
        vec![
            LegendIntent::Highlight {
                series_name: "sales".to_owned(),
                name: String::new(),
            },
            LegendIntent::Downplay {
                series_name: "sales".to_owned(),
                name: String::new(),
            },
        ]
    );
}

#[test]
fn provider_entry_selects_the_item_but_highlights_the_owning_series() {
    let registry = provider_registry();
    let scene = scene_with(&registry, &["slice"]);
    let entry = scene.entry_by_name("slice").expect("entry");

    let mut bus = RecordingDispatchBus::new();
    dispatch_pointer_event(entry, PointerEvent::Click, &mut bus);
    dispatch_pointer_event(entry, PointerEvent::Enter, &mut bus);
    dispatch_pointer_event(entry, PointerEvent::Leave, &mut bus);

    assert_eq!(
        bus.intents,
        vec![
            LegendIntent::ToggleSelect {
                name: "slice".to_owned()
            },
            LegendIntent::Highlight {
                series_name: "pie".to_owned(),
                name: "slice".to_owned(),
            },
            LegendIntent::Downplay {
                series_name: "pie".to_owned(),
                name: "slice".to_owned(),
            },
        ]
    );
}

#[test]
fn repeated_dispatch_is_stable_across_calls() {
    let registry = whole_series_registry();
    let scene = scene_with(&registry, &["sales"]);
    let entry = scene.entry_by_name("sales").expect("entry");

    let mut first = RecordingDispatchBus::new();
    let mut second = RecordingDispatchBus::new();
    dispatch_pointer_event(entry, PointerEvent::Click, &mut first);
    dispatch_pointer_event(entry, PointerEvent::Click, &mut second);
    assert_eq!(first, second);
}

#[test]
fn select_mode_off_still_dispatches_from_the_entry_itself() {
    let registry = whole_series_registry();
    let config = LegendConfig::new()
        .with_entry(LegendEntryDeclaration::new("sales"))
        .with_select_mode(false);
    let scene = render_legend(
        &config,
        &registry,
        &SelectionMap::new(),
        &DefaultSymbolFactory,
        &FlowListLayout,
    )
    .expect("render legend");
    let entry = scene.entry_by_name("sales").expect("entry");

    // Children are inert so they cannot intercept, but the entry's own
    // handlers remain wired.
    assert!(entry.group.children().iter().all(|child| child.silent));
    let mut bus = RecordingDispatchBus::new();
    dispatch_pointer_event(entry, PointerEvent::Enter, &mut bus);
    assert_eq!(bus.intents.len(), 1);
}
