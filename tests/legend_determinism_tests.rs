use std::collections::HashSet;

use legend_rs::api::{
    FlowListLayout, LegendConfig, LegendEntryDeclaration, LegendNode, render_legend,
};
use legend_rs::core::{DataItem, DataSet, SelectionMap, SeriesColor, SeriesHandle, SeriesRegistry};
use legend_rs::render::{Color, DefaultSymbolFactory};
use proptest::prelude::*;

const PALETTE: &[&str] = &["a", "b", "c", "x", "y", "", "\n"];

fn fixture_registry() -> SeriesRegistry {
    SeriesRegistry::new()
        .with_series(
            SeriesHandle::new("a")
                .with_color(SeriesColor::Fixed(Color::rgb(0.1, 0.2, 0.9)))
                .with_data(DataSet::new(vec![DataItem::new("first")])),
        )
        .with_series(
            SeriesHandle::new("b")
                .with_color(SeriesColor::Fixed(Color::rgb(0.9, 0.2, 0.1)))
                .with_data(DataSet::new(vec![DataItem::new("first")])),
        )
        .with_series(SeriesHandle::new("pie").with_legend_data(DataSet::new(vec![
            DataItem::new("x").with_color(Color::rgb(0.2, 0.7, 0.3)),
            DataItem::new("y").with_color(Color::rgb(0.7, 0.7, 0.2)),
        ])))
}

fn config_from(names: &[String]) -> LegendConfig {
    LegendConfig::new().with_entries(
        names
            .iter()
            .map(|name| LegendEntryDeclaration::new(name.clone()))
            .collect(),
    )
}

fn selection_from(unselected: &[String]) -> SelectionMap {
    let mut selection = SelectionMap::new();
    for name in unselected {
        selection.set_selected(name.clone(), false);
    }
    selection
}

fn declaration_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::sample::select(PALETTE).prop_map(str::to_owned),
        0..16,
    )
}

proptest! {
    #[test]
    fn consecutive_passes_produce_identical_scenes(
        names in declaration_strategy(),
        unselected in proptest::collection::vec(
            proptest::sample::select(&["a", "b", "x", "y"][..]).prop_map(str::to_owned),
            0..4,
        ),
    ) {
        let config = config_from(&names);
        let registry = fixture_registry();
        let selection = selection_from(&unselected);

        let first = render_legend(
            &config, &registry, &selection, &DefaultSymbolFactory, &FlowListLayout,
        ).expect("first pass");
        let second = render_legend(
            &config, &registry, &selection, &DefaultSymbolFactory, &FlowListLayout,
        ).expect("second pass");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_name_is_drawn_at_most_once(names in declaration_strategy()) {
        let config = config_from(&names);
        let scene = render_legend(
            &config,
            &fixture_registry(),
            &SelectionMap::new(),
            &DefaultSymbolFactory,
            &FlowListLayout,
        ).expect("render");

        let mut seen = HashSet::new();
        for entry in scene.entries() {
            prop_assert!(seen.insert(entry.name.clone()), "duplicate entry {}", entry.name);
        }
    }

    #[test]
    fn drawn_order_follows_declaration_order(names in declaration_strategy()) {
        let config = config_from(&names);
        let scene = render_legend(
            &config,
            &fixture_registry(),
            &SelectionMap::new(),
            &DefaultSymbolFactory,
            &FlowListLayout,
        ).expect("render");

        // First declared occurrence order of the names that got drawn.
        let drawn: HashSet<String> = scene.entries().map(|e| e.name.clone()).collect();
        let mut expected = Vec::new();
        for declaration in &config.entries {
            if !declaration.is_layout_break()
                && drawn.contains(&declaration.name)
                && !expected.contains(&declaration.name)
            {
                expected.push(declaration.name.clone());
            }
        }

        // "a" and "b" resolve in stage A, so their drawn order must equal
        // their first-declaration order.
        let stage_a: Vec<String> = scene
            .entries()
            .map(|e| e.name.clone())
            .filter(|name| name == "a" || name == "b")
            .collect();
        let expected_stage_a: Vec<String> = expected
            .iter()
            .filter(|name| name.as_str() == "a" || name.as_str() == "b")
            .cloned()
            .collect();
        prop_assert_eq!(stage_a, expected_stage_a);
    }

    #[test]
    fn break_tokens_survive_reconciliation_in_count(names in declaration_strategy()) {
        let config = config_from(&names);
        let scene = render_legend(
            &config,
            &fixture_registry(),
            &SelectionMap::new(),
            &DefaultSymbolFactory,
            &FlowListLayout,
        ).expect("render");

        let declared_breaks = config
            .entries
            .iter()
            .filter(|d| d.is_layout_break())
            .count();
        let scene_breaks = scene
            .nodes()
            .iter()
            .filter(|node| matches!(node, LegendNode::Break))
            .count();
        prop_assert_eq!(scene_breaks, declared_breaks);
    }

    #[test]
    fn unselected_entries_always_take_the_disabled_color(
        names in declaration_strategy(),
    ) {
        let config = config_from(&names);
        let selection = SelectionMap::new()
            .with_unselected("a")
            .with_unselected("x");
        let scene = render_legend(
            &config,
            &fixture_registry(),
            &selection,
            &DefaultSymbolFactory,
            &FlowListLayout,
        ).expect("render");

        for entry in scene.entries() {
            if entry.name == "a" || entry.name == "x" {
                prop_assert_eq!(entry.color, Some(config.disabled_color));
            }
        }
    }
}
