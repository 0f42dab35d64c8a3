use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::core::{ResolvedAlign, SelectionState, SeriesColor, SeriesRegistry};
use crate::interaction::IntentBinding;
use crate::render::{SymbolFactory, SymbolKind};

use super::legend_color_resolver::resolve_entry_color;
use super::legend_entry_builder::build_entry_group;
use super::{LegendConfig, LegendEntry, LegendEntryDeclaration, LegendScene};

/// Single deterministic pass reconciling declared legend entries with the
/// live series registry.
///
/// Stage A walks declarations in order and draws one entry per declared name
/// that matches a registered series. Stage B walks legend-data providers in
/// registration order and fills in declared names that no series matched
/// directly. The first writer of a name wins; later sources are skipped.
///
/// Lookup tables live only for the duration of this call.
#[must_use]
pub fn reconcile(
    config: &LegendConfig,
    registry: &SeriesRegistry,
    selection: &dyn SelectionState,
    align: ResolvedAlign,
    factory: &dyn SymbolFactory,
) -> LegendScene {
    let mut declarations: IndexMap<&str, &LegendEntryDeclaration> = IndexMap::new();
    let mut drawn: IndexSet<&str> = IndexSet::new();
    let mut scene = LegendScene::new();

    // Stage A: declared entries against the series registry.
    for declaration in &config.entries {
        if declaration.is_layout_break() {
            scene.push_break();
            continue;
        }
        let name = declaration.name.as_str();
        declarations.insert(name, declaration);

        let Some(series) = registry.series_by_name(name) else {
            trace!(name, "declared legend entry has no matching series");
            continue;
        };
        if drawn.contains(name) {
            trace!(name, "legend entry already drawn, skipping duplicate");
            continue;
        }

        let selected = selection.is_selected(name);
        let sample = series.data().sample_params(0, series.name());
        let color = resolve_entry_color(
            series.visuals().color.as_ref(),
            selected,
            config.disabled_color,
            sample.as_ref(),
        );
        let legend_symbol = series
            .visuals()
            .legend_symbol
            .clone()
            .unwrap_or(SymbolKind::RoundRect);

        let group = build_entry_group(
            name,
            &declaration.text_style,
            &legend_symbol,
            series.visuals().symbol.as_ref(),
            config.item_width,
            config.item_height,
            align,
            color,
            config.select_mode,
            factory,
        );
        scene.push_entry(LegendEntry {
            name: name.to_owned(),
            group,
            binding: IntentBinding::for_series(name),
            interactive: config.select_mode,
            color,
        });
        drawn.insert(name);
    }

    // Stage B: per-item entries from legend-data providers.
    for series in registry.iter() {
        let Some(data) = series.legend_data() else {
            continue;
        };
        for (index, item) in data.iter().enumerate() {
            let item_name = item.name.as_str();
            let Some(declaration) = declarations.get(item_name) else {
                continue;
            };
            if drawn.contains(item_name) {
                trace!(
                    name = item_name,
                    series = series.name(),
                    index,
                    "provider item name already drawn, skipping"
                );
                continue;
            }

            let selected = selection.is_selected(item_name);
            let raw = item.color.map(SeriesColor::Fixed);
            let color =
                resolve_entry_color(raw.as_ref(), selected, config.disabled_color, None);

            let group = build_entry_group(
                item_name,
                &declaration.text_style,
                &SymbolKind::RoundRect,
                None,
                config.item_width,
                config.item_height,
                align,
                color,
                config.select_mode,
                factory,
            );
            scene.push_entry(LegendEntry {
                name: item_name.to_owned(),
                group,
                // Selection targets the item; hover highlight scopes to the
                // owning series so the whole series lights up together.
                binding: IntentBinding::for_data_item(series.name(), item_name),
                interactive: config.select_mode,
                color,
            });
            drawn.insert(item_name);
        }
    }

    debug!(
        declared = declarations.len(),
        drawn = drawn.len(),
        nodes = scene.nodes().len(),
        "legend reconciliation pass complete"
    );
    scene
}
