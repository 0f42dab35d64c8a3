use crate::core::{SelectionState, SeriesRegistry};
use crate::error::LegendResult;
use crate::render::SymbolFactory;

use super::legend_align_resolver::resolve_item_align;
use super::legend_reconciler::reconcile;
use super::{LegendConfig, LegendScene, ListLayout};

/// Runs one full legend render pass: validate, reconcile, lay out, background.
///
/// The pass is synchronous and stateless; every call rebuilds the scene and
/// its interaction bindings from scratch, so there is nothing to invalidate
/// between renders.
pub fn render_legend(
    config: &LegendConfig,
    registry: &SeriesRegistry,
    selection: &dyn SelectionState,
    factory: &dyn SymbolFactory,
    layout: &dyn ListLayout,
) -> LegendResult<LegendScene> {
    config.validate()?;
    let align = resolve_item_align(config.item_align, config.horizontal_position, config.orient);
    let mut scene = reconcile(config, registry, selection, align, factory);
    layout.layout(&mut scene, config)?;
    // Background must see final positions, so it runs strictly after layout.
    layout.add_background(&mut scene, config)?;
    Ok(scene)
}
