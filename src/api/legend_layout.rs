use tracing::debug;

use crate::core::Orientation;
use crate::error::{LegendError, LegendResult};
use crate::render::RectPrimitive;

use super::{LegendConfig, LegendNode, LegendScene};

/// Contract implemented by the external list layout engine.
///
/// `layout` mutates entry origins in place; `add_background` sizes the panel
/// from the positioned bounds and therefore must run after `layout`.
pub trait ListLayout {
    fn layout(&self, scene: &mut LegendScene, config: &LegendConfig) -> LegendResult<()>;
    fn add_background(&self, scene: &mut LegendScene, config: &LegendConfig) -> LegendResult<()>;
}

/// Built-in flow layout: entries advance along the main axis separated by
/// `item_gap`, and a layout break starts the next row (horizontal orient) or
/// column (vertical orient).
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowListLayout;

impl ListLayout for FlowListLayout {
    fn layout(&self, scene: &mut LegendScene, config: &LegendConfig) -> LegendResult<()> {
        let mut main = 0.0_f64;
        let mut cross = 0.0_f64;
        let mut line_extent = 0.0_f64;
        let mut rows = 1_usize;

        for node in scene.nodes_mut() {
            match node {
                LegendNode::Break => {
                    cross += line_extent + config.item_gap;
                    main = 0.0;
                    line_extent = 0.0;
                    rows += 1;
                }
                LegendNode::Entry(entry) => {
                    let bounds = entry.group.bounding_rect();
                    // Local bounds can extend left of the origin (right-aligned
                    // labels); anchor the visual left/top edge at the cursor.
                    match config.orient {
                        Orientation::Horizontal => {
                            entry.group.origin = (main - bounds.x, cross - bounds.y);
                            main += bounds.width + config.item_gap;
                            line_extent = line_extent.max(bounds.height);
                        }
                        Orientation::Vertical => {
                            entry.group.origin = (cross - bounds.x, main - bounds.y);
                            main += bounds.height + config.item_gap;
                            line_extent = line_extent.max(bounds.width);
                        }
                    }
                }
            }
        }

        scene.mark_laid_out();
        debug!(
            entries = scene.entry_count(),
            lines = rows,
            "legend flow layout complete"
        );
        Ok(())
    }

    fn add_background(&self, scene: &mut LegendScene, config: &LegendConfig) -> LegendResult<()> {
        if !scene.is_laid_out() {
            return Err(LegendError::BackgroundBeforeLayout);
        }
        let Some(fill) = config.background_fill else {
            scene.set_background(None);
            return Ok(());
        };
        let background = scene
            .content_bounds()
            .map(|bounds| RectPrimitive::filled(bounds.inflated(config.padding), fill));
        scene.set_background(background);
        Ok(())
    }
}
