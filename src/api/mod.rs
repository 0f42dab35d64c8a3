mod legend_align_resolver;
mod legend_color_resolver;
mod legend_config;
mod legend_entry_builder;
mod legend_interaction_dispatcher;
mod legend_layout;
mod legend_reconciler;
mod legend_scene;
mod legend_view;

pub use legend_align_resolver::resolve_item_align;
pub use legend_color_resolver::resolve_entry_color;
pub use legend_config::{LegendConfig, LegendEntryDeclaration};
pub use legend_entry_builder::build_entry_group;
pub use legend_interaction_dispatcher::dispatch_pointer_event;
pub use legend_layout::{FlowListLayout, ListLayout};
pub use legend_reconciler::reconcile;
pub use legend_scene::{LegendEntry, LegendNode, LegendScene};
pub use legend_view::render_legend;
