use crate::core::Bounds;
use crate::interaction::IntentBinding;
use crate::render::{Color, EntryGroup, RectPrimitive};

/// One drawn legend entry plus its bound interaction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub group: EntryGroup,
    pub binding: IntentBinding,
    pub interactive: bool,
    pub color: Option<Color>,
}

/// Ordered scene node: a drawable entry or a declared layout break.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendNode {
    Entry(LegendEntry),
    Break,
}

/// Assembled output of one reconciliation pass.
///
/// Rebuilt from scratch on every render; holds no state across passes beyond
/// what the caller keeps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendScene {
    nodes: Vec<LegendNode>,
    background: Option<RectPrimitive>,
    laid_out: bool,
}

impl LegendScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_entry(&mut self, entry: LegendEntry) {
        self.nodes.push(LegendNode::Entry(entry));
    }

    pub(crate) fn push_break(&mut self) {
        self.nodes.push(LegendNode::Break);
    }

    #[must_use]
    pub fn nodes(&self) -> &[LegendNode] {
        &self.nodes
    }

    /// Mutable node access for layout engines assigning entry origins.
    pub fn nodes_mut(&mut self) -> &mut [LegendNode] {
        &mut self.nodes
    }

    pub fn entries(&self) -> impl Iterator<Item = &LegendEntry> {
        self.nodes.iter().filter_map(|node| match node {
            LegendNode::Entry(entry) => Some(entry),
            LegendNode::Break => None,
        })
    }

    #[must_use]
    pub fn entry_by_name(&self, name: &str) -> Option<&LegendEntry> {
        self.entries().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Union of positioned entry bounds, `None` while nothing is drawn.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for entry in self.entries() {
            let world = entry.group.world_bounds();
            bounds = Some(match bounds {
                Some(acc) => acc.union(world),
                None => world,
            });
        }
        bounds
    }

    #[must_use]
    pub fn background(&self) -> Option<RectPrimitive> {
        self.background
    }

    pub fn set_background(&mut self, background: Option<RectPrimitive>) {
        self.background = background;
    }

    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Records that positions are final; `add_background` refuses to run
    /// until a layout engine has called this.
    pub fn mark_laid_out(&mut self) {
        self.laid_out = true;
    }
}
