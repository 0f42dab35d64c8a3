use smallvec::SmallVec;

use crate::core::Bounds;
use crate::render::{LabelPrimitive, RectPrimitive, SymbolGlyph};

/// One drawable element of a legend entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryElement {
    Symbol(SymbolGlyph),
    Label(LabelPrimitive),
    HitRect(RectPrimitive),
}

impl EntryElement {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Symbol(glyph) => glyph.bounds(),
            Self::Label(label) => label.bounds(),
            Self::HitRect(rect) => rect.bounds(),
        }
    }
}

/// Element plus its pointer-inertness flag.
///
/// Pointer handlers live on the owning entry, not on elements; silencing the
/// children keeps them from intercepting events meant for the entry itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryChild {
    pub element: EntryElement,
    pub silent: bool,
}

/// Assembled visual group of one legend entry.
///
/// Children are positioned in entry-local space; the layout engine assigns
/// `origin` to place the whole group in panel space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryGroup {
    children: SmallVec<[EntryChild; 4]>,
    pub origin: (f64, f64),
}

impl EntryGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: EntryElement) {
        self.children.push(EntryChild {
            element,
            silent: false,
        });
    }

    #[must_use]
    pub fn children(&self) -> &[EntryChild] {
        &self.children
    }

    /// Union of all child bounds in entry-local space.
    #[must_use]
    pub fn bounding_rect(&self) -> Bounds {
        self.children
            .iter()
            .fold(Bounds::zero(), |acc, child| acc.union(child.element.bounds()))
    }

    /// Local bounds translated by the layout-assigned origin.
    #[must_use]
    pub fn world_bounds(&self) -> Bounds {
        self.bounding_rect().translated(self.origin.0, self.origin.1)
    }

    pub fn set_silent_children(&mut self, silent: bool) {
        for child in &mut self.children {
            child.silent = silent;
        }
    }
}
