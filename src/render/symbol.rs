use serde::{Deserialize, Serialize};

use crate::core::Bounds;
use crate::render::Color;

/// Glyph shape vocabulary understood by symbol factories.
///
/// `None` is a sentinel: a series whose data symbol is `None` draws no
/// composed secondary glyph in its legend entry. `Custom` carries
/// caller-defined shape names through to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    RoundRect,
    Rect,
    Circle,
    Line,
    None,
    Custom(String),
}

/// Backend-agnostic description of one positioned symbol glyph.
///
/// `fill: None` delegates the paint to the backend's own default.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolGlyph {
    pub kind: SymbolKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
}

impl SymbolGlyph {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// Contract implemented by the external symbol factory collaborator.
///
/// The legend only consumes glyph descriptions; shape geometry and path
/// construction stay behind this seam.
pub trait SymbolFactory {
    fn create_symbol(
        &self,
        kind: &SymbolKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
    ) -> SymbolGlyph;
}

/// Pass-through factory used by tests and headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSymbolFactory;

impl SymbolFactory for DefaultSymbolFactory {
    fn create_symbol(
        &self,
        kind: &SymbolKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
    ) -> SymbolGlyph {
        SymbolGlyph {
            kind: kind.clone(),
            x,
            y,
            width,
            height,
            fill,
        }
    }
}
