use serde::{Deserialize, Serialize};

use crate::core::{HorizontalPosition, ItemAlign, Orientation};
use crate::error::{LegendError, LegendResult};
use crate::render::{Color, TextStyle};

/// One declared legend entry.
///
/// Declaration order is significant and preserved in the rendered output.
/// An empty name (or the single `"\n"` marker) declares a layout break that
/// forces a new row/column instead of drawing an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntryDeclaration {
    pub name: String,
    #[serde(default)]
    pub text_style: TextStyle,
}

impl LegendEntryDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text_style: TextStyle::default(),
        }
    }

    /// Declares a layout break in place of a drawable entry.
    #[must_use]
    pub fn layout_break() -> Self {
        Self::new("")
    }

    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    #[must_use]
    pub fn is_layout_break(&self) -> bool {
        self.name.is_empty() || self.name == "\n"
    }
}

/// Declarative legend setup supplied by the hosting component framework.
///
/// This type is serializable so host applications can persist/load legend
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default)]
    pub entries: Vec<LegendEntryDeclaration>,
    #[serde(default = "default_select_mode")]
    pub select_mode: bool,
    #[serde(default = "default_item_width")]
    pub item_width: f64,
    #[serde(default = "default_item_height")]
    pub item_height: f64,
    #[serde(default = "default_item_gap")]
    pub item_gap: f64,
    #[serde(default = "default_item_align")]
    pub item_align: ItemAlign,
    #[serde(default = "default_orient")]
    pub orient: Orientation,
    #[serde(default = "default_horizontal_position")]
    pub horizontal_position: HorizontalPosition,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub background_fill: Option<Color>,
    #[serde(default = "default_disabled_color")]
    pub disabled_color: Color,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LegendConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            select_mode: default_select_mode(),
            item_width: default_item_width(),
            item_height: default_item_height(),
            item_gap: default_item_gap(),
            item_align: default_item_align(),
            orient: default_orient(),
            horizontal_position: default_horizontal_position(),
            padding: default_padding(),
            background_fill: None,
            disabled_color: default_disabled_color(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, entry: LegendEntryDeclaration) -> Self {
        self.entries.push(entry);
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<LegendEntryDeclaration>) -> Self {
        self.entries = entries;
        self
    }

    /// Enables or disables selection toggling on entries.
    #[must_use]
    pub fn with_select_mode(mut self, select_mode: bool) -> Self {
        self.select_mode = select_mode;
        self
    }

    /// Sets the symbol swatch size of every entry.
    #[must_use]
    pub fn with_item_size(mut self, width: f64, height: f64) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    #[must_use]
    pub fn with_item_gap(mut self, gap: f64) -> Self {
        self.item_gap = gap;
        self
    }

    #[must_use]
    pub fn with_item_align(mut self, align: ItemAlign) -> Self {
        self.item_align = align;
        self
    }

    #[must_use]
    pub fn with_orient(mut self, orient: Orientation) -> Self {
        self.orient = orient;
        self
    }

    #[must_use]
    pub fn with_horizontal_position(mut self, position: HorizontalPosition) -> Self {
        self.horizontal_position = position;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_background_fill(mut self, fill: Color) -> Self {
        self.background_fill = Some(fill);
        self
    }

    /// Overrides the color applied to unselected entries.
    #[must_use]
    pub fn with_disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = color;
        self
    }

    pub fn validate(&self) -> LegendResult<()> {
        for (name, value) in [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LegendError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [("item_gap", self.item_gap), ("padding", self.padding)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LegendError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        self.disabled_color.validate()?;
        if let Some(fill) = self.background_fill {
            fill.validate()?;
        }
        for entry in &self.entries {
            entry.text_style.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> LegendResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LegendError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> LegendResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LegendError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_select_mode() -> bool {
    true
}

fn default_item_width() -> f64 {
    25.0
}

fn default_item_height() -> f64 {
    14.0
}

fn default_item_gap() -> f64 {
    10.0
}

fn default_item_align() -> ItemAlign {
    ItemAlign::Auto
}

fn default_orient() -> Orientation {
    Orientation::Horizontal
}

fn default_horizontal_position() -> HorizontalPosition {
    HorizontalPosition::Left
}

fn default_padding() -> f64 {
    5.0
}

fn default_disabled_color() -> Color {
    Color::rgb(0.8, 0.8, 0.8)
}
