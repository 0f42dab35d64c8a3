use serde::{Deserialize, Serialize};

use crate::core::Bounds;
use crate::error::{LegendError, LegendResult};
use crate::render::estimate_label_width_px;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> LegendResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LegendError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one rectangle in legend space.
///
/// An invisible rect paints nothing but still participates in hit-testing;
/// the legend uses one per entry to widen the pointer-interactive area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub invisible: bool,
}

impl RectPrimitive {
    #[must_use]
    pub fn filled(bounds: Bounds, fill: Color) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            fill: Some(fill),
            invisible: false,
        }
    }

    #[must_use]
    pub fn invisible(bounds: Bounds) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            fill: None,
            invisible: true,
        }
    }

    #[must_use]
    pub fn bounds(self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn validate(self) -> LegendResult<()> {
        self.bounds().validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the label anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Resolved per-entry label styling from the declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub font_family: String,
    pub font_size_px: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.2, 0.2, 0.2),
            font_family: "sans-serif".to_owned(),
            font_size_px: 12.0,
        }
    }
}

impl TextStyle {
    pub fn validate(&self) -> LegendResult<()> {
        self.color.validate()?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(LegendError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one middle-baseline label in legend space.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
    pub h_align: TextHAlign,
}

impl LabelPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        style: TextStyle,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            style,
            h_align,
        }
    }

    /// Extent of the label derived from the deterministic width estimate,
    /// anchored per `h_align` and vertically centered on `y`.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let width = estimate_label_width_px(&self.text, self.style.font_size_px);
        let height = self.style.font_size_px;
        let left = match self.h_align {
            TextHAlign::Left => self.x,
            TextHAlign::Center => self.x - 0.5 * width,
            TextHAlign::Right => self.x - width,
        };
        Bounds::new(left, self.y - 0.5 * height, width, height)
    }

    pub fn validate(&self) -> LegendResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LegendError::InvalidData(
                "label coordinates must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }
}
