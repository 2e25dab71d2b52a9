//! Plot colors.

use crate::render::Color;

/// Visual theme for plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background fill.
    pub background: Color,
    /// Plot area outline.
    pub border: Color,
    /// Dashed grid lines.
    pub grid: Color,
    /// Zero axes.
    pub axis: Color,
    /// Tick marks.
    pub tick: Color,
    /// The curve, both lines and points.
    pub curve: Color,
    /// Labels and summary text.
    pub text: Color,
    /// Inline invalid-input and empty-plot messages.
    pub message: Color,
}

impl Theme {
    /// Create the default (light) theme.
    pub fn new() -> Self {
        Self::light()
    }

    /// Black on white with a teal curve.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            border: Color::BLACK,
            grid: Color::from_rgb8(211, 211, 211),
            axis: Color::BLACK,
            tick: Color::BLACK,
            curve: Color::from_rgb8(0, 128, 128),
            text: Color::BLACK,
            message: Color::from_rgb8(178, 34, 34),
        }
    }

    /// Light strokes on a dark background.
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(24, 26, 31),
            border: Color::from_rgb8(170, 176, 186),
            grid: Color::from_rgb8(62, 66, 74),
            axis: Color::from_rgb8(220, 224, 230),
            tick: Color::from_rgb8(170, 176, 186),
            curve: Color::from_rgb8(64, 200, 200),
            text: Color::from_rgb8(220, 224, 230),
            message: Color::from_rgb8(255, 120, 110),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
