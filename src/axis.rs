//! Axis configuration, integer tick generation, and label formatting.

use std::sync::Arc;

use crate::view::Range;

/// Ticks per axis before thinning kicks in.
pub const MAX_TICKS: usize = 200;

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Plain integer formatting.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format!("{value}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Axis configuration.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    title: Option<String>,
    show_tick_labels: bool,
    formatter: AxisFormatter,
    label_size: f32,
}

impl AxisConfig {
    /// Create an axis with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Remove the axis title.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Draw numeric labels next to tick marks.
    pub fn with_tick_labels(mut self, show: bool) -> Self {
        self.show_tick_labels = show;
        self
    }

    /// Set the axis formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the label font size in pixels.
    pub fn with_label_size(mut self, size: f32) -> Self {
        self.label_size = size;
        self
    }

    /// Access the axis title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether tick labels are drawn.
    pub fn show_tick_labels(&self) -> bool {
        self.show_tick_labels
    }

    /// Access the formatter.
    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }

    /// Label font size in pixels.
    pub fn label_size(&self) -> f32 {
        self.label_size
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_tick_labels: false,
            formatter: AxisFormatter::default(),
            label_size: 11.0,
        }
    }
}

/// A tick position with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data value.
    pub value: f64,
    /// Formatted label (empty when labels are off).
    pub label: String,
}

/// Integer ticks inside `range`.
///
/// Every integer from `ceil(min)` to `floor(max)` is ticked unless that would
/// exceed `max_ticks`; then only multiples of `ceil(count / max_ticks)` are.
pub fn integer_ticks(range: Range, axis: &AxisConfig, max_ticks: usize) -> Vec<Tick> {
    let Some((first, last)) = range.integer_span() else {
        return Vec::new();
    };
    let count = (last as i128 - first as i128 + 1) as u128;
    let max_ticks = max_ticks.max(1) as u128;
    let stride = count.div_ceil(max_ticks).max(1) as i128;
    let start = (first as i128).div_euclid(stride) * stride;
    let start = if start < first as i128 {
        start + stride
    } else {
        start
    };

    let mut ticks = Vec::new();
    let mut value = start;
    while value <= last as i128 {
        let value_f = value as f64;
        let label = if axis.show_tick_labels() {
            axis.formatter().format(value_f)
        } else {
            String::new()
        };
        ticks.push(Tick {
            value: value_f,
            label,
        });
        value += stride;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(ticks: &[Tick]) -> Vec<f64> {
        ticks.iter().map(|tick| tick.value).collect()
    }

    #[test]
    fn every_integer_in_range() {
        let ticks = integer_ticks(Range::new(-1.3, 2.7), &AxisConfig::default(), MAX_TICKS);
        assert_eq!(values(&ticks), vec![-1.0, 0.0, 1.0, 2.0]);
        assert!(ticks.iter().all(|tick| tick.label.is_empty()));
    }

    #[test]
    fn no_integer_no_ticks() {
        let ticks = integer_ticks(Range::new(0.08, 1.22), &AxisConfig::default(), MAX_TICKS);
        assert_eq!(values(&ticks), vec![1.0]);
        let ticks = integer_ticks(Range::new(0.1, 0.9), &AxisConfig::default(), MAX_TICKS);
        assert!(ticks.is_empty());
    }

    #[test]
    fn huge_range_is_thinned() {
        let ticks = integer_ticks(Range::new(-3.0, 5_000.0), &AxisConfig::default(), MAX_TICKS);
        assert!(ticks.len() <= MAX_TICKS + 1);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[1].value, 26.0);
        assert!(ticks.iter().all(|tick| tick.value % 26.0 == 0.0));
    }

    #[test]
    fn labels_use_formatter() {
        let axis = AxisConfig::titled("y")
            .with_tick_labels(true)
            .with_formatter(AxisFormatter::Custom(Arc::new(|v| format!("{v:+.0}"))));
        let ticks = integer_ticks(Range::new(-1.0, 1.0), &axis, MAX_TICKS);
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["-1", "+0", "+1"]);
    }

    #[test]
    fn default_formatter_prints_integers_plainly() {
        assert_eq!(AxisFormatter::Default.format(3.0), "3");
        assert_eq!(AxisFormatter::Default.format(-12.0), "-12");
    }
}
