//! Chart definitions and layout configuration
//!
//! The original report hard-coded its chart table and pixel dimensions as
//! module globals; here both are explicit immutable values passed into the
//! builder, so the pipeline stays reentrant and testable.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two measurement passes of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Cold-cache pass
    First,
    /// Warm-cache pass
    Repeat,
}

impl View {
    /// Lowercase name, matching the upstream JSON encoding
    pub fn name(self) -> &'static str {
        match self {
            View::First => "first",
            View::Repeat => "repeat",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which view(s) a chart reads its values from
///
/// A pair compares the same metric across two views and is only meaningful
/// together with a derivative. Encoded as a bare string or a two-element
/// array, matching the upstream definition shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewSpec {
    /// Read from a single view
    Single(View),
    /// Compare lhs view against rhs view
    Pair(View, View),
}

impl ViewSpec {
    /// Whether this spec addresses two views
    pub fn is_pair(&self) -> bool {
        matches!(self, ViewSpec::Pair(..))
    }
}

/// Which metric key(s) a chart reads
///
/// A pair compares two metrics within the same view and is only meaningful
/// together with a derivative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricSpec {
    /// Read a single metric
    Single(String),
    /// Compare lhs metric against rhs metric
    Pair(String, String),
}

impl MetricSpec {
    /// Whether this spec addresses two metrics
    pub fn is_pair(&self) -> bool {
        matches!(self, MetricSpec::Pair(..))
    }
}

/// A computed comparison between the two extracted operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Derivative {
    /// Signed subtraction, `lhs - rhs`
    Difference,
    /// Rounded ratio, `lhs / rhs * 100`
    Percentage,
}

impl Derivative {
    /// Lowercase name, matching the upstream definition shape
    pub fn name(self) -> &'static str {
        match self {
            Derivative::Difference => "difference",
            Derivative::Percentage => "percentage",
        }
    }
}

impl FromStr for Derivative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "difference" => Ok(Derivative::Difference),
            "percentage" => Ok(Derivative::Percentage),
            other => Err(Error::UnknownDerivative {
                name: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Derivative {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Derivative> for String {
    fn from(derivative: Derivative) -> Self {
        derivative.name().to_string()
    }
}

/// Static description of one report chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    /// View(s) to read values from
    pub view: ViewSpec,

    /// Metric key(s) to read
    pub key: MetricSpec,

    /// Comparison to compute; absent means the plain scalar is plotted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub derivative: Option<Derivative>,

    /// Chart heading
    pub title: String,

    /// Axis label text
    pub label: String,
}

impl ChartDefinition {
    /// Check that the view/key shapes combine meaningfully
    ///
    /// A pair on both axes is ambiguous, and a pair on either axis without a
    /// derivative has nothing to compare for. Both are configuration errors
    /// caught before any value is derived.
    pub fn validate(&self) -> Result<()> {
        if self.view.is_pair() && self.key.is_pair() {
            return Err(self.invalid("view and key cannot both be pairs"));
        }

        if self.derivative.is_none() && (self.view.is_pair() || self.key.is_pair()) {
            return Err(self.invalid("a view or key pair requires a derivative"));
        }

        Ok(())
    }

    pub(crate) fn invalid(&self, message: &str) -> Error {
        Error::InvalidChartDefinition {
            title: self.title.clone(),
            message: message.to_string(),
        }
    }
}

/// Pixel dimensions of the rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layout {
    /// Total chart width, including the margin
    pub chart_width: f64,

    /// Horizontal space reserved for result names
    pub chart_margin: f64,

    /// Vertical space below the last bar
    pub chart_padding: f64,

    /// Height of one bar
    pub bar_height: f64,

    /// Vertical gap between bars
    pub bar_padding: f64,

    /// Horizontal inset of bar value labels
    pub label_offset: f64,
}

impl Layout {
    /// Vertical distance between successive bar origins
    pub fn row_height(&self) -> f64 {
        self.bar_height + self.bar_padding
    }

    /// Horizontal pixels available to the widest bar
    pub fn plot_width(&self) -> f64 {
        self.chart_width - self.chart_margin
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            chart_width: 832.0,
            chart_margin: 140.0,
            chart_padding: 29.0,
            bar_height: 32.0,
            bar_padding: 2.0,
            label_offset: 16.0,
        }
    }
}

/// The six standard report charts, in rendering order
pub fn default_charts() -> Vec<ChartDefinition> {
    vec![
        ChartDefinition {
            view: ViewSpec::Single(View::First),
            key: MetricSpec::Single("speedIndex".to_string()),
            derivative: None,
            title: "Speed index, first view".to_string(),
            label: "First-view speed index (lower is better)".to_string(),
        },
        ChartDefinition {
            view: ViewSpec::Single(View::Repeat),
            key: MetricSpec::Single("speedIndex".to_string()),
            derivative: None,
            title: "Speed index, repeat view".to_string(),
            label: "Repeat-view speed index (lower is better)".to_string(),
        },
        ChartDefinition {
            view: ViewSpec::Pair(View::Repeat, View::First),
            key: MetricSpec::Single("speedIndex".to_string()),
            derivative: Some(Derivative::Percentage),
            title: "Speed index, repeat-view improvement".to_string(),
            label: "Repeat-view speed index as a percentage of first-view (lower is better)"
                .to_string(),
        },
        ChartDefinition {
            view: ViewSpec::Single(View::First),
            key: MetricSpec::Single("firstByte".to_string()),
            derivative: None,
            title: "First byte".to_string(),
            label: "Time to first byte (milliseconds)".to_string(),
        },
        ChartDefinition {
            view: ViewSpec::Single(View::First),
            key: MetricSpec::Pair("startRender".to_string(), "firstByte".to_string()),
            derivative: Some(Derivative::Difference),
            title: "Start render, difference from first byte".to_string(),
            label: "Time from first byte until start render (milliseconds)".to_string(),
        },
        ChartDefinition {
            view: ViewSpec::Single(View::First),
            key: MetricSpec::Pair("load".to_string(), "firstByte".to_string()),
            derivative: Some(Derivative::Difference),
            title: "Load, difference from first byte".to_string(),
            label: "Time from first byte until load event (milliseconds)".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_spec_deserializes_string_or_pair() {
        let single: ViewSpec = serde_json::from_value(json!("first")).unwrap();
        assert_eq!(single, ViewSpec::Single(View::First));

        let pair: ViewSpec = serde_json::from_value(json!(["repeat", "first"])).unwrap();
        assert_eq!(pair, ViewSpec::Pair(View::Repeat, View::First));
    }

    #[test]
    fn test_metric_spec_deserializes_string_or_pair() {
        let single: MetricSpec = serde_json::from_value(json!("speedIndex")).unwrap();
        assert_eq!(single, MetricSpec::Single("speedIndex".to_string()));

        let pair: MetricSpec = serde_json::from_value(json!(["load", "firstByte"])).unwrap();
        assert_eq!(
            pair,
            MetricSpec::Pair("load".to_string(), "firstByte".to_string())
        );
    }

    #[test]
    fn test_unknown_derivative_is_an_error() {
        let err = "median".parse::<Derivative>().unwrap_err();
        assert!(matches!(err, Error::UnknownDerivative { ref name } if name == "median"));

        let parsed: std::result::Result<Derivative, _> = serde_json::from_value(json!("median"));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_pair_pair() {
        let chart = ChartDefinition {
            view: ViewSpec::Pair(View::Repeat, View::First),
            key: MetricSpec::Pair("load".to_string(), "firstByte".to_string()),
            derivative: Some(Derivative::Difference),
            title: "Broken".to_string(),
            label: "Broken".to_string(),
        };

        let err = chart.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidChartDefinition { ref title, .. } if title == "Broken"));
    }

    #[test]
    fn test_validate_rejects_pair_without_derivative() {
        let chart = ChartDefinition {
            view: ViewSpec::Pair(View::Repeat, View::First),
            key: MetricSpec::Single("speedIndex".to_string()),
            derivative: None,
            title: "Broken".to_string(),
            label: "Broken".to_string(),
        };

        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_default_charts_shape() {
        let charts = default_charts();
        assert_eq!(charts.len(), 6);
        assert_eq!(charts[0].title, "Speed index, first view");
        assert_eq!(charts[2].derivative, Some(Derivative::Percentage));
        assert!(charts.iter().all(|chart| chart.validate().is_ok()));
    }

    #[test]
    fn test_layout_defaults() {
        let layout = Layout::default();
        assert_eq!(layout.row_height(), 34.0);
        assert_eq!(layout.plot_width(), 692.0);
    }
}
