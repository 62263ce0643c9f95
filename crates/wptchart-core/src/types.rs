//! Core data structures for the wptchart pipeline
//!
//! This module defines the input contract delivered by the upstream result
//! collector and the output contract consumed by the downstream renderer.
//! Both sides serialize with the camelCase field names the original template
//! context uses, so any template engine can be pointed at the document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single named measurement within one view of one test result
///
/// Only `value` participates in derivation and formatting; every other field
/// passes through the pipeline untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Datum {
    /// Raw numeric measurement, typically milliseconds
    pub value: f64,

    /// Descriptive fields carried through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One benchmark run for one tested page and location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Display name of the tested page
    pub name: String,

    /// Free-form classification tag
    #[serde(rename = "type")]
    pub test_type: String,

    /// Cold-cache measurement pass, keyed by metric name
    #[serde(rename = "firstView")]
    pub first_view: BTreeMap<String, Datum>,

    /// Warm-cache measurement pass; may omit keys present in `firstView`
    #[serde(rename = "repeatView", default)]
    pub repeat_view: BTreeMap<String, Datum>,
}

/// Wall-clock boundaries of the benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTimes {
    /// When the first test began
    pub begin: DateTime<Utc>,

    /// When the last test completed
    pub end: DateTime<Utc>,
}

/// The materialized result collection delivered by the upstream collector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    /// Run boundaries
    pub times: RunTimes,

    /// One entry per tested page/location
    pub results: Vec<TestResult>,
}

/// Run metadata accompanying the result collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOptions {
    /// Test location, optionally suffixed with `:userAgent`
    pub location: String,

    /// Connection profile label (e.g. "Cable", "3G")
    pub connection: String,

    /// Number of test operators; must be 0-15 inclusive
    pub count: u8,
}

/// A datum with its value replaced by a display string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDatum {
    /// Digit-grouped rendering of the raw value
    pub value: String,

    /// Descriptive fields carried through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A result row of the report body, with every value formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// Display name of the tested page
    pub name: String,

    /// Free-form classification tag
    #[serde(rename = "type")]
    pub test_type: String,

    /// Formatted cold-cache pass
    #[serde(rename = "firstView")]
    pub first_view: BTreeMap<String, FormattedDatum>,

    /// Formatted warm-cache pass
    #[serde(rename = "repeatView")]
    pub repeat_view: BTreeMap<String, FormattedDatum>,
}

/// One horizontal bar of a built chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Vertical offset in pixels from the chart origin
    pub offset: f64,

    /// Display name of the tested page
    pub name: String,

    /// Free-form classification tag
    #[serde(rename = "type")]
    pub test_type: String,

    /// Bar width in pixels, rounded to 2 decimals when fractional
    pub bar_width: f64,

    /// Formatted value, `%`-suffixed for percentage charts
    pub value: String,

    /// Orientation marker for the value label; empty for outside labels
    pub text_orientation: String,

    /// CSS class tag for the value label
    pub text_class: String,

    /// SVG text anchor: `start` outside the bar, `end` inside it
    pub text_anchor: String,
}

/// A fully derived chart, ready for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Chart heading
    pub title: String,

    /// Total chart height in pixels
    pub height: f64,

    /// Height of the y axis in pixels
    pub y_axis_height: f64,

    /// One bar per result, sorted ascending by derived value
    pub tests: Vec<Bar>,

    /// Axis label text
    pub label: String,
}

/// X-axis geometry consumed by the template to lay out the axis line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    /// Vertical offset of the axis line in pixels
    pub offset: f64,

    /// Axis line width in pixels
    pub width: f64,

    /// Horizontal midpoint for the axis label
    pub label_position: f64,
}

/// Begin/end timestamps of the run, rendered as display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTimes {
    /// Time the run began
    pub begin: String,

    /// Time and date the run ended
    pub end: String,
}

/// The assembled rendering document
///
/// This is the single structured value handed to the external renderer; the
/// pipeline itself performs no markup generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// Generating tool name
    pub application: String,

    /// Generating tool version
    pub version: String,

    /// Report generation date
    pub date: String,

    /// Operator count spelled out as a cardinal word
    pub count: String,

    /// Test location, without any user-agent suffix
    pub location: String,

    /// Connection profile label
    pub connection: String,

    /// User agent parsed from the location string; empty when absent
    pub user_agent: String,

    /// Run boundary timestamps as display strings
    pub times: ReportTimes,

    /// Formatted result rows
    pub results: Vec<FormattedResult>,

    /// Built charts in declared definition order
    pub charts: Vec<Chart>,

    /// Chart width layout constant, echoed for the template
    pub chart_width: f64,

    /// Chart margin layout constant, echoed for the template
    pub chart_margin: f64,

    /// Bar height layout constant, echoed for the template
    pub bar_height: f64,

    /// Label offset layout constant, echoed for the template
    pub label_offset: f64,

    /// X-axis geometry
    pub x_axis: XAxis,
}
