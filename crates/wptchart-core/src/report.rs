//! Report assembly
//!
//! Combines formatted run metadata, formatted result rows, and the built
//! charts into the single [`ReportDocument`] handed to the renderer. The
//! generation timestamp is injected by the caller rather than read from the
//! system clock, so assembling the same input twice yields the same document.

use crate::chart;
use crate::config::{ChartDefinition, Layout};
use crate::error::Result;
use crate::format;
use crate::types::{
    Datum, FormattedDatum, FormattedResult, ReportDocument, ReportTimes, ResultSet, RunOptions,
    TestResult, XAxis,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// The downstream renderer: a single synchronous call taking the assembled
/// document and producing markup
pub trait Render {
    /// Render the document to markup
    fn render(&self, document: &ReportDocument) -> Result<String>;
}

/// Assemble a document and hand it straight to a renderer
pub fn map<R: Render>(
    renderer: &R,
    options: &RunOptions,
    set: &ResultSet,
    definitions: &[ChartDefinition],
    layout: &Layout,
    generated: DateTime<Utc>,
) -> Result<String> {
    renderer.render(&assemble(options, set, definitions, layout, generated)?)
}

/// Build the rendering document from a run's options and results
pub fn assemble(
    options: &RunOptions,
    set: &ResultSet,
    definitions: &[ChartDefinition],
    layout: &Layout,
    generated: DateTime<Utc>,
) -> Result<ReportDocument> {
    let (location, user_agent) = match options.location.split_once(':') {
        Some((location, user_agent)) => (location, user_agent),
        None => (options.location.as_str(), ""),
    };

    let row_height = layout.row_height();
    let x_axis_width = layout.plot_width() + 2.0;

    Ok(ReportDocument {
        application: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        date: format_date(generated),
        count: format::cardinal(options.count)?.to_string(),
        location: location.to_string(),
        connection: options.connection.clone(),
        user_agent: user_agent.to_string(),
        times: ReportTimes {
            begin: set.times.begin.format("%H:%M:%S").to_string(),
            end: format!(
                "{} on {}",
                set.times.end.format("%H:%M:%S"),
                format_date(set.times.end)
            ),
        },
        results: set.results.iter().map(format_result).collect(),
        charts: chart::build_charts(definitions, &set.results, layout)?,
        chart_width: layout.chart_width,
        chart_margin: layout.chart_margin,
        bar_height: layout.bar_height,
        label_offset: layout.label_offset,
        x_axis: XAxis {
            offset: set.results.len() as f64 * row_height + 1.0,
            width: x_axis_width,
            label_position: (x_axis_width / 2.0).round(),
        },
    })
}

// Fixed, locale-invariant date rendering; %e pads single-digit days with a
// space, which is trimmed away.
fn format_date(moment: DateTime<Utc>) -> String {
    moment.format("%e %B %Y").to_string().trim_start().to_string()
}

fn format_result(result: &TestResult) -> FormattedResult {
    FormattedResult {
        name: result.name.clone(),
        test_type: result.test_type.clone(),
        first_view: format_view(&result.first_view),
        repeat_view: format_view(&result.repeat_view),
    }
}

fn format_view(view: &BTreeMap<String, Datum>) -> BTreeMap<String, FormattedDatum> {
    view.iter()
        .map(|(key, datum)| {
            (
                key.clone(),
                FormattedDatum {
                    value: format::format_integer(datum.value),
                    extra: datum.extra.clone(),
                },
            )
        })
        .collect()
}
