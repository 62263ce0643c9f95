//! Chart building
//!
//! Turns one chart definition plus a result set into ordered bar geometry.
//! Each chart ranks its own copy of the extracted values, so building chart
//! n+1 never observes the order chart n produced and the caller's slice is
//! left untouched.

use crate::config::{ChartDefinition, Derivative, Layout};
use crate::error::Result;
use crate::format;
use crate::metrics;
use crate::types::{Bar, Chart, TestResult};

/// Bars narrower than this get their label drawn outside the bar
const INSIDE_LABEL_MIN_WIDTH: f64 = 40.0;

/// Build every chart in definition order
pub fn build_charts(
    definitions: &[ChartDefinition],
    results: &[TestResult],
    layout: &Layout,
) -> Result<Vec<Chart>> {
    definitions
        .iter()
        .map(|definition| build_chart(definition, results, layout))
        .collect()
}

/// Build one chart: validate, rank, scale, and map each result to a bar
pub fn build_chart(
    definition: &ChartDefinition,
    results: &[TestResult],
    layout: &Layout,
) -> Result<Chart> {
    definition.validate()?;

    let mut ranked: Vec<(usize, f64)> = results
        .iter()
        .enumerate()
        .map(|(index, result)| Ok((index, metrics::value_of(definition, result)?)))
        .collect::<Result<_>>()?;
    ranked.sort_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1));

    let units_per_pixel = metrics::maximum_value(definition, results)? / layout.plot_width();
    if !units_per_pixel.is_finite() || units_per_pixel == 0.0 {
        log::warn!(
            "chart `{}` has a degenerate scale factor ({units_per_pixel} units per pixel)",
            definition.title
        );
    }

    let tests = ranked
        .iter()
        .enumerate()
        .map(|(rank, &(index, value))| {
            build_bar(definition, &results[index], rank, value, units_per_pixel, layout)
        })
        .collect();

    log::debug!(
        "built chart `{}` with {} bars",
        definition.title,
        results.len()
    );

    let row_height = layout.row_height();
    Ok(Chart {
        title: definition.title.clone(),
        height: results.len() as f64 * row_height + layout.chart_padding,
        y_axis_height: results.len() as f64 * row_height + layout.bar_padding,
        tests,
        label: definition.label.clone(),
    })
}

fn build_bar(
    definition: &ChartDefinition,
    result: &TestResult,
    rank: usize,
    value: f64,
    units_per_pixel: f64,
    layout: &Layout,
) -> Bar {
    let mut bar_width = value / units_per_pixel;
    if bar_width.fract() != 0.0 {
        bar_width = (bar_width * 100.0).round() / 100.0;
    }

    // Short bars cannot legibly contain their own label, so it sits outside
    // the bar, anchored at the start. The `< 40` comparison is strict: a bar
    // of exactly 40 pixels keeps its label inside.
    let (text_orientation, text_class, text_anchor) = if bar_width < INSIDE_LABEL_MIN_WIDTH {
        ("", "chart-label", "start")
    } else {
        ("-", "chart-label chart-bar-label", "end")
    };

    let mut display = format::format_integer(value);
    if definition.derivative == Some(Derivative::Percentage) {
        display.push('%');
    }

    Bar {
        offset: rank as f64 * layout.row_height(),
        name: result.name.clone(),
        test_type: result.test_type.clone(),
        bar_width,
        value: display,
        text_orientation: text_orientation.to_string(),
        text_class: text_class.to_string(),
        text_anchor: text_anchor.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_charts;
    use serde_json::json;

    fn results(values: &[f64]) -> Vec<TestResult> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(json!({
                    "name": format!("Page {index}"),
                    "type": "home",
                    "firstView": { "speedIndex": { "value": value } },
                    "repeatView": {},
                }))
                .expect("fixture should deserialize")
            })
            .collect()
    }

    fn first_view_speed_index() -> ChartDefinition {
        default_charts().remove(0)
    }

    #[test]
    fn test_bars_are_sorted_ascending() {
        let results = results(&[1200.0, 300.0, 800.0]);
        let chart = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        let names: Vec<&str> = chart.tests.iter().map(|bar| bar.name.as_str()).collect();
        assert_eq!(names, ["Page 1", "Page 2", "Page 0"]);
        assert_eq!(chart.tests[0].offset, 0.0);
        assert_eq!(chart.tests[1].offset, 34.0);
        assert_eq!(chart.tests[2].offset, 68.0);
    }

    #[test]
    fn test_input_order_is_untouched() {
        let results = results(&[1200.0, 300.0, 800.0]);
        let _ = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        assert_eq!(results[0].first_view["speedIndex"].value, 1200.0);
        assert_eq!(results[1].first_view["speedIndex"].value, 300.0);
    }

    #[test]
    fn test_bar_widths_scale_to_plot_width() {
        let results = results(&[1200.0, 692.0]);
        let chart = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        // Maximum of 1200 over 692 plot pixels: 692 / (1200/692) = 399.0533...,
        // rounded to 2 decimals; the maximum itself spans the full plot width.
        assert_eq!(chart.tests[0].bar_width, 399.05);
        assert_eq!(chart.tests[1].bar_width, 692.0);
    }

    #[test]
    fn test_label_placement_boundary() {
        let results = results(&[39.99, 40.0, 692.0]);
        let chart = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        // Plot width equals the maximum here, so widths equal raw values.
        let narrow = &chart.tests[0];
        assert_eq!(narrow.bar_width, 39.99);
        assert_eq!(narrow.text_anchor, "start");
        assert_eq!(narrow.text_orientation, "");
        assert_eq!(narrow.text_class, "chart-label");

        let boundary = &chart.tests[1];
        assert_eq!(boundary.bar_width, 40.0);
        assert_eq!(boundary.text_anchor, "end");
        assert_eq!(boundary.text_orientation, "-");
        assert_eq!(boundary.text_class, "chart-label chart-bar-label");
    }

    #[test]
    fn test_chart_heights() {
        let results = results(&[300.0, 800.0]);
        let chart = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        assert_eq!(chart.height, 2.0 * 34.0 + 29.0);
        assert_eq!(chart.y_axis_height, 2.0 * 34.0 + 2.0);
    }

    #[test]
    fn test_display_values_are_formatted() {
        let results = results(&[1200.0, 300.0]);
        let chart = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        assert_eq!(chart.tests[1].value, "1,200");
    }

    #[test]
    fn test_invalid_definition_fails_before_building() {
        let definition: ChartDefinition = serde_json::from_value(json!({
            "view": ["repeat", "first"],
            "key": ["load", "firstByte"],
            "derivative": "difference",
            "title": "Broken",
            "label": "Broken",
        }))
        .unwrap();

        assert!(build_chart(&definition, &results(&[300.0]), &Layout::default()).is_err());
    }

    #[test]
    fn test_zero_maximum_produces_degenerate_widths() {
        let results = results(&[0.0, 0.0]);
        let chart = build_chart(&first_view_speed_index(), &results, &Layout::default()).unwrap();

        // 0 / 0 scale: the NaN width is carried through, not masked, and a
        // NaN width takes the inside-label branch.
        assert!(chart.tests[0].bar_width.is_nan());
        assert_eq!(chart.tests[0].text_anchor, "end");
        assert_eq!(chart.tests[0].value, "0");
    }
}
