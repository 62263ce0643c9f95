//! Metric extraction and scaling
//!
//! Given a chart definition and one test result, [`value_of`] produces the
//! scalar that chart plots for that result: either a plain measurement or a
//! derivative comparing two operand datums. [`maximum_value`] folds that
//! extraction over a whole result set to derive the chart's scale.

use crate::config::{ChartDefinition, Derivative, MetricSpec, View, ViewSpec};
use crate::error::{Error, Result};
use crate::types::{Datum, TestResult};

/// Extract the value a chart plots for one result
///
/// Without a derivative the definition must address a single view and a
/// single key. With a derivative, a view pair compares the same metric across
/// views and a key pair compares two metrics within one view.
///
/// Division by zero in a percentage is not guarded: the non-finite quotient
/// propagates into the chart geometry and display text.
pub fn value_of(chart: &ChartDefinition, result: &TestResult) -> Result<f64> {
    match chart.derivative {
        Some(derivative) => {
            let (lhs, rhs) = operands(chart, result)?;
            Ok(match derivative {
                Derivative::Difference => lhs.value - rhs.value,
                Derivative::Percentage => (lhs.value / rhs.value * 100.0).round(),
            })
        }
        None => match (&chart.view, &chart.key) {
            (ViewSpec::Single(view), MetricSpec::Single(key)) => {
                Ok(view_datum(result, *view, key)?.value)
            }
            _ => Err(chart.invalid("a view or key pair requires a derivative")),
        },
    }
}

/// Maximum extracted value across a result set, seeded at zero
///
/// The zero seed means an all-negative metric yields 0 and therefore a zero
/// scale factor downstream; that degenerate geometry is documented behavior,
/// not guarded here.
pub fn maximum_value(chart: &ChartDefinition, results: &[TestResult]) -> Result<f64> {
    let mut maximum = 0.0_f64;
    for result in results {
        let current = value_of(chart, result)?;
        if current > maximum {
            maximum = current;
        }
    }

    Ok(maximum)
}

fn operands<'a>(
    chart: &ChartDefinition,
    result: &'a TestResult,
) -> Result<(&'a Datum, &'a Datum)> {
    match (&chart.view, &chart.key) {
        (ViewSpec::Pair(lhs, rhs), MetricSpec::Single(key)) => Ok((
            view_datum(result, *lhs, key)?,
            view_datum(result, *rhs, key)?,
        )),
        (ViewSpec::Single(view), MetricSpec::Pair(lhs, rhs)) => Ok((
            view_datum(result, *view, lhs)?,
            view_datum(result, *view, rhs)?,
        )),
        (ViewSpec::Single(view), MetricSpec::Single(key)) => {
            let datum = view_datum(result, *view, key)?;
            Ok((datum, datum))
        }
        (ViewSpec::Pair(..), MetricSpec::Pair(..)) => {
            Err(chart.invalid("view and key cannot both be pairs"))
        }
    }
}

fn view_datum<'a>(result: &'a TestResult, view: View, key: &str) -> Result<&'a Datum> {
    let pass = match view {
        View::First => &result.first_view,
        View::Repeat => &result.repeat_view,
    };

    pass.get(key).ok_or_else(|| Error::MissingMetric {
        view: view.name(),
        key: key.to_string(),
        result: result.name.clone(),
    })
}
