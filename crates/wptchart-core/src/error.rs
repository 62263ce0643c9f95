//! Error types for the wptchart core library
//!
//! Every failure the pipeline can produce is a variant of [`Error`], with the
//! offending value carried on the variant so callers can match on it instead
//! of parsing messages.

use thiserror::Error;

/// Main error type for chart derivation and report assembly
#[derive(Error, Debug)]
pub enum Error {
    /// A chart definition named a derivative the pipeline does not implement
    #[error("unrecognised derivative `{name}`")]
    UnknownDerivative { name: String },

    /// A chart definition combined view/key shapes that have no meaning
    #[error("invalid chart definition `{title}`: {message}")]
    InvalidChartDefinition { title: String, message: String },

    /// Operator count outside the range that can be spelled out (0-15)
    #[error("unsupported count `{count}`, expected a value from 0 to 15")]
    UnsupportedCount { count: u8 },

    /// A result lacks a metric that a chart definition addresses
    #[error("result `{result}` has no `{key}` metric in the {view} view")]
    MissingMetric {
        view: &'static str,
        key: String,
        result: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_derivative_display() {
        let err = Error::UnknownDerivative {
            name: "median".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognised derivative `median`");
    }

    #[test]
    fn test_missing_metric_display() {
        let err = Error::MissingMetric {
            view: "repeat",
            key: "speedIndex".to_string(),
            result: "Home page".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "result `Home page` has no `speedIndex` metric in the repeat view"
        );
    }

    #[test]
    fn test_unsupported_count_display() {
        let err = Error::UnsupportedCount { count: 16 };
        assert_eq!(
            err.to_string(),
            "unsupported count `16`, expected a value from 0 to 15"
        );
    }
}
