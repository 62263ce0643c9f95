//! wptchart core - chart derivation for web-performance benchmark reports
//!
//! This crate turns a materialized collection of per-test timing measurements
//! into the structured document an HTML/SVG renderer consumes: derived
//! comparative metrics, pixel-scaled bar geometry, and formatted display
//! values. Collecting the measurements and rendering the markup are both
//! external collaborators; the pipeline here is pure, synchronous, in-memory
//! transformation.
//!
//! # Main Components
//!
//! - **Value Formatter** ([`format`]): digit-grouped display strings and
//!   spelled-out cardinals
//! - **Metric Extractor & Scaler** ([`metrics`]): plain and derivative values
//!   per result, and result-set maxima
//! - **Chart Builder** ([`chart`]): sorting, scaling, and per-bar geometry
//! - **Report Assembler** ([`report`]): the top-level document, plus the
//!   [`Render`] seam to the external renderer
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use wptchart_core::{assemble, default_charts, Layout, ResultSet, RunOptions};
//!
//! # fn main() -> wptchart_core::Result<()> {
//! let options = RunOptions {
//!     location: "Dulles:Chrome".to_string(),
//!     connection: "Cable".to_string(),
//!     count: 2,
//! };
//! let set: ResultSet = serde_json::from_value(serde_json::json!({
//!     "times": { "begin": "2015-02-01T09:30:00Z", "end": "2015-02-01T10:45:30Z" },
//!     "results": [],
//! })).unwrap();
//!
//! let generated = Utc.with_ymd_and_hms(2015, 2, 3, 12, 0, 0).unwrap();
//! let document = assemble(&options, &set, &default_charts(), &Layout::default(), generated)?;
//! assert_eq!(document.count, "two");
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use config::{default_charts, ChartDefinition, Derivative, Layout, MetricSpec, View, ViewSpec};
pub use error::{Error, Result};
pub use report::{assemble, map, Render};
pub use types::{
    Bar, Chart, Datum, FormattedDatum, FormattedResult, ReportDocument, ReportTimes, ResultSet,
    RunOptions, RunTimes, TestResult, XAxis,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
