//! Time-bucketed aggregation and the chart rendering seam.

pub mod aggregate;
pub mod render;

pub use aggregate::{bucketize, Bucket, ChartMode};
pub use render::{ChartRenderer, TextBarChart};
