//! Reusable chart widgets.

mod chart;

pub use chart::{create_demand_chart, create_error_chart};
