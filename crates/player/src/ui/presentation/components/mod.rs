//! Reusable UI components

mod error_boundary;
mod start_over;
mod step_indicator;

pub use error_boundary::AppErrorBoundary;
pub use start_over::{use_start_over, StartOverButton};
pub use step_indicator::StepIndicator;
