//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Window-size parameter for the overview endpoints (`?days=N`).
///
/// Absent or out-of-range values are clamped at this boundary via
/// `pulse_core::analytics::clamp_window_days`; the aggregation engine
/// itself trusts its input.
#[derive(Debug, Deserialize)]
pub struct WindowParams {
    pub days: Option<i64>,
}
