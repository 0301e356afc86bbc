//! Telemetry metric name constants.
//!
//! Centralised metric names for blindbox operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `blindbox_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `service` — remote service called ("text" | "image")
//! - `operation` — workflow invoked (e.g. "interpret_name", "blindbox")
//! - `status` — outcome: "ok" or "error"

/// Total remote calls dispatched by the clients.
///
/// Labels: `service`, `status` ("ok" | "error").
pub const REMOTE_CALLS_TOTAL: &str = "blindbox_remote_calls_total";

/// Remote call duration in seconds.
///
/// Labels: `service`.
pub const REMOTE_CALL_DURATION_SECONDS: &str = "blindbox_remote_call_duration_seconds";

/// Image batches that came back shorter than requested (soft condition,
/// not an error).
pub const SHORT_IMAGE_BATCHES_TOTAL: &str = "blindbox_short_image_batches_total";

/// Blind-box combinations silently dropped because the image service
/// returned no URL for them.
///
/// Labels: `operation`.
pub const DROPPED_ITEMS_TOTAL: &str = "blindbox_dropped_items_total";
