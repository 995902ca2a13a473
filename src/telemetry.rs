//! Telemetry metric name constants.
//!
//! Centralised metric names for kennel operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `kennel_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `source`: breed source name (e.g. "dog-api")
//! - `status`: outcome: "ok" or "error"

/// Lookups answered from the memo cache.
///
/// Labels: `source`.
pub const CACHE_HITS_TOTAL: &str = "kennel_cache_hits_total";

/// Lookups that had to go to the wrapped source. One per delegate call.
///
/// Labels: `source`.
pub const CACHE_MISSES_TOTAL: &str = "kennel_cache_misses_total";

/// Total upstream HTTP requests.
///
/// Labels: `source`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "kennel_requests_total";

/// Upstream request duration in seconds.
///
/// Labels: `source`.
pub const REQUEST_DURATION_SECONDS: &str = "kennel_request_duration_seconds";
