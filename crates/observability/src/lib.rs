//! Tracing/logging setup shared by anything embedding the storefront core.
//!
//! The domain crates themselves are pure and do not log; hosts (API client,
//! UI shell, test harnesses) call [`init`] once at startup.

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
