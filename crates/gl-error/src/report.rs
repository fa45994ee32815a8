//! Structured logging of statuses
use crate::status::GlError;

/// Emit `status` as a tracing event: INFO for `OK`, ERROR for any failure.
pub fn report(status: GlError) {
    let code = status.value();
    let name = status.name();
    if status.is_ok() {
        tracing::info!(code, name, "{}", status);
    } else {
        tracing::error!(code, name, "{}", status);
    }
}
