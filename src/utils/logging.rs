// Centralized logging utilities to reduce verbose logging patterns
use log::{debug, error, info, warn};

use crate::models::LoginOutcome;

pub struct LoggingHelper;

impl LoggingHelper {
    /// Log that the widget reported completion without a usable code
    pub fn log_missing_code(widget_error: Option<&str>) {
        match widget_error {
            Some(error) => debug!("Sign-in callback without code (widget error: {})", error),
            None => debug!("Sign-in callback without code, ignoring"),
        }
    }

    /// Log the start of a code exchange. The code itself is never logged.
    pub fn log_code_exchange_start(path: &str, code_len: usize) {
        info!("🔄 Sending authorization code ({} bytes) to {}", code_len, path);
    }

    /// Log the raw server response body at debug level
    pub fn log_server_response(status: u16, body: &str) {
        debug!("Sign-in endpoint answered {} with {} byte body", status, body.len());
        debug!("Sign-in endpoint body: {}", body);
    }

    /// Log the redirect scheduled after a confirmed login
    pub fn log_redirect_scheduled(path: &str, delay_ms: u128) {
        info!("↪️  Redirecting to {} in {} ms", path, delay_ms);
    }

    /// Log a request that never produced a usable response
    pub fn log_transport_failure(reason: &str, reported: bool) {
        error!("Failed to reach sign-in endpoint: {}", reason);
        if !reported {
            warn!("Page left unchanged after transport failure");
        }
    }

    /// Log the final outcome of one callback invocation
    pub fn log_outcome(outcome: &LoginOutcome) {
        match outcome {
            LoginOutcome::Success { .. } => info!("✅ Login confirmed by server"),
            LoginOutcome::MissingCode => debug!("Sign-in callback finished: {}", outcome.label()),
            _ => warn!("❌ Login not completed: {}", outcome.label()),
        }
    }
}
