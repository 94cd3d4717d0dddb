use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const LOG_TARGET: &str = "storefront";

/// `Logger` adapter that forwards every message to `tracing` under one target,
/// so `RUST_LOG=storefront=debug` selects the domain output.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
