use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing` events.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Haiku -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Haiku -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Haiku -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Haiku -- ", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_log_without_subscriber_installed() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.debug("debug");
    }
}
