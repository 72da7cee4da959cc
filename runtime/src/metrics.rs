//! Prometheus metrics for observability and monitoring.
//!
//! This module names every metric the dispenser records and installs the
//! Prometheus recorder:
//! - Orders by outcome and revenue
//! - Broker publishes
//! - Store actions
//!
//! Until [`MetricsRecorder::install`] is called the `metrics` macros are
//! no-ops, which is what unit tests rely on.
//!
//! # Example
//!
//! ```rust,no_run
//! use dispenser_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let recorder = MetricsRecorder::install()?;
//!
//! // ... serve some drinks ...
//!
//! eprintln!("{}", recorder.render());
//! # Ok(())
//! # }
//! ```

use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

// Re-export metrics macros for use in other crates
pub use metrics::counter;

/// Orders handled, labelled `outcome = served | missing_money`
pub const DISPENSER_ORDERS_TOTAL: &str = "dispenser_orders_total";

/// Money tendered for served orders, in cents
pub const DISPENSER_REVENUE_CENTS_TOTAL: &str = "dispenser_revenue_cents_total";

/// Events published on a broker, labelled by `event_type`
pub const BROKER_EVENTS_PUBLISHED_TOTAL: &str = "broker_events_published_total";

/// Actions sent to a Store
pub const STORE_ACTIONS_TOTAL: &str = "store_actions_total";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Installed Prometheus recorder.
///
/// Holds the handle used to render the exposition text. There is no HTTP
/// listener: the dispenser prints the rendering when it shuts down.
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// Register metric descriptions and install the global recorder.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Install`] if a global recorder is already
    /// installed. In production, ensure this is only called once.
    pub fn install() -> Result<Self, MetricsError> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| MetricsError::Install(e.to_string()))?;

        register_metrics();
        tracing::info!("Prometheus metrics recorder installed");

        Ok(Self { handle })
    }

    /// Render current metrics in Prometheus text format.
    #[must_use]
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(
        DISPENSER_ORDERS_TOTAL,
        "Total number of drink orders handled, by outcome"
    );
    describe_counter!(
        DISPENSER_REVENUE_CENTS_TOTAL,
        "Total money tendered for served drinks, in cents"
    );
    describe_counter!(
        BROKER_EVENTS_PUBLISHED_TOTAL,
        "Total number of events published on the broker"
    );
    describe_counter!(
        STORE_ACTIONS_TOTAL,
        "Total number of actions processed by stores"
    );
}
