//! Coffee machine binary
//!
//! Reads one JSON order per line on stdin and writes the drink maker
//! instruction for each on stdout:
//!
//! ```text
//! $ echo '{"drink":"coffee","heat":"hot","sugar":1,"moneyInCents":60}' | coffee-machine
//! C:1:0
//! ```
//!
//! Logs go to stderr. The sales report is logged when input ends.

use anyhow::Context;
use coffee_machine::config::DispenserConfig;
use coffee_machine::events::DispenserEvent;
use coffee_machine::orchestrator::DispenserEnvironment;
use coffee_machine::reporting::ReportingAggregator;
use coffee_machine::session;
use dispenser_core::event::Event;
use dispenser_core::event_bus::EventBus;
use dispenser_runtime::InMemoryBroker;
use dispenser_runtime::metrics::MetricsRecorder;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = DispenserConfig::from_env().context("Failed to load configuration")?;

    // Initialize tracing; stdout carries machine instructions only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let recorder = if config.metrics_enabled {
        Some(MetricsRecorder::install().context("Failed to install metrics recorder")?)
    } else {
        None
    };

    let broker = Arc::new(InMemoryBroker::<DispenserEvent>::new());
    let reporting = ReportingAggregator::new(&*broker);
    broker.subscribe(Arc::new(|event: &DispenserEvent| {
        match event.to_envelope() {
            Ok(envelope) => tracing::debug!(%envelope, "Event published"),
            Err(error) => tracing::warn!(%error, "Event could not be serialized"),
        }
    }));

    let env = DispenserEnvironment::with_broker(Arc::clone(&broker), config.prices);
    tracing::info!(prices = ?env.prices, "Coffee machine ready");

    let summary = session::run(&env, io::stdin().lock(), io::stdout().lock())?;

    let report = reporting.read_reporting();
    let report_json = serde_json::to_string(&report).context("Failed to serialize sales report")?;
    tracing::info!(
        orders_served = report.orders_served(),
        total_money_earned_in_cents = report.total_money_earned_in_cents,
        skipped = summary.skipped,
        report = %report_json,
        "Sales report: {report}"
    );

    if let Some(recorder) = recorder {
        eprintln!("{}", recorder.render());
    }

    Ok(())
}
