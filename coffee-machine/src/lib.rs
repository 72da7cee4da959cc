//! # Coffee Machine
//!
//! Order processing for a drink dispenser built on the dispenser
//! architecture.
//!
//! This crate showcases:
//! - Validated requests and a closed set of outcomes ([`types`])
//! - Event publishing through an injected publisher ([`calculator`])
//! - A pure wire format ([`protocol`])
//! - A broker-driven read model kept by a reducer ([`reporting`])
//! - Dependency injection via an environment record ([`orchestrator`])
//! - A line-oriented session over any reader and writer ([`session`])
//!
//! ## Flow
//!
//! ```text
//! OrderRequest ──► compute_order ──► Order ──► format_order ──► "C:1:0"
//!                       │
//!                       │ OrderProcessed
//!                       ▼
//!                 InMemoryBroker ──► ReportingAggregator
//! ```
//!
//! ## Example
//!
//! ```
//! use coffee_machine::events::DispenserEvent;
//! use coffee_machine::orchestrator::run_with_broker;
//! use coffee_machine::reporting::ReportingAggregator;
//! use coffee_machine::types::{Drink, OrderRequest, Sugar};
//! use dispenser_runtime::InMemoryBroker;
//! use std::sync::Arc;
//!
//! let broker = Arc::new(InMemoryBroker::<DispenserEvent>::new());
//! let reporting = ReportingAggregator::new(&*broker);
//!
//! let coffee = OrderRequest::hot(Drink::Coffee, Sugar::One, 5000).unwrap();
//! assert_eq!(run_with_broker(&broker, &coffee), "C:1:0");
//!
//! let short = OrderRequest::hot(Drink::Coffee, Sugar::One, 5).unwrap();
//! assert_eq!(run_with_broker(&broker, &short), "M:Missing 55 cents");
//!
//! assert_eq!(reporting.read_reporting().total_money_earned_in_cents, 5000);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod events;
pub mod orchestrator;
pub mod pricing;
pub mod protocol;
pub mod reporting;
pub mod session;
pub mod types;

pub use calculator::compute_order;
pub use config::DispenserConfig;
pub use error::{ConfigError, RequestError};
pub use events::{DispenserEvent, OrderProcessed};
pub use orchestrator::{DispenserEnvironment, handle_order, process_order, run_with_broker};
pub use pricing::PriceTable;
pub use protocol::{MachineProtocol, OrderFormatter, format_order};
pub use reporting::{ReportingAggregator, ReportingState, increment_reporting};
pub use session::SessionSummary;
pub use types::{Drink, FundingError, Heat, Order, OrderRequest, Sugar, ValidOrder};
