//! Whole sessions: order lines in, instructions out, report kept by the
//! aggregator on the same broker.

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use coffee_machine::events::DispenserEvent;
use coffee_machine::orchestrator::DispenserEnvironment;
use coffee_machine::pricing::PriceTable;
use coffee_machine::reporting::ReportingAggregator;
use coffee_machine::session::{self, SessionSummary};
use coffee_machine::types::Drink;
use dispenser_runtime::InMemoryBroker;
use dispenser_testing::helpers::init_test_tracing;
use std::sync::Arc;

fn machine() -> (DispenserEnvironment, ReportingAggregator) {
    let broker = Arc::new(InMemoryBroker::<DispenserEvent>::new());
    let reporting = ReportingAggregator::new(&*broker);
    let env = DispenserEnvironment::with_broker(broker, PriceTable::default());
    (env, reporting)
}

fn run_session(env: &DispenserEnvironment, input: &str) -> (String, SessionSummary) {
    let mut output = Vec::new();
    let summary = session::run(env, input.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), summary)
}

#[test]
fn bad_lines_are_skipped_and_the_session_goes_on() {
    init_test_tracing();
    let (env, reporting) = machine();
    let input = concat!(
        r#"{"drink":"coffee","heat":"hot","sugar":1,"moneyInCents":60}"#,
        "\n",
        "not json\n",
        "\n",
        r#"{"drink":"orange","heat":"hot","sugar":0,"moneyInCents":60}"#,
        "\n",
        r#"{"drink":"tea","heat":"hot","sugar":0,"moneyInCents":10}"#,
        "\n",
    );

    let (stdout, summary) = run_session(&env, input);

    assert_eq!(stdout, "C:1:0\nM:Missing 30 cents\n");
    assert_eq!(
        summary,
        SessionSummary {
            instructions: 2,
            skipped: 2,
        }
    );

    let report = reporting.read_reporting();
    assert_eq!(report.orders_served(), 1);
    assert_eq!(report.count_for(Drink::Coffee), 1);
    assert_eq!(report.count_for(Drink::Tea), 0);
    assert_eq!(report.count_for(Drink::Orange), 0);
    assert_eq!(report.total_money_earned_in_cents, 60);
}

#[test]
fn unknown_drink_and_bad_sugar_are_skipped() {
    let (env, reporting) = machine();
    let input = concat!(
        r#"{"drink":"soup","heat":"hot","sugar":0,"moneyInCents":60}"#,
        "\n",
        r#"{"drink":"tea","heat":"hot","sugar":3,"moneyInCents":60}"#,
        "\n",
        r#"{"drink":"tea","heat":"cold","sugar":0,"moneyInCents":60}"#,
        "\n",
        r#"{"drink":"orange","heat":"cold","sugar":0,"moneyInCents":60}"#,
        "\n",
    );

    let (stdout, summary) = run_session(&env, input);

    assert_eq!(stdout, "O::\n");
    assert_eq!(summary.skipped, 3);
    assert_eq!(reporting.read_reporting().count_for(Drink::Orange), 1);
}

#[test]
fn report_accumulates_across_sessions_on_one_machine() {
    let (env, reporting) = machine();
    let coffee = r#"{"drink":"coffee","heat":"extraHot","sugar":0,"moneyInCents":75}"#;

    run_session(&env, coffee);
    run_session(&env, coffee);

    let report = reporting.read_reporting();
    assert_eq!(report.count_for(Drink::Coffee), 2);
    assert_eq!(report.total_money_earned_in_cents, 150);
}
