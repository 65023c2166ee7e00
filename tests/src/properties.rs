use std::net::Ipv4Addr;

use scopehunter_common::verdict::Verdict;
use scopehunter_core::engine::{ScanEngine, Silent};
use scopehunter_core::probe::ProbeExecutor;

use scopehunter_core::probe::mock::{MockRoutes, MockSweeper};

use crate::scenarios::subnets;

const MIXED: &[&str] = &[
    "10.10.0.0/24",
    "10.20.0.0/24",
    "10.30.0.0/24",
    "10.40.0.0/24",
    "10.50.0.0/24",
    "10.60.0.0/30",
];

fn mixed_engine() -> ScanEngine {
    let scanner = MockSweeper::silent()
        .with_live_subnet("10.10.0.0/24")
        .with_live_subnet("10.50.0.0/24")
        .answering(Ipv4Addr::new(10, 30, 0, 1))
        .answering(Ipv4Addr::new(10, 60, 0, 2));
    let routes = MockRoutes::reachable().without(Ipv4Addr::new(10, 40, 0, 0));
    ScanEngine::new(ProbeExecutor::new(scanner, routes))
}

#[tokio::test]
async fn every_subnet_gets_exactly_one_verdict() {
    let report = mixed_engine().run(subnets(MIXED), &Silent).await;

    let sum = report.problem_count()
        + report.count(Verdict::Accessible)
        + report.count(Verdict::EmptyButReachable);
    assert_eq!(sum, MIXED.len());
    assert_eq!(report.total(), MIXED.len());
}

#[tokio::test]
async fn mixed_scope_is_classified_and_ordered() {
    let report = mixed_engine().run(subnets(MIXED), &Silent).await;

    let verdicts: Vec<Verdict> = report.entries().iter().map(|e| e.verdict).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::Accessible,
            Verdict::Timeout,
            Verdict::EmptyButReachable,
            Verdict::NoRoute,
            Verdict::Accessible,
            Verdict::EmptyButReachable,
        ]
    );
    assert_eq!(
        report.problem_lines(),
        vec!["10.20.0.0/24 (Timeout)", "10.40.0.0/24 (NoRoute)"]
    );
}

#[tokio::test]
async fn reversed_input_reverses_problem_list() {
    let reversed: Vec<&str> = MIXED.iter().rev().copied().collect();
    let report = mixed_engine().run(subnets(&reversed), &Silent).await;

    assert_eq!(
        report.problem_lines(),
        vec!["10.40.0.0/24 (NoRoute)", "10.20.0.0/24 (Timeout)"]
    );
}

#[tokio::test]
async fn broken_route_lookup_never_claims_a_route() {
    let engine = ScanEngine::new(ProbeExecutor::new(
        MockSweeper::silent().answering(Ipv4Addr::new(10, 0, 0, 1)),
        MockRoutes::failing(),
    ));
    let report = engine.run(subnets(&["10.0.0.0/24"]), &Silent).await;

    assert_eq!(report.entries()[0].verdict, Verdict::NoRoute);
}

#[tokio::test]
async fn broken_scanner_still_finishes_the_run() {
    let engine = ScanEngine::new(ProbeExecutor::new(
        MockSweeper::failing(),
        MockRoutes::reachable(),
    ));
    let report = engine
        .run(subnets(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.1/32"]), &Silent)
        .await;

    assert_eq!(report.total(), 3);
    assert!(report.entries().iter().all(|e| e.verdict == Verdict::Timeout));
}
