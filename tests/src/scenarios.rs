use std::net::Ipv4Addr;

use scopehunter_common::network::subnet::Subnet;
use scopehunter_common::report::Report;
use scopehunter_common::scope;
use scopehunter_common::verdict::Verdict;
use scopehunter_core::engine::{ScanEngine, Silent};
use scopehunter_core::probe::ProbeExecutor;
use scopehunter_core::probe::mock::{MockRoutes, MockSweeper};

pub fn subnets(list: &[&str]) -> Vec<Subnet> {
    list.iter().map(|s| s.parse().unwrap()).collect()
}

async fn run(scanner: MockSweeper, routes: MockRoutes, input: &[&str]) -> Report {
    let engine = ScanEngine::new(ProbeExecutor::new(scanner, routes));
    engine.run(subnets(input), &Silent).await
}

fn verdicts(report: &Report) -> Vec<Verdict> {
    report.entries().iter().map(|e| e.verdict).collect()
}

#[tokio::test]
async fn live_host_means_accessible() {
    let scanner = MockSweeper::silent().with_live_subnet("10.0.0.0/24");
    let report = run(scanner, MockRoutes::unreachable(), &["10.0.0.0/24"]).await;

    assert_eq!(verdicts(&report), vec![Verdict::Accessible]);
    assert!(report.problem_lines().is_empty());
}

#[tokio::test]
async fn missing_route_is_reported_as_no_route() {
    let report = run(MockSweeper::silent(), MockRoutes::unreachable(), &["10.0.0.0/24"]).await;

    assert_eq!(verdicts(&report), vec![Verdict::NoRoute]);
    assert_eq!(report.problem_lines(), vec!["10.0.0.0/24 (NoRoute)"]);
}

#[tokio::test]
async fn first_usable_gateway_makes_subnet_empty_but_reachable() {
    let scanner = MockSweeper::silent().answering(Ipv4Addr::new(10, 0, 0, 1));
    let report = run(scanner, MockRoutes::reachable(), &["10.0.0.0/24"]).await;

    assert_eq!(verdicts(&report), vec![Verdict::EmptyButReachable]);
    assert!(report.problem_lines().is_empty());
}

#[tokio::test]
async fn last_usable_gateway_makes_subnet_empty_but_reachable() {
    let scanner = MockSweeper::silent().answering(Ipv4Addr::new(10, 0, 0, 254));
    let report = run(scanner, MockRoutes::reachable(), &["10.0.0.0/24"]).await;

    assert_eq!(verdicts(&report), vec![Verdict::EmptyButReachable]);
    assert!(report.problem_lines().is_empty());
}

#[tokio::test]
async fn silent_routed_subnet_times_out() {
    let scanner = MockSweeper::silent();
    let report = run(scanner.clone(), MockRoutes::reachable(), &["10.0.0.0/24"]).await;

    assert_eq!(verdicts(&report), vec![Verdict::Timeout]);
    assert_eq!(report.problem_lines(), vec!["10.0.0.0/24 (Timeout)"]);
    assert_eq!(scanner.swept(), vec!["10.0.0.0/24"]);
    assert_eq!(
        scanner.pinged(),
        vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 254)]
    );
}

#[tokio::test]
async fn comments_and_blank_lines_are_not_scanned() {
    let text = "# customer scope\n10.0.0.0/24\n\n# dmz\n192.168.10.0/24\n";
    let parsed = scope::parse(text).unwrap();
    let scanner = MockSweeper::silent().with_live_subnet("10.0.0.0/24");

    let engine = ScanEngine::new(ProbeExecutor::new(scanner.clone(), MockRoutes::unreachable()));
    let report = engine.run(parsed, &Silent).await;

    let scanned: Vec<&str> = report.entries().iter().map(|e| e.subnet.notation()).collect();
    assert_eq!(scanned, vec!["10.0.0.0/24", "192.168.10.0/24"]);
    assert_eq!(scanner.swept(), vec!["10.0.0.0/24", "192.168.10.0/24"]);
    assert!(scanner.pinged().is_empty());
}

#[tokio::test]
async fn scope_without_entries_finishes_clean() {
    let parsed = scope::parse("# nothing in scope yet\n\n").unwrap();
    let scanner = MockSweeper::silent();

    let engine = ScanEngine::new(ProbeExecutor::new(scanner.clone(), MockRoutes::reachable()));
    let report = engine.run(parsed, &Silent).await;

    assert_eq!(report.total(), 0);
    assert!(report.is_clean());
    assert!(scanner.swept().is_empty());
}
