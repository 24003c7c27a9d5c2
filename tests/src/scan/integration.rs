#![cfg(test)]
use std::net::Ipv4Addr;

use sweepr_common::config::ScanConfig;
use sweepr_common::policy;
use sweepr_common::report::{PortState, ScanReport};
use sweepr_core::scanner::ScanCoordinator;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Scans a small loopback range around one genuinely open port and checks
/// the report shape: one result per port, sorted ascending, the open port
/// classified as open.
#[tokio::test]
async fn scan_reports_every_port_in_order() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let open_port = listener.local_addr().unwrap().port();

    let start = open_port - 2;
    let end = open_port + 2;
    let request = policy::validate("127.0.0.1", u32::from(start), u32::from(end)).unwrap();

    let report: ScanReport = ScanCoordinator::new(ScanConfig::default())
        .scan(&request)
        .await;

    let expected_ports: Vec<u16> = (start..=end).collect();
    let reported_ports: Vec<u16> = report.results.iter().map(|r| r.port).collect();
    assert_eq!(
        reported_ports, expected_ports,
        "exactly one result per port, ascending, no gaps"
    );

    let open = report
        .results
        .iter()
        .find(|r| r.port == open_port)
        .expect("open port missing from report");
    assert_eq!(open.state, PortState::Open);
}

#[tokio::test]
async fn classification_is_idempotent_across_runs() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let open_port = listener.local_addr().unwrap().port();

    let request =
        policy::validate("127.0.0.1", u32::from(open_port), u32::from(open_port + 1)).unwrap();
    let coordinator = ScanCoordinator::new(ScanConfig::default());

    let first: Vec<PortState> = coordinator
        .scan(&request)
        .await
        .results
        .iter()
        .map(|r| r.state)
        .collect();
    let second: Vec<PortState> = coordinator
        .scan(&request)
        .await
        .results
        .iter()
        .map(|r| r.state)
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn cancelled_scan_returns_partial_report() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let request = policy::validate("localhost", 1, 128).unwrap();
    let report = ScanCoordinator::new(ScanConfig::default())
        .with_cancellation(cancel)
        .scan(&request)
        .await;

    assert!(
        report.results.is_empty(),
        "no probes should be dispatched after cancellation"
    );
    assert!(report.finished_at >= report.started_at);
}

#[tokio::test]
async fn rejected_host_never_reaches_the_coordinator() {
    // Scenario: host outside the allow-list is stopped at validation,
    // so there is no request to hand to the coordinator at all.
    let rejection = policy::validate("example.com", 1, 10).unwrap_err();
    assert!(matches!(
        rejection,
        sweepr_common::policy::PolicyViolation::HostNotAllowed(_)
    ));
}

#[tokio::test]
async fn small_concurrency_still_covers_the_whole_range() {
    let request = policy::validate("127.0.0.1", 1, 12).unwrap();
    let config = ScanConfig {
        concurrency: 2,
        ..ScanConfig::default()
    };

    let report = ScanCoordinator::new(config).scan(&request).await;
    assert_eq!(report.results.len(), 12);
}
