use anyhow::anyhow;
use sweepr_common::config::ScanConfig;
use sweepr_common::policy;
use sweepr_core::scanner::ScanCoordinator;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::terminal::{print, spinner};

pub async fn scan(
    host: String,
    start_port: u32,
    end_port: u32,
    config: ScanConfig,
) -> anyhow::Result<()> {
    // Policy rejections surface before any probe goes out; the non-Ok
    // return is the distinct termination path for invalid input.
    let request =
        policy::validate(&host, start_port, end_port).map_err(|violation| anyhow!(violation))?;

    print::scan_started(&request);

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    let progress_bar = spinner::start_scan_spinner();
    let total = request.port_count();
    let bar = progress_bar.clone();

    let coordinator = ScanCoordinator::new(config)
        .with_cancellation(cancel.clone())
        .with_progress(Box::new(move |resolved| {
            spinner::report_probe_progress(&bar, resolved, total);
        }));

    let report = coordinator.scan(&request).await;
    progress_bar.finish_and_clear();

    for result in &report.results {
        print::port_line(result);
    }

    if report.results.len() < total {
        warn!(
            "scan interrupted: {} of {} ports resolved",
            report.results.len(),
            total
        );
    }

    print::scan_completed(&report);
    Ok(())
}
