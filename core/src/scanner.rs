//! Drives a validated scan request through the probe layer.
//!
//! Ports are fanned out to at most `concurrency` in-flight probes and the
//! completed results are handed back sorted by port number, whatever order
//! they actually finished in. Cancellation stops new dispatch promptly;
//! probes already in flight run to their own connect-or-timeout.

use std::sync::Arc;

use chrono::Local;
use sweepr_common::config::ScanConfig;
use sweepr_common::policy::ScanRequest;
use sweepr_common::report::{PortResult, ScanReport};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::probe;

/// Invoked after every collected result with the number of ports
/// resolved so far.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

pub struct ScanCoordinator {
    config: ScanConfig,
    cancel: CancellationToken,
    on_progress: Option<ProgressFn>,
}

impl ScanCoordinator {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cancel: CancellationToken::new(),
            on_progress: None,
        }
    }

    /// Ties the coordinator to a caller-supplied cancellation signal.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressFn) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Probes every port in the request's inclusive range and returns the
    /// report, sorted ascending by port.
    ///
    /// If the cancellation token fires mid-scan, no further probes are
    /// dispatched and the partial report holds whatever completed.
    pub async fn scan(&self, request: &ScanRequest) -> ScanReport {
        let started_at = Local::now();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut probes = JoinSet::new();

        'dispatch: for port in request.ports() {
            if self.cancel.is_cancelled() {
                debug!("scan cancelled, stopping dispatch before port {port}");
                break;
            }

            let permit = tokio::select! {
                _ = self.cancel.cancelled() => {
                    debug!("scan cancelled while waiting for a probe slot");
                    break 'dispatch;
                }
                permit = semaphore.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_closed) => break 'dispatch,
                },
            };

            let host = request.host().to_owned();
            let probe_timeout = self.config.probe_timeout;
            probes.spawn(async move {
                let result = probe::probe(&host, port, probe_timeout).await;
                drop(permit);
                result
            });

            if let Some(delay) = self.config.dispatch_delay {
                tokio::time::sleep(delay).await;
            }
        }

        let mut results: Vec<PortResult> = Vec::with_capacity(request.port_count());
        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok(result) => {
                    results.push(result);
                    if let Some(on_progress) = &self.on_progress {
                        on_progress(results.len());
                    }
                }
                Err(e) => error!("probe task failed: {e}"),
            }
        }

        results.sort_unstable_by_key(|result| result.port);

        ScanReport {
            request: request.clone(),
            started_at,
            finished_at: Local::now(),
            results,
        }
    }
}
