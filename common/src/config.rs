use std::time::Duration;

/// Connect timeout applied to a probe when the caller does not override it.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound on in-flight probes when the caller does not override it.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Knobs for a single scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of probes in flight at once.
    pub concurrency: usize,
    /// Connect timeout applied to every probe.
    pub probe_timeout: Duration,
    /// Optional pause between probe dispatches, for targets that
    /// dislike bursts. `None` disables pacing entirely.
    pub dispatch_delay: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            dispatch_delay: None,
        }
    }
}
