//! Result types produced by a scan.

use chrono::{DateTime, Local};

use crate::policy::ScanRequest;

/// Classification of a single probed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    /// A TCP connection was established (and immediately closed).
    Open,
    /// The connection was refused or the probe timed out.
    Closed,
    /// The probe failed for another reason (resolution failure,
    /// permission error, ...). The detail string says which.
    Error,
}

/// Outcome of one probe. Produced exactly once per port, immutable
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortResult {
    pub port: u16,
    pub state: PortState,
    pub detail: Option<String>,
}

impl PortResult {
    pub fn open(port: u16) -> Self {
        Self {
            port,
            state: PortState::Open,
            detail: None,
        }
    }

    pub fn closed(port: u16) -> Self {
        Self {
            port,
            state: PortState::Closed,
            detail: None,
        }
    }

    pub fn error(port: u16, detail: String) -> Self {
        Self {
            port,
            state: PortState::Error,
            detail: Some(detail),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

/// Everything a finished (or cancelled) scan produced.
///
/// `results` holds exactly one entry per resolved port, sorted ascending.
/// A cancelled scan yields a partial report with whatever completed.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub request: ScanRequest,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub results: Vec<PortResult>,
}

impl ScanReport {
    /// Ports classified as open, in ascending order.
    pub fn open_ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.results.iter().filter(|r| r.is_open()).map(|r| r.port)
    }
}
