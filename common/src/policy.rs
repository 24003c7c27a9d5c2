//! # Scan Policy
//!
//! Gatekeeping for scan requests.
//!
//! Every request is checked against a fixed allow-list of hosts and the
//! inclusive port range bounds before a single probe goes out. Validation
//! is a pure function; the allow-list is the only process-wide constant
//! and is never mutated.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Hosts that may be scanned. Exact string match, no DNS resolution,
/// no wildcards.
pub const ALLOWED_HOSTS: [&str; 3] = ["127.0.0.1", "localhost", "scanme.nmap.org"];

/// Highest valid TCP port.
pub const MAX_PORT: u32 = 65_535;

/// A scan request that has passed policy validation.
///
/// Only [`validate`] constructs one; the fields are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    host: String,
    start_port: u16,
    end_port: u16,
}

impl ScanRequest {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn start_port(&self) -> u16 {
        self.start_port
    }

    pub fn end_port(&self) -> u16 {
        self.end_port
    }

    /// The inclusive range of ports this request covers.
    pub fn ports(&self) -> RangeInclusive<u16> {
        self.start_port..=self.end_port
    }

    pub fn port_count(&self) -> usize {
        usize::from(self.end_port - self.start_port) + 1
    }
}

/// Why a scan request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("scanning host '{0}' is not allowed")]
    HostNotAllowed(String),
    #[error("port {0} is outside the valid range 0-65535")]
    PortOutOfRange(u32),
    #[error("starting port {start} cannot be greater than ending port {end}")]
    RangeInverted { start: u16, end: u16 },
}

/// Validates a requested scan against the allow-list and port bounds.
///
/// Ports are taken as `u32` so out-of-range values reach the policy and
/// come back as [`PolicyViolation::PortOutOfRange`] instead of being
/// unrepresentable at the call site.
pub fn validate(
    host: &str,
    start_port: u32,
    end_port: u32,
) -> Result<ScanRequest, PolicyViolation> {
    if !ALLOWED_HOSTS.contains(&host) {
        return Err(PolicyViolation::HostNotAllowed(host.to_string()));
    }
    if start_port > MAX_PORT {
        return Err(PolicyViolation::PortOutOfRange(start_port));
    }
    if end_port > MAX_PORT {
        return Err(PolicyViolation::PortOutOfRange(end_port));
    }

    let (start_port, end_port) = (start_port as u16, end_port as u16);
    if start_port > end_port {
        return Err(PolicyViolation::RangeInverted {
            start: start_port,
            end: end_port,
        });
    }

    Ok(ScanRequest {
        host: host.to_string(),
        start_port,
        end_port,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
