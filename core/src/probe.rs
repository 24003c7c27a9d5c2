//! Single TCP connect probes.

use std::io;
use std::time::Duration;

use sweepr_common::report::PortResult;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Makes exactly one connect attempt against `(host, port)` and classifies
/// the outcome.
///
/// * connection established → [`Open`](sweepr_common::report::PortState::Open)
/// * refused or timed out → [`Closed`](sweepr_common::report::PortState::Closed)
/// * anything else (resolution failure, permission error, ...) →
///   [`Error`](sweepr_common::report::PortState::Error) with a detail string
///
/// The connection, if established, is dropped before this returns. No
/// retries; retry policy belongs to the caller.
pub async fn probe(host: &str, port: u16, probe_timeout: Duration) -> PortResult {
    match timeout(probe_timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            PortResult::open(port)
        }
        Ok(Err(e)) => match e.kind() {
            io::ErrorKind::ConnectionRefused | io::ErrorKind::TimedOut => PortResult::closed(port),
            _ => PortResult::error(port, e.to_string()),
        },
        Err(_elapsed) => PortResult::closed(port),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
