//! TCP echo backend.
//!
//! One accept loop hands each connection to an independent [`session`]
//! task, so a stalled or misbehaving client never blocks the others.
//! Cancellation stops new accepts and closes the listening socket;
//! sessions already underway run to their own natural termination.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

pub mod session;

const LISTEN_BACKLOG: u32 = 128;

/// Binds `addr` for the echo service with address reuse enabled.
pub fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {addr}"))?;
    Ok(socket.listen(LISTEN_BACKLOG)?)
}

/// Accepts connections until the token is cancelled, spawning one
/// session task per client.
pub async fn serve(listener: TcpListener, cancel: CancellationToken) -> anyhow::Result<()> {
    let local_addr = listener.local_addr()?;
    info!("echo service listening on {local_addr}");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("echo service on {local_addr} shutting down");
                break;
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        info!("accepted connection from {peer}");
                        tokio::spawn(async move {
                            if let Err(e) = session::run(stream, peer).await {
                                error!("session with {peer} failed: {e}");
                            }
                        });
                    }
                    // A failed accept only costs that one client.
                    Err(e) => warn!("failed to accept connection: {e}"),
                }
            }
        }
    }

    Ok(())
}
