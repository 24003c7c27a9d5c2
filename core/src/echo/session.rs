//! Per-connection echo session.
//!
//! A session loops between awaiting a message and answering it: each raw,
//! newline-free message is echoed back with the `Echo: ` prefix. End of
//! stream or a message equal to the exit sentinel (case-insensitive, whole
//! message) closes the session, the sentinel silently. I/O errors tear
//! down only this session.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Largest message a session reads in one go.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Prepended verbatim to every echoed message.
pub const REPLY_PREFIX: &str = "Echo: ";

/// Whole-message token that ends the session without a reply.
pub const EXIT_SENTINEL: &str = "exit";

/// What the session does with one received message.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Reply(Vec<u8>),
    CloseSilently,
}

fn next_step(raw: &[u8]) -> Step {
    let text = String::from_utf8_lossy(raw);
    if text.eq_ignore_ascii_case(EXIT_SENTINEL) {
        return Step::CloseSilently;
    }

    let mut reply = Vec::with_capacity(REPLY_PREFIX.len() + raw.len());
    reply.extend_from_slice(REPLY_PREFIX.as_bytes());
    reply.extend_from_slice(raw);
    Step::Reply(reply)
}

/// Runs one accepted connection to completion.
pub async fn run(mut stream: TcpStream, peer: SocketAddr) -> anyhow::Result<()> {
    let mut buf = [0u8; READ_BUFFER_SIZE];

    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            debug!("{peer} closed the connection");
            break;
        }

        match next_step(&buf[..n]) {
            Step::CloseSilently => {
                info!("{peer} ended the session");
                break;
            }
            Step::Reply(reply) => stream.write_all(&reply).await?,
        }
    }

    Ok(())
}
