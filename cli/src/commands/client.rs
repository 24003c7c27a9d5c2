use std::io::ErrorKind;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{error, info, warn};

use crate::terminal::print;

const REPLY_BUFFER_SIZE: usize = 1024;

/// Interactive echo client: one line of stdin per message, replies
/// printed as they arrive, sentinel ends the session.
pub async fn client(host: String, port: u16) -> anyhow::Result<()> {
    let mut stream = match TcpStream::connect((host.as_str(), port)).await {
        Ok(stream) => stream,
        Err(e) if e.kind() == ErrorKind::ConnectionRefused => {
            error!("could not reach the server at {host}:{port}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    info!("connected to server at {host}:{port}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut reply_buf = [0u8; REPLY_BUFFER_SIZE];

    loop {
        print::prompt("Enter message to send (type 'exit' to quit): ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        // An empty line would put nothing on the wire and leave us
        // waiting on a reply that never comes.
        if line.is_empty() {
            continue;
        }

        stream.write_all(line.as_bytes()).await?;

        if line.eq_ignore_ascii_case("exit") {
            info!("exiting the client");
            break;
        }

        let n = stream.read(&mut reply_buf).await?;
        if n == 0 {
            warn!("server closed the connection");
            break;
        }
        println!(
            "Received from server: {}",
            String::from_utf8_lossy(&reply_buf[..n])
        );
    }

    Ok(())
}
