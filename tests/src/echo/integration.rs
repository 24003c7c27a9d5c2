#![cfg(test)]
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use sweepr_core::echo;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;

async fn start_echo_service() -> (SocketAddr, CancellationToken) {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
    let listener = echo::bind(addr).expect("loopback bind should succeed");
    let local_addr = listener.local_addr().unwrap();

    let cancel = CancellationToken::new();
    let serve_cancel = cancel.clone();
    tokio::spawn(async move {
        echo::serve(listener, serve_cancel)
            .await
            .expect("serve loop should exit cleanly");
    });

    (local_addr, cancel)
}

#[tokio::test]
async fn session_echoes_then_closes_on_exit() {
    let (addr, _cancel) = start_echo_service().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    let mut buf = [0u8; 1024];

    client.write_all(b"hello").await.unwrap();
    let n = client.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"Echo: hello");

    client.write_all(b"exit").await.unwrap();
    let n = client.read(&mut buf).await.unwrap();
    assert_eq!(n, 0, "no reply after the exit sentinel, just end of stream");
}

#[tokio::test]
async fn exit_sentinel_is_case_insensitive() {
    let (addr, _cancel) = start_echo_service().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(b"EXIT").await.unwrap();

    let mut buf = [0u8; 16];
    let n = client.read(&mut buf).await.unwrap();
    assert_eq!(n, 0);
}

#[tokio::test]
async fn concurrent_sessions_do_not_cross_talk() {
    let (addr, _cancel) = start_echo_service().await;

    let mut first = TcpStream::connect(addr).await.unwrap();
    let mut second = TcpStream::connect(addr).await.unwrap();

    second.write_all(b"from second").await.unwrap();
    first.write_all(b"from first").await.unwrap();

    let mut buf = [0u8; 1024];
    let n = first.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"Echo: from first");

    let n = second.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"Echo: from second");
}

#[tokio::test]
async fn shutdown_stops_accepting_but_lets_sessions_finish() {
    let (addr, cancel) = start_echo_service().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    let mut buf = [0u8; 64];

    // Session must be established (first echo seen) before shutdown.
    client.write_all(b"ping").await.unwrap();
    let n = client.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"Echo: ping");

    cancel.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The live session keeps working to its own termination.
    client.write_all(b"still here").await.unwrap();
    let n = client.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"Echo: still here");

    // New connections find the listening socket gone.
    let refused = TcpStream::connect(addr).await;
    assert!(refused.is_err(), "listener should no longer accept");
}

#[tokio::test]
async fn client_disconnect_only_ends_that_session() {
    let (addr, _cancel) = start_echo_service().await;

    let abrupt = TcpStream::connect(addr).await.unwrap();
    drop(abrupt);

    // The listener is still serving after the other session died.
    let mut survivor = TcpStream::connect(addr).await.unwrap();
    survivor.write_all(b"alive").await.unwrap();

    let mut buf = [0u8; 64];
    let n = survivor.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"Echo: alive");
}
