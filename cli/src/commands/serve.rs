use anyhow::Context;
use sweepr_core::echo;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn serve(host: String, port: u16) -> anyhow::Result<()> {
    let addr = tokio::net::lookup_host((host.as_str(), port))
        .await
        .with_context(|| format!("could not resolve bind address {host}:{port}"))?
        .next()
        .with_context(|| format!("no usable address for {host}:{port}"))?;

    let listener = echo::bind(addr)?;

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            ctrl_c_cancel.cancel();
        }
    });

    echo::serve(listener, cancel).await
}
