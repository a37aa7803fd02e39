//! Probe listener transport
//!
//! Plain TCP; the supervisor decides when the socket comes up and when it is
//! released again after a drain.

use axum::Router;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve the probe routes on TCP until `shutdown` fires.
pub async fn serve_probes(
    addr: SocketAddr,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), hyper::Error> {
    let server = axum::Server::try_bind(&addr)?;

    info!("probe listener on TCP {}", addr);

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
