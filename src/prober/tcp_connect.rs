use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::prober::Outcome;
use crate::util::resolve_host_to_ip;

/// Single TCP reachability probe. Every failure mode (refusal, timeout,
/// resolution failure, unreachability) collapses to `Closed`; this
/// function never returns an error.
pub async fn probe_tcp(host: &str, port: u16, connect_timeout: Duration) -> Outcome {
    match try_connect(host, port, connect_timeout).await {
        Ok(()) => Outcome::Open,
        Err(e) => {
            debug!("tcp connect {}:{} failed: {:?}", host, port, e);
            Outcome::Closed
        }
    }
}

async fn try_connect(host: &str, port: u16, connect_timeout: Duration) -> Result<()> {
    // Resolution happens before the connect bound applies.
    let ip = resolve_host_to_ip(host).await?;
    let addr = SocketAddr::new(ip, port);
    let conn_fut = TcpStream::connect(addr);
    let conn = timeout(connect_timeout, conn_fut).await??;
    drop(conn);
    Ok(())
}
