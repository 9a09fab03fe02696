// Helper functions, e.g. host/ip resolution.

use anyhow::Result;
use std::net::IpAddr;

pub async fn resolve_host_to_ip(host: &str) -> Result<IpAddr> {
    // First try to parse as IP address
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    // If parsing fails, resolve via DNS
    let addr = format!("{}:0", host);
    let mut addrs = tokio::net::lookup_host(&addr).await?;
    Ok(addrs
        .next()
        .ok_or_else(|| anyhow::anyhow!("Could not resolve hostname: {}", host))?
        .ip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn ip_literal_short_circuits_dns() {
        let ip = resolve_host_to_ip("192.0.2.1").await.unwrap();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)));
    }

    #[tokio::test]
    async fn localhost_resolves() {
        let ip = resolve_host_to_ip("localhost").await.unwrap();
        assert!(ip.is_loopback());
    }

    #[tokio::test]
    async fn unresolvable_name_is_an_error() {
        assert!(resolve_host_to_ip("no-such-host.invalid").await.is_err());
    }
}
