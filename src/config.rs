use anyhow::Result;
use std::time::Duration;

/// Connect timeout applied when the invocation does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl ProbeSettings {
    /// Build settings from the arguments after the program name.
    ///
    /// `Ok(None)` means too few arguments were supplied and the caller
    /// should print the usage line. A malformed or out-of-range port is
    /// an error, not a closed report.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let (host, port) = match (args.next(), args.next()) {
            (Some(host), Some(port)) => (host, port),
            _ => return Ok(None),
        };

        let port = port
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid port {:?}: {}", port, e))?;

        Ok(Some(Self {
            host,
            port,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }))
    }
}
