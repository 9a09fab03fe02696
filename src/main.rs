mod config;
mod prober;
mod util;

use config::ProbeSettings;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Init tracing; stdout carries only the report line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("port_probe=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let settings = match ProbeSettings::from_args(std::env::args().skip(1))? {
        Some(settings) => settings,
        None => {
            println!("Usage: port-probe <host> <port>");
            std::process::exit(1);
        }
    };

    let outcome =
        prober::tcp_connect::probe_tcp(&settings.host, settings.port, settings.timeout).await;

    if outcome.is_open() {
        println!("Port {} is open on {}", settings.port, settings.host);
    } else {
        println!("Port {} is closed on {}", settings.port, settings.host);
    }

    Ok(())
}
