use tracing_subscriber::EnvFilter;

use ds_chess::uci::uci_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    // stdout carries the protocol; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run_stdio_loop()
}
