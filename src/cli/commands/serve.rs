//! Serve the HTTP API

use ecoinspect::config::Config;
use ecoinspect::output::OutputMode;

/// Run the HTTP API server
#[cfg(feature = "server")]
pub fn serve(
    host: Option<&str>,
    port: Option<u16>,
    config: &Config,
    _mode: OutputMode,
) -> anyhow::Result<()> {
    use ecoinspect::api::ApiContext;

    let ctx = ApiContext::new(config.classifier()?, config.route_table());
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);

    println!("Serving ecoinspect API on http://{host}:{port}/api");
    crate::server::tiny_http::serve(&ctx, host, port)
}

/// Run the HTTP API server
#[cfg(not(feature = "server"))]
pub fn serve(
    _host: Option<&str>,
    _port: Option<u16>,
    _config: &Config,
    _mode: OutputMode,
) -> anyhow::Result<()> {
    anyhow::bail!("ecoinspect was built without the `server` feature")
}
