/**
 * Postgate Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum application.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = postgate::backend::server::load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!("Server initialization started");

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = postgate::backend::server::create_app(config);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin postgate-server --features ssr");
    std::process::exit(1);
}
