/**
 * Server Initialization
 *
 * This module builds the Axum application: it creates the three empty
 * stores from the configuration, wraps them in `AppState`, and hands the
 * state to the router.
 *
 * All state lives for the lifetime of the process and starts empty on every
 * launch.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Example
///
/// ```rust,no_run
/// use postgate::backend::server::create_app;
/// use postgate::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let app = create_app(AppConfig::default());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!(
        "Initializing postgate (bcrypt cost {})",
        config.bcrypt_cost
    );

    let app_state = AppState::new(config);
    create_router(app_state)
}
