#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::error::ServerError> {
    use leptos::prelude::*;
    use portfolio_site::{app::router, error::ServerError};
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    tracing::info!(
        "listening on http://{} (built {})",
        &addr,
        env!("BUILD_TIME")
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
