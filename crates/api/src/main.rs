use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bloglist_observability::init();

    let config = bloglist_api::config::ApiConfig::from_env()?;
    let addr = config.bind_addr;
    let app = bloglist_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
