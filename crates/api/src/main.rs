use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gamesplay_observability::init();

    let app = gamesplay_api::app::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3030")
        .await
        .context("failed to bind 0.0.0.0:3030")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")
}
