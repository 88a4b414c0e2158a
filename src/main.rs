use anyhow::Context;
use roundpnl::datasource::discover_json_files;
use roundpnl::{api, config::Config, ingest_sources, DocumentSource, FileSource, Session};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("configuration error")?;

    let session = load_initial_session(&config).await?;
    let app = api::create_router(api::AppState::new(session));

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Load `INPUT_FILES` then the `INPUT_DIR` contents into a fresh session.
async fn load_initial_session(config: &Config) -> anyhow::Result<Session> {
    let mut sources: Vec<Arc<dyn DocumentSource>> = config
        .input_files
        .iter()
        .map(|path| Arc::new(FileSource::new(path)) as Arc<dyn DocumentSource>)
        .collect();

    if let Some(dir) = &config.input_dir {
        let discovered = discover_json_files(dir)
            .await
            .with_context(|| format!("failed to list {}", dir.display()))?;
        sources.extend(
            discovered
                .into_iter()
                .map(|source| Arc::new(source) as Arc<dyn DocumentSource>),
        );
    }

    let mut session = Session::new();
    if sources.is_empty() {
        tracing::info!("no input documents configured; starting with an empty dataset");
        return Ok(session);
    }

    let report = ingest_sources(&sources, chrono::Utc::now()).await;
    let failures = session.load(report);
    if !failures.is_empty() {
        tracing::warn!(skipped = failures.len(), "some input documents were not loaded");
    }
    Ok(session)
}
