use mimalloc::MiMalloc;
use scoop_book::config::Config;
use scoop_book::db::RecipeStorage;
use scoop_book::render::Renderer;
use scoop_book::{ScoopError, ScoopState, scoop_router};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), ScoopError> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        listen_addr = %cfg.basic.listen_addr,
        database_url = %cfg.storage.database_url,
        static_dir = %cfg.web.static_dir.display(),
        seed_sample_data = cfg.storage.seed_sample_data,
        loglevel = %cfg.basic.loglevel
    );

    // The server never starts without a migrated database.
    let storage = RecipeStorage::connect(&cfg.storage.database_url, cfg.storage.max_connections)
        .await
        .inspect_err(|e| error!(error = %e, "failed to open database"))?;
    storage
        .init_schema()
        .await
        .inspect_err(|e| error!(error = %e, "failed to migrate schema"))?;

    if cfg.storage.seed_sample_data {
        storage
            .seed_if_empty()
            .await
            .inspect_err(|e| error!(error = %e, "failed to seed sample recipes"))?;
    }

    if !cfg.web.static_dir.is_dir() {
        warn!(path = %cfg.web.static_dir.display(), "static directory not found; /static will 404");
    }

    let renderer = Renderer::new().inspect_err(|e| error!(error = %e, "failed to compile templates"))?;
    let state = ScoopState::new(storage.clone(), renderer);
    let app = scoop_router(state, &cfg.web.static_dir);

    let listener = TcpListener::bind(cfg.basic.listen_addr.as_str())
        .await
        .inspect_err(|e| error!(addr = %cfg.basic.listen_addr, error = %e, "failed to bind"))?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.pool().close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
