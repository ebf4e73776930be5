use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tree_menu::{
    application::{
        ports::{routes::RouteResolver, time::Clock, util::SlugGenerator},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::menu::{MenuItemRepository, MenuRepository},
    infrastructure::{
        database,
        repositories::{SqliteMenuItemRepository, SqliteMenuRepository},
        routes::StaticRouteTable,
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .with_context(|| format!("connecting to {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let menu_repo: Arc<dyn MenuRepository> =
        Arc::new(SqliteMenuRepository::new(Arc::clone(&pool)));
    let item_repo: Arc<dyn MenuItemRepository> =
        Arc::new(SqliteMenuItemRepository::new(Arc::clone(&pool)));

    let route_table = StaticRouteTable::parse(config.named_routes()).context("NAMED_ROUTES")?;
    tracing::info!(routes = route_table.len(), "named routes loaded");
    let routes: Arc<dyn RouteResolver> = Arc::new(route_table);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        menu_repo, item_repo, routes, clock, slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
