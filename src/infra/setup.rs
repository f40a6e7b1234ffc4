use crate::{
    adapters::{http::app_state::AppState, persistence::memory::InMemoryPersistence},
    infra::{config::AppConfig, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the application state, selecting the store backend once at startup:
/// Postgres when DATABASE_URL is set and reachable, the in-memory store
/// otherwise. The fallback decision is made here, not hidden inside the
/// store.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    init_tracing();

    let config = AppConfig::from_env();

    let repo: Arc<dyn WaitlistRepo> = match &config.database_url {
        Some(database_url) => match postgres_persistence(database_url).await {
            Ok(persistence) => {
                info!("Using database storage for waitlist signups");
                Arc::new(persistence)
            }
            Err(err) => {
                warn!(error = %err, "Database connection failed, using in-memory storage");
                Arc::new(InMemoryPersistence::new())
            }
        },
        None => {
            warn!("DATABASE_URL not set - using in-memory storage (data will not persist)");
            Arc::new(InMemoryPersistence::new())
        }
    };

    let waitlist_use_cases = WaitlistUseCases::new(repo.clone());

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        waitlist_repo: repo,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stabilimetric_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
