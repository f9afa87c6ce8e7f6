use std::sync::Arc;

use crate::config::{Config, LogFormat};
use contactbox_core::contacts::{ContactService, ContactServiceTrait};
use contactbox_storage_sqlite::{contacts::ContactRepository, db};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub contact_service: Arc<dyn ContactServiceTrait + Send + Sync>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let contact_repository = Arc::new(ContactRepository::new(pool.clone(), writer));
    let contact_service: Arc<dyn ContactServiceTrait + Send + Sync> =
        Arc::new(ContactService::new(contact_repository));

    Ok(Arc::new(AppState { contact_service }))
}
