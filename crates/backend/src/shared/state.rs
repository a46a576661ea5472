use std::sync::Arc;

use contracts::domain::a001_reference_data::ReferenceData;

use super::config::Config;
use crate::domain::a001_reference_data::service as reference_service;

/// Общее состояние обработчиков. После старта не меняется.
pub struct AppState {
    pub config: Config,
    /// Версия ресурсов для cache busting
    pub asset_version: u64,
    pub reference: ReferenceData,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let asset_version = config
            .assets
            .version
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().max(0) as u64);
        let reference = reference_service::load(config.reference_file().as_deref())?;

        tracing::info!(
            "Reference data: {} categories, asset version {}",
            reference.categories.len(),
            asset_version
        );

        Ok(Arc::new(Self {
            config,
            asset_version,
            reference,
        }))
    }
}
