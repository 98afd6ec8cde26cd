//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::pipeline::IngestionPipeline;
use crate::query::QueryService;
use crate::record_manager::RecordManager;
use crate::translator::{AwsTranslator, Translate, TranslatorAdapter};
use crate::types::Result;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    pub pipeline: Arc<IngestionPipeline>,

    pub query: Arc<QueryService>,
}

impl AppState {
    /// Wire the components around an existing store and translation provider.
    pub fn new(
        config: Config,
        records: Arc<RecordManager>,
        translator: Arc<dyn Translate>,
    ) -> Result<Self> {
        let fetcher = Arc::new(Fetcher::new(config.fetch.clone())?);
        let adapter = TranslatorAdapter::new(
            translator,
            config.source_language.clone(),
            config.target_languages.clone(),
        );

        let pipeline = IngestionPipeline::new(
            config.feed_url.clone(),
            fetcher,
            adapter,
            records.clone(),
        );
        let query = QueryService::new(records, config.page_size);

        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            query: Arc::new(query),
        })
    }

    /// Open the configured store and connect to Amazon Translate.
    pub async fn from_config(config: Config) -> Result<Self> {
        let records = Arc::new(RecordManager::new(&config.database_url).await?);
        let translator = AwsTranslator::from_settings(&config.translation).await;

        tracing::info!(
            database_url = %config.database_url,
            provider = %translator.provider_name(),
            "application state initialized"
        );

        Self::new(config, records, Arc::new(translator))
    }
}
