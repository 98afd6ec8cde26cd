use crate::extractor::ContentExtractor;
use crate::fetcher::Fetcher;
use crate::parser::FeedParser;
use crate::record_manager::RecordManager;
use crate::translator::TranslatorAdapter;
use crate::types::{FeedEntry, IngestSummary, Record, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// What happened to a single feed entry during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Skipped,
    Persisted,
}

/// Pulls the configured feed and stores every entry not seen before,
/// with its body extracted and translated.
///
/// Runs are single-flight: a second call to [`IngestionPipeline::run`]
/// waits for the one in progress to finish.
pub struct IngestionPipeline {
    feed_url: String,
    fetcher: Arc<Fetcher>,
    extractor: ContentExtractor,
    translator: TranslatorAdapter,
    records: Arc<RecordManager>,
    run_lock: Mutex<()>,
}

impl IngestionPipeline {
    pub fn new(
        feed_url: String,
        fetcher: Arc<Fetcher>,
        translator: TranslatorAdapter,
        records: Arc<RecordManager>,
    ) -> Self {
        Self {
            feed_url,
            extractor: ContentExtractor::new(fetcher.clone()),
            fetcher,
            translator,
            records,
            run_lock: Mutex::new(()),
        }
    }

    /// Ingest the feed once.
    ///
    /// Entries are handled oldest first. The first extraction or translation
    /// failure ends the run; records stored before it are kept.
    pub async fn run(&self) -> Result<IngestSummary> {
        let _guard = self.run_lock.lock().await;
        info!("Starting ingestion run for {}", self.feed_url);

        let content = self.fetcher.fetch_feed(&self.feed_url).await?;
        let entries = FeedParser::parse_entries(&self.feed_url, &content)?;

        let mut summary = IngestSummary {
            total_entries: entries.len(),
            new_entries: 0,
        };

        for entry in entries.into_iter().rev() {
            if self.ingest_entry(entry).await? == EntryOutcome::Persisted {
                summary.new_entries += 1;
            }
        }

        info!(
            "Ingestion run finished: {} entries, {} new",
            summary.total_entries, summary.new_entries
        );
        Ok(summary)
    }

    async fn ingest_entry(&self, entry: FeedEntry) -> Result<EntryOutcome> {
        if self.records.exists_by_link(&entry.link).await? {
            debug!("Skipping known entry {}", entry.link);
            return Ok(EntryOutcome::Skipped);
        }

        let source_body = self.extractor.extract(&entry.link).await?;
        let mut body = self.translator.translate_body(&source_body).await?;
        body.insert(self.translator.source_language().to_string(), source_body);

        let record = Record::new(entry, body);
        if !self.records.insert(&record).await? {
            debug!("Entry {} was stored concurrently, skipping", record.link);
            return Ok(EntryOutcome::Skipped);
        }

        info!(
            "Stored {} ({}) in {} languages",
            record.title,
            record.link,
            record.body.len()
        );
        Ok(EntryOutcome::Persisted)
    }
}
