pub mod auth;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod pagination;
pub mod parser;
pub mod pipeline;
pub mod query;
pub mod readability;
pub mod record_manager;
pub mod render;
pub mod routes;
pub mod segment;
pub mod state;
pub mod translator;
pub mod types;

pub use config::Config;
pub use error::ApiError;
pub use fetcher::Fetcher;
pub use pagination::Pagination;
pub use parser::FeedParser;
pub use pipeline::IngestionPipeline;
pub use query::{ListingPage, QueryService};
pub use record_manager::RecordManager;
pub use routes::router;
pub use state::AppState;
pub use translator::{AwsTranslator, Translate, TranslatorAdapter};
pub use types::*;
