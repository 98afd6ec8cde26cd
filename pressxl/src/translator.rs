use crate::config::TranslationSettings;
use crate::segment::split_sentences;
use crate::types::{PressError, Result};
use async_trait::async_trait;
use aws_sdk_translate::config::{Credentials, Region};
use aws_sdk_translate::error::DisplayErrorContext;
use aws_sdk_translate::Client;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A machine translation provider, called once per sentence.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Name used in logs
    fn provider_name(&self) -> String;

    /// Translate a single piece of text from `source` into `target`.
    async fn translate_text(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Amazon Translate backed provider.
pub struct AwsTranslator {
    client: Client,
}

impl AwsTranslator {
    pub async fn from_settings(settings: &TranslationSettings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));

        if let Some(credentials) = &settings.credentials {
            loader = loader.credentials_provider(Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.expose().to_string(),
                None,
                None,
                "pressxl-config",
            ));
        }

        let sdk_config = loader.load().await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl Translate for AwsTranslator {
    fn provider_name(&self) -> String {
        "Amazon Translate".to_string()
    }

    async fn translate_text(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source)
            .target_language_code(target)
            .send()
            .await
            .map_err(|e| PressError::Translation {
                source_language: source.to_string(),
                target_language: target.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output.translated_text().to_string())
    }
}

/// Translates an extracted body into every configured target language.
pub struct TranslatorAdapter {
    translator: Arc<dyn Translate>,
    source_language: String,
    target_languages: Vec<String>,
}

impl TranslatorAdapter {
    pub fn new(
        translator: Arc<dyn Translate>,
        source_language: String,
        target_languages: Vec<String>,
    ) -> Self {
        Self {
            translator,
            source_language,
            target_languages,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_languages(&self) -> &[String] {
        &self.target_languages
    }

    /// Returns one body per target language, in configuration order.
    ///
    /// Each sentence is translated on its own and the results are joined with
    /// a single space. The first provider failure aborts the whole body.
    pub async fn translate_body(&self, body: &str) -> Result<BTreeMap<String, String>> {
        let sentences = split_sentences(body);
        let mut bodies = BTreeMap::new();

        for language in &self.target_languages {
            info!(
                "Translating {} sentences into {} via {}",
                sentences.len(),
                language,
                self.translator.provider_name()
            );
            let translated = self.translate_sentences(&sentences, language).await?;
            bodies.insert(language.clone(), translated.join(" "));
        }

        Ok(bodies)
    }

    async fn translate_sentences(&self, sentences: &[String], target: &str) -> Result<Vec<String>> {
        let mut translated = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let text = self
                .translator
                .translate_text(sentence, &self.source_language, target)
                .await?;
            translated.push(text);
        }
        debug!("Translated {} sentences into {}", translated.len(), target);
        Ok(translated)
    }
}
