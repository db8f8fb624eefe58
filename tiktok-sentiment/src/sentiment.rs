use {
    anyhow::Result,
    tracing::{debug, info},
    tiktok_sentiment_core::{
        config::{ClassifierBackend, ClassifierConfig},
        inference::InferenceClient,
        models::{ClassificationResult, Prediction},
    },
    crate::{
        progress::Progress,
        utils::truncate_chars,
    },
};

#[cfg(feature = "local-model")]
use crate::local_model::LocalSentimentModel;

/// Anything that can put a sentiment label on a single text.
pub trait Classifier {
    async fn classify(&self, text: &str) -> Result<Prediction>;
}

pub enum SentimentBackend {
    Remote(InferenceClient),
    #[cfg(feature = "local-model")]
    Local(LocalSentimentModel),
}

impl SentimentBackend {
    pub async fn from_config(config: &ClassifierConfig) -> Result<Self> {
        match config.backend {
            ClassifierBackend::Remote => {
                let client = InferenceClient::new(config);
                info!("using remote sentiment model at {}", client.endpoint());
                Ok(Self::Remote(client))
            },
            #[cfg(feature = "local-model")]
            ClassifierBackend::Local => {
                info!("loading local sentiment model");
                Ok(Self::Local(LocalSentimentModel::load().await?))
            },
            #[cfg(not(feature = "local-model"))]
            ClassifierBackend::Local => Err(tiktok_sentiment_core::error::PipelineError::UnsupportedBackend("local".to_owned()).into()),
        }
    }
}

impl Classifier for SentimentBackend {
    async fn classify(&self, text: &str) -> Result<Prediction> {
        match self {
            Self::Remote(client) => client.classify(text).await,
            #[cfg(feature = "local-model")]
            Self::Local(model) => model.classify(text),
        }
    }
}

/// Classifies the first `max_chars` characters of `text`. Failures are not
/// propagated, they turn into an `ERROR` result with zero confidence.
pub async fn classify_text<C: Classifier>(classifier: &C, text: String, max_chars: usize) -> ClassificationResult {
    match classifier.classify(truncate_chars(&text, max_chars)).await {
        Ok(prediction) => prediction.into_result(text),
        Err(err) => {
            debug!("failed to classify text: {:#}", err);
            ClassificationResult::failed(text)
        }
    }
}

pub async fn run_sentiment_step<C: Classifier>(classifier: &C, texts: Vec<String>, max_chars: usize) -> Vec<ClassificationResult> {
    let mut progress = Progress::new("classifying texts".to_owned(), texts.len() as u64);
    let mut results = Vec::with_capacity(texts.len());

    for text in texts {
        results.push(classify_text(classifier, text, max_chars).await);
        progress.update();
    }

    progress.finish();
    results
}
