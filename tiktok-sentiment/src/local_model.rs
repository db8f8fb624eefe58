use {
    std::panic::{catch_unwind, AssertUnwindSafe},
    anyhow::{anyhow, Result},
    rust_bert::pipelines::sentiment::{SentimentModel, SentimentPolarity},
    tiktok_sentiment_core::models::{Prediction, SentimentLabel},
};

/// DistilBERT fine-tuned on SST-2, running in-process through libtorch.
pub struct LocalSentimentModel {
    model: SentimentModel,
}

impl LocalSentimentModel {
    pub async fn load() -> Result<Self> {
        let model = tokio::task::spawn_blocking(|| SentimentModel::new(Default::default())).await??;

        Ok(Self {
            model,
        })
    }

    pub fn classify(&self, text: &str) -> Result<Prediction> {
        // libtorch errors surface as panics inside rust-bert
        let mut output = catch_unwind(AssertUnwindSafe(|| self.model.predict(&[text])))
            .map_err(|_| anyhow!("sentiment model panicked"))?;

        let sentiment = output.pop().ok_or_else(|| anyhow!("sentiment model returned no output"))?;

        let label = match sentiment.polarity {
            SentimentPolarity::Positive => SentimentLabel::Positive,
            SentimentPolarity::Negative => SentimentLabel::Negative,
        };

        Ok(Prediction {
            label,
            score: sentiment.score,
        })
    }
}
