use {
    anyhow::Context,
    tracing::info,
    tiktok_sentiment_core::{config::Config, models::SentimentLabel},
    crate::{
        data_loading::load_table,
        pipeline::run_pipeline,
        sentiment::SentimentBackend,
        utils::init_logging,
    },
};

mod data_loading;
#[cfg(feature = "local-model")]
mod local_model;
mod merge;
mod output;
mod pipeline;
mod progress;
mod sentiment;
mod stats;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("tiktok comments sentiment analysis");

    let config = Config::load();

    // input is checked before the model is loaded, so a missing file fails fast
    let table = load_table(&config.input).context("failed to load input table")?;

    let classifier = SentimentBackend::from_config(&config.classifier).await
        .context("failed to set up sentiment classifier")?;

    let outcome = run_pipeline(&config, table, &classifier).await?;
    info!(
        "classified {} texts, {} failed",
        outcome.results.len(),
        outcome.summary.count(SentimentLabel::Error),
    );

    Ok(())
}
