use {
    anyhow::Result,
    tracing::info,
    tiktok_sentiment_core::{
        config::Config,
        models::ClassificationResult,
        table::Table,
    },
    crate::{
        data_loading::extract_texts,
        merge::merge_sentiment,
        output::{write_results, write_table},
        sentiment::{Classifier, run_sentiment_step},
        stats::{SentimentSummary, report_summary},
    },
};

pub struct PipelineOutcome {
    pub results: Vec<ClassificationResult>,
    pub summary: SentimentSummary,
}

/// Classifies the text column of an already loaded table, reports the
/// statistics and writes both output files.
pub async fn run_pipeline<C: Classifier>(config: &Config, table: Table, classifier: &C) -> Result<PipelineOutcome> {
    let text_column = config.input.text_column();
    let texts = extract_texts(&table, text_column, &config.report)?;

    info!("starting sentiment analysis (this may take a few minutes)");
    let results = run_sentiment_step(classifier, texts, config.classifier.max_chars()).await;

    let summary = SentimentSummary::from_results(&results);
    report_summary(&summary, &results, &config.report);

    write_results(&config.output.results_path(), &results)?;

    let merged = merge_sentiment(&table, text_column, &results)?;
    write_table(&config.output.merged_path(), &merged)?;

    info!("analysis complete");

    Ok(PipelineOutcome {
        results,
        summary,
    })
}
