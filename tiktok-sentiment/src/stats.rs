use {
    tracing::info,
    tiktok_sentiment_core::{
        config::ReportConfig,
        models::{ClassificationResult, SentimentLabel},
    },
    crate::utils::truncate_chars,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentSummary {
    // most frequent label first, ties in order of first appearance
    counts: Vec<(SentimentLabel, usize)>,
    total: usize,
}

impl SentimentSummary {
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();

        for result in results {
            match counts.iter_mut().find(|(label, _)| *label == result.sentiment) {
                Some((_, count)) => *count += 1,
                None => counts.push((result.sentiment, 1)),
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            counts,
            total: results.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn counts(&self) -> &[(SentimentLabel, usize)] {
        &self.counts
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Share of results with `label`, in percent. Zero when there are no results.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        (self.count(label) as f64) / (self.total as f64) * 100.0
    }
}

/// Up to `n` results labelled `label`, most confident first. Equal confidences
/// keep their original order.
pub fn top_confident(results: &[ClassificationResult], label: SentimentLabel, n: usize) -> Vec<&ClassificationResult> {
    let mut matching: Vec<&ClassificationResult> = results.iter()
        .filter(|result| result.sentiment == label)
        .collect();

    matching.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    matching.truncate(n);
    matching
}

pub fn report_summary(summary: &SentimentSummary, results: &[ClassificationResult], config: &ReportConfig) {
    info!("=== sentiment statistics ===");
    for (label, count) in summary.counts() {
        info!("{:<10} {}", label.as_str(), count);
    }

    info!("positive: {:.1}%", summary.percentage(SentimentLabel::Positive));
    info!("negative: {:.1}%", summary.percentage(SentimentLabel::Negative));
    if summary.count(SentimentLabel::Error) > 0 {
        info!("failed: {:.1}%", summary.percentage(SentimentLabel::Error));
    }

    for label in [SentimentLabel::Positive, SentimentLabel::Negative] {
        info!("=== most confident {} samples (top {}) ===", label, config.top_n);
        for result in top_confident(results, label, config.top_n) {
            info!("confidence: {:.2}%", result.confidence * 100.0);
            info!("text: {}...", truncate_chars(&result.text, config.sample_chars));
            info!("{}", "-".repeat(50));
        }
    }
}
