use {
    std::collections::HashMap,
    tiktok_sentiment_core::{
        error::Result,
        models::ClassificationResult,
        table::Table,
    },
};

pub const SENTIMENT_COLUMN: &str = "sentiment";
pub const SENTIMENT_CONFIDENCE_COLUMN: &str = "sentiment_confidence";

/// Copy of `table` with the sentiment of each row's text attached. Rows are
/// matched by exact text, and when a text was classified more than once the
/// first result wins. Rows without text or without a match stay empty.
pub fn merge_sentiment(table: &Table, text_column: &str, results: &[ClassificationResult]) -> Result<Table> {
    let mut by_text: HashMap<&str, &ClassificationResult> = HashMap::with_capacity(results.len());
    for result in results {
        by_text.entry(result.text.as_str()).or_insert(result);
    }

    let (sentiments, confidences): (Vec<_>, Vec<_>) = table.column(text_column)?
        .map(|text| match text.and_then(|text| by_text.get(text)) {
            Some(result) => (Some(result.sentiment.to_string()), Some(format!("{:?}", result.confidence))),
            None => (None, None),
        })
        .unzip();

    let mut merged = table.clone();
    merged.set_column(SENTIMENT_COLUMN, sentiments);
    merged.set_column(SENTIMENT_CONFIDENCE_COLUMN, confidences);

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        tiktok_sentiment_core::models::SentimentLabel,
    };

    fn table(csv: &str) -> Table {
        Table::from_reader(csv.as_bytes(), &["".to_owned()]).unwrap()
    }

    fn result(text: &str, sentiment: SentimentLabel, confidence: f64) -> ClassificationResult {
        ClassificationResult {
            text: text.to_owned(),
            sentiment,
            confidence,
        }
    }

    fn cell<'a>(table: &'a Table, row: usize, column: &str) -> Option<&'a str> {
        table.rows()[row][table.column_index(column).unwrap()].as_deref()
    }

    #[test]
    fn attaches_matching_results_and_leaves_missing_text_empty() {
        let table = table("id,text\n1,great!\n2,\n3,terrible!!\n");
        let results = vec![
            result("great!", SentimentLabel::Positive, 0.99),
            result("terrible!!", SentimentLabel::Negative, 0.95),
        ];

        let merged = merge_sentiment(&table, "text", &results).unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.headers(), &["id", "text", "sentiment", "sentiment_confidence"].map(String::from));
        assert_eq!(cell(&merged, 0, "sentiment"), Some("POSITIVE"));
        assert_eq!(cell(&merged, 0, "sentiment_confidence"), Some("0.99"));
        assert_eq!(cell(&merged, 1, "sentiment"), None);
        assert_eq!(cell(&merged, 1, "sentiment_confidence"), None);
        assert_eq!(cell(&merged, 2, "sentiment"), Some("NEGATIVE"));
    }

    #[test]
    fn duplicate_texts_share_the_first_classification() {
        let table = table("id,text\n1,same\n2,same\n");
        let results = vec![
            result("same", SentimentLabel::Positive, 0.6),
            result("same", SentimentLabel::Negative, 0.9),
        ];

        let merged = merge_sentiment(&table, "text", &results).unwrap();

        for row in 0..2 {
            assert_eq!(cell(&merged, row, "sentiment"), Some("POSITIVE"));
            assert_eq!(cell(&merged, row, "sentiment_confidence"), Some("0.6"));
        }
    }

    #[test]
    fn unmatched_text_stays_empty_and_errors_are_kept() {
        let table = table("text\nunseen\nbroken\n");
        let results = vec![ClassificationResult::failed("broken".to_owned())];

        let merged = merge_sentiment(&table, "text", &results).unwrap();

        assert_eq!(cell(&merged, 0, "sentiment"), None);
        assert_eq!(cell(&merged, 1, "sentiment"), Some("ERROR"));
        assert_eq!(cell(&merged, 1, "sentiment_confidence"), Some("0.0"));
    }

    #[test]
    fn existing_sentiment_column_is_overwritten() {
        let table = table("text,sentiment\nnice,stale\n");
        let results = vec![result("nice", SentimentLabel::Positive, 0.7)];

        let merged = merge_sentiment(&table, "text", &results).unwrap();

        assert_eq!(merged.headers(), &["text", "sentiment", "sentiment_confidence"].map(String::from));
        assert_eq!(cell(&merged, 0, "sentiment"), Some("POSITIVE"));
    }
}
