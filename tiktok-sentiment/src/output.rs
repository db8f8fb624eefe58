use {
    std::path::Path,
    anyhow::{Context, Result},
    tracing::info,
    tiktok_sentiment_core::{
        models::ClassificationResult,
        table::Table,
    },
};

pub fn write_results(path: &Path, results: &[ClassificationResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    // an empty run still gets a header row
    if results.is_empty() {
        writer.write_record(["text", "sentiment", "confidence"])?;
    }

    for result in results {
        writer.serialize(result)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    writer.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("results saved to: {}", path.display());
    Ok(())
}

pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    table.write_csv(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("complete data saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::fs,
        tiktok_sentiment_core::models::SentimentLabel,
    };

    #[test]
    fn results_have_text_sentiment_confidence_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let results = vec![
            ClassificationResult {
                text: "love, this".to_owned(),
                sentiment: SentimentLabel::Positive,
                confidence: 0.5,
            },
            ClassificationResult::failed("??".to_owned()),
        ];

        write_results(&path, &results).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "text,sentiment,confidence\n\"love, this\",POSITIVE,0.5\n??,ERROR,0.0\n");
    }

    #[test]
    fn empty_results_still_have_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_results(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "text,sentiment,confidence\n");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.csv");

        assert!(write_results(&path, &[]).is_err());
        assert!(write_table(&path, &Table::new(vec!["text".to_owned()], vec![])).is_err());
    }
}
