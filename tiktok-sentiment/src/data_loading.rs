use {
    tracing::info,
    tiktok_sentiment_core::{
        config::{InputConfig, ReportConfig},
        error::Result,
        table::Table,
    },
    crate::utils::truncate_chars,
};

pub fn load_table(config: &InputConfig) -> Result<Table> {
    let path = config.path();
    info!("reading input file: {}", path.display());

    let table = Table::read_csv(&path, &config.na_values())?;

    info!("loaded {} records with {} columns", table.len(), table.headers().len());
    info!("text column {:?} present: {}", config.text_column(), table.column_index(config.text_column()).is_some());

    Ok(table)
}

/// Non-missing values of the text column, in table order.
pub fn extract_texts(table: &Table, column: &str, report: &ReportConfig) -> Result<Vec<String>> {
    let texts: Vec<String> = table.column(column)?
        .flatten()
        .map(|text| text.to_owned())
        .collect();

    info!("found {} texts to classify", texts.len());
    for (i, text) in texts.iter().take(report.preview_count).enumerate() {
        info!("{}. {}...", i + 1, truncate_chars(text, report.preview_chars));
    }

    Ok(texts)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::fs,
        tiktok_sentiment_core::error::PipelineError,
    };

    #[test]
    fn drops_missing_texts_and_keeps_order() {
        let table = Table::from_reader(
            "id,text\n1,great!\n2,\n3,terrible!!\n4,NaN\n5,meh\n".as_bytes(),
            &InputConfig::default().na_values(),
        ).unwrap();

        let texts = extract_texts(&table, "text", &ReportConfig::default()).unwrap();
        assert_eq!(texts, vec!["great!", "terrible!!", "meh"]);
    }

    #[test]
    fn missing_text_column_is_fatal() {
        let table = Table::from_reader("id,body\n1,hi\n".as_bytes(), &[]).unwrap();

        let err = extract_texts(&table, "text", &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(_)));
    }

    #[test]
    fn loads_table_from_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comments.csv");
        fs::write(&path, "text,likes\nlove it,3\n").unwrap();

        let table = load_table(&InputConfig::new(&path)).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.column_index("likes"), Some(1));
    }

    #[test]
    fn missing_input_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_table(&InputConfig::new(dir.path().join("tiktok_part_1.csv"))).unwrap_err();
        assert!(matches!(err, PipelineError::MissingInput(_)));
    }
}
