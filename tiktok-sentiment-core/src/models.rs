use {
    std::fmt,
    serde::{Serialize, Deserialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    // classification failed for this text
    Error,
}

/// What a classifier backend reports for a single text.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: SentimentLabel,
    pub score: f64,
}

/// One row of the results table. `text` is always the full input text, even
/// when the classifier only saw a truncated prefix of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Error => "ERROR",
        }
    }

    /// Parses a label reported by a model. Only the two polarities are
    /// accepted, `ERROR` is never produced by a model.
    pub fn from_model_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Prediction {
    pub fn into_result(self, text: String) -> ClassificationResult {
        ClassificationResult {
            text,
            sentiment: self.label,
            confidence: self.score,
        }
    }
}

impl ClassificationResult {
    pub fn failed(text: String) -> Self {
        Self {
            text,
            sentiment: SentimentLabel::Error,
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_labels_are_case_insensitive() {
        assert_eq!(SentimentLabel::from_model_label("positive"), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::from_model_label("NEGATIVE"), Some(SentimentLabel::Negative));
        assert_eq!(SentimentLabel::from_model_label("ERROR"), None);
        assert_eq!(SentimentLabel::from_model_label("LABEL_1"), None);
    }

    #[test]
    fn failed_result_has_zero_confidence() {
        let result = ClassificationResult::failed("meh".to_owned());
        assert_eq!(result.sentiment, SentimentLabel::Error);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.text, "meh");
    }
}
