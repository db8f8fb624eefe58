use {
    std::{fs::read_to_string, path::PathBuf},
    tracing::warn,
    serde::Deserialize,
};

const DEFAULT_INPUT_PATH: &str = "tiktok_part_1.csv";
const DEFAULT_TEXT_COLUMN: &str = "text";
const DEFAULT_RESULTS_PATH: &str = "tiktok_sentiment_results.csv";
const DEFAULT_MERGED_PATH: &str = "tiktok_complete_with_sentiment.csv";
const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

// the model rejects longer inputs, so texts are cut to this many characters
pub const DEFAULT_MAX_CHARS: usize = 512;

const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct InputConfig {
    path: Option<PathBuf>,
    text_column: Option<String>,
    na_values: Option<Vec<String>>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    #[default]
    Remote,
    Local,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub backend: ClassifierBackend,
    endpoint: Option<String>,
    api_token: Option<String>,
    max_chars: Option<usize>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct OutputConfig {
    results_path: Option<PathBuf>,
    merged_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ReportConfig {
    pub top_n: usize,
    pub preview_count: usize,
    pub preview_chars: usize,
    pub sample_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            preview_count: 3,
            preview_chars: 100,
            sample_chars: 150,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::parse(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config, using defaults: {}", err);
                Config::default()
            })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }
}

impl InputConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn path(&self) -> PathBuf {
        self.path.as_ref().cloned().unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }

    pub fn text_column(&self) -> &str {
        self.text_column.as_deref().unwrap_or(DEFAULT_TEXT_COLUMN)
    }

    pub fn na_values(&self) -> Vec<String> {
        self.na_values.as_ref()
            .cloned()
            .unwrap_or_else(|| DEFAULT_NA_VALUES.iter().map(|v| v.to_string()).collect())
    }
}

impl ClassifierConfig {
    pub fn endpoint(&self) -> String {
        self.endpoint.as_ref().cloned().unwrap_or(DEFAULT_INFERENCE_ENDPOINT.to_owned())
    }

    pub fn api_token(&self) -> Option<&String> {
        self.api_token.as_ref()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars.unwrap_or(DEFAULT_MAX_CHARS)
    }
}

impl OutputConfig {
    pub fn new(results_path: impl Into<PathBuf>, merged_path: impl Into<PathBuf>) -> Self {
        Self {
            results_path: Some(results_path.into()),
            merged_path: Some(merged_path.into()),
        }
    }

    pub fn results_path(&self) -> PathBuf {
        self.results_path.as_ref().cloned().unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH))
    }

    pub fn merged_path(&self) -> PathBuf {
        self.merged_path.as_ref().cloned().unwrap_or_else(|| PathBuf::from(DEFAULT_MERGED_PATH))
    }
}
