use {
    serde::{Serialize, Deserialize},
    serde_json::Value,
    anyhow::{anyhow, Result},
    reqwest::StatusCode,
    crate::{
        config::ClassifierConfig,
        models::{Prediction, SentimentLabel},
    },
};

/// Client for a hosted text-classification model speaking the Hugging Face
/// inference protocol.
pub struct InferenceClient {
    endpoint: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize, Debug)]
struct LabelScore {
    label: String,
    score: f64,
}

impl InferenceClient {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            endpoint: config.endpoint(),
            api_token: config.api_token().cloned(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn classify(&self, text: &str) -> Result<Prediction> {
        let res = self.inference_request(text).await?;
        let body: Value = res.json().await?;
        parse_prediction(body)
    }

    async fn inference_request(&self, text: &str) -> Result<reqwest::Response> {
        let mut req = self.client.post(&self.endpoint)
            .json(&InferenceRequest { inputs: text });

        if let Some(token) = self.api_token.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let res = req.send().await?;

        if res.status() != StatusCode::OK {
            return Err(anyhow!("inference api returned status: {}", res.status().as_u16()));
        }

        Ok(res)
    }
}

/// Picks the highest scoring label out of an inference response. Both the
/// nested `[[{label, score}, ..]]` and the flat `[{label, score}, ..]` shapes
/// are accepted.
pub fn parse_prediction(body: Value) -> Result<Prediction> {
    let candidates = match body {
        Value::Array(items) if items.first().map(|v| v.is_array()).unwrap_or(false) => {
            items.into_iter().next().unwrap_or(Value::Null)
        },
        Value::Object(ref obj) if obj.contains_key("error") => {
            return Err(anyhow!("inference api error: {}", obj["error"]));
        },
        other => other,
    };

    let candidates: Vec<LabelScore> = serde_json::from_value(candidates)
        .map_err(|err| anyhow!("unexpected inference response shape: {}", err))?;

    let best = candidates.into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| anyhow!("inference response contained no labels"))?;

    let label = SentimentLabel::from_model_label(&best.label)
        .ok_or_else(|| anyhow!("unexpected sentiment label: {}", best.label))?;

    if !(0.0..=1.0).contains(&best.score) {
        return Err(anyhow!("sentiment score out of range: {}", best.score));
    }

    Ok(Prediction {
        label,
        score: best.score,
    })
}
