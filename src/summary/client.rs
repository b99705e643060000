use serde::{Deserialize, Serialize};

use crate::domain::{Model, Segment, Transcript};
use crate::infra::ClientConfig;
use crate::summary::SummaryError;

/// HTTP client for the remote summarization API. One POST per call, no
/// retries, no polling.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    config: ClientConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRequest<'a> {
    summary_type: &'static str,
    summary_data: &'a [Segment],
    model: Model,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary: String,
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl SummaryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Submit the transcript for abstractive summarization and return the
    /// summary text.
    pub async fn summarize(
        &self,
        transcript: &Transcript,
        model: Model,
    ) -> Result<String, SummaryError> {
        let request = SummaryRequest {
            summary_type: "abstractive",
            summary_data: &transcript.segments,
            model,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("apikey", self.config.api_key.as_str())])
            .json(&request)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(SummaryError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message: Self::error_message(status.as_u16(), &body),
            });
        }

        let parsed: SummaryResponse = response.json().await.map_err(|e| {
            SummaryError::Parse(format!("response did not match summary schema: {e}"))
        })?;

        Ok(parsed.summary)
    }

    fn error_message(status: u16, body: &str) -> String {
        let remote = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|e| e.message.or(e.error))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 | 403 => format!("invalid API key ({remote})"),
            429 => format!("rate limit exceeded ({remote})"),
            _ => remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_body_matches_wire_schema() {
        let request = SummaryRequest {
            summary_type: "abstractive",
            summary_data: &[Segment {
                speaker_id: "0".to_string(),
                text: "Hello, this is Ryan.".to_string(),
            }],
            model: Model::Iamus,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "summaryType": "abstractive",
                "summaryData": [{"speakerId": "0", "text": "Hello, this is Ryan."}],
                "model": "iamus",
            })
        );
    }

    #[test]
    fn response_requires_summary_field() {
        let ok: SummaryResponse =
            serde_json::from_str(r#"{"summary": "short", "status": "completed"}"#).unwrap();
        assert_eq!(ok.summary, "short");

        let missing = serde_json::from_str::<SummaryResponse>(r#"{"status": "completed"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn error_message_prefers_remote_message() {
        let msg = SummaryClient::error_message(500, r#"{"message": "internal failure"}"#);
        assert_eq!(msg, "internal failure");

        let raw = SummaryClient::error_message(502, "bad gateway");
        assert_eq!(raw, "bad gateway");
    }

    #[test]
    fn error_message_hints_at_bad_key() {
        let msg = SummaryClient::error_message(401, r#"{"error": "unauthorized"}"#);
        assert_eq!(msg, "invalid API key (unauthorized)");
    }
}
