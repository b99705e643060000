use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::summary::SummaryError;

/// Summarization model variants exposed by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Iamus,
    Cassandra,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Iamus => "iamus",
            Model::Cassandra => "cassandra",
        }
    }
}

/// One speaker-tagged utterance of a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub speaker_id: String,
    pub text: String,
}

/// Ordered speaker-tagged utterances read from a transcript file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub segments: Vec<Segment>,
}

/// JSON transcript file shape: the interaction-analytics export format.
#[derive(Deserialize)]
struct JsonTranscript {
    segments: Vec<JsonSegment>,
}

#[derive(Deserialize)]
struct JsonSegment {
    speaker_id: String,
    text: String,
}

impl Transcript {
    /// Read a transcript from a `.txt` or `.json` file, picking the parser
    /// by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SummaryError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SummaryError::InputNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&contents)
        } else {
            Self::from_text(&contents)
        }
    }

    /// Parse the plain-text transcript format, one utterance per line:
    ///
    /// ```text
    /// speaker_0 : 00:00:02.3 - 00:00:08.3 : This call is being recorded.
    /// speaker_1 : Hello, this is Ryan.
    /// ```
    ///
    /// The timestamp span is optional. Blank lines are skipped.
    pub fn from_text(contents: &str) -> Result<Self, SummaryError> {
        let mut segments = Vec::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let Some((label, rest)) = line.split_once(": ") else {
                return Err(SummaryError::Transcript {
                    line: idx + 1,
                    reason: "expected `speaker : text` separated by \": \"".to_string(),
                });
            };

            // When a timestamp span is present, the text is the last
            // ": "-separated field.
            let text = rest.rsplit(": ").next().unwrap_or(rest).trim();

            segments.push(Segment {
                speaker_id: strip_speaker_prefix(label).to_string(),
                text: text.to_string(),
            });
        }

        Ok(Self { segments })
    }

    /// Parse the JSON transcript format:
    /// `{"segments": [{"speaker_id": "0", "text": "..."}]}`.
    pub fn from_json(contents: &str) -> Result<Self, SummaryError> {
        let parsed: JsonTranscript =
            serde_json::from_str(contents).map_err(|e| SummaryError::Transcript {
                line: e.line(),
                reason: format!("invalid JSON transcript: {e}"),
            })?;

        let segments = parsed
            .segments
            .into_iter()
            .map(|s| Segment {
                speaker_id: s.speaker_id,
                text: s.text,
            })
            .collect();

        Ok(Self { segments })
    }
}

fn strip_speaker_prefix(label: &str) -> &str {
    let label = label.trim();
    label.strip_prefix("speaker_").unwrap_or(label)
}
