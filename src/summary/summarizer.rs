use std::path::{Path, PathBuf};

use crate::domain::{Model, Transcript};
use crate::infra::ClientConfig;
use crate::summary::{SummaryClient, SummaryError};

/// Orchestrates one summarization run: read the transcript, call the API,
/// persist the summary.
pub struct TranscriptSummarizer {
    client: SummaryClient,
}

impl TranscriptSummarizer {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: SummaryClient::new(config),
        }
    }

    /// Summarize `input` and write the result into `out_folder`, creating
    /// the folder if needed. Returns the path of the written summary.
    /// Nothing is written on failure.
    pub async fn summarize_file(
        &self,
        input: &Path,
        out_folder: &Path,
        model: Model,
    ) -> Result<PathBuf, SummaryError> {
        let transcript = Transcript::from_file(input)?;
        let summary = self.client.summarize(&transcript, model).await?;

        std::fs::create_dir_all(out_folder).map_err(|source| SummaryError::Io {
            path: out_folder.to_path_buf(),
            source,
        })?;

        let out_path = output_path(out_folder, input);
        std::fs::write(&out_path, &summary).map_err(|source| SummaryError::Io {
            path: out_path.clone(),
            source,
        })?;

        Ok(out_path)
    }
}

/// `Podcast.txt` in `out/` becomes `out/Podcast_summary.txt`.
pub fn output_path(out_folder: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    out_folder.join(format!("{stem}_summary.txt"))
}
