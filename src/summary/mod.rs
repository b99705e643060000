pub mod client;
pub mod error;
pub mod summarizer;

pub use client::SummaryClient;
pub use error::SummaryError;
pub use summarizer::TranscriptSummarizer;
