pub mod transcript;

pub use transcript::{Model, Segment, Transcript};
