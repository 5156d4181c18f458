//! Transcript logging handlers.

mod log_transcript;

pub use log_transcript::{LogTranscriptCommand, LogTranscriptHandler, LogTranscriptOutcome};
