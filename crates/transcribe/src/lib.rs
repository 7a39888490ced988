//! SubBurn Transcription
//!
//! Local-first speech recognition behind a narrow provider boundary:
//! - **Recognizer trait:** audio path in, ordered timed segments out
//! - **Whisper CLI backend:** whisper.cpp subprocess with stdout parsing

pub mod recognizer;
pub mod whisper_cli;

pub use recognizer::*;
pub use whisper_cli::*;
