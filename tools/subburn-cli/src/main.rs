//! SubBurn CLI — Generate subtitles from speech and burn them into video.
//!
//! Usage:
//!   subburn generate <VIDEO>   Transcribe and write an SRT caption track
//!   subburn merge <VIDEO>      Burn an SRT caption track into a video
//!   subburn burn <VIDEO>       Generate and burn in one step
//!   subburn check              Check system capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "subburn",
    about = "Speech-to-subtitles with burned-in caption rendering",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe a video or audio file and write an SRT caption track
    Generate {
        /// Path to the input video or audio file
        input: PathBuf,

        /// Output SRT file path
        #[arg(short, long)]
        output: PathBuf,

        /// Transcription language (ISO 639-1 code; defaults to the saved preference)
        #[arg(short, long)]
        language: Option<String>,

        /// Whisper model: tiny, base, small, medium, large
        #[arg(short, long)]
        model: Option<String>,

        /// Minimum caption display duration in seconds
        #[arg(long)]
        min_display_secs: Option<f64>,
    },

    /// Burn an existing SRT caption track into a video
    Merge {
        /// Path to the input video file
        video: PathBuf,

        /// Path to the SRT caption track
        #[arg(short, long)]
        captions: PathBuf,

        /// Output video file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Transcribe and burn captions in one step
    Burn {
        /// Path to the input video file
        video: PathBuf,

        /// Output video file path
        #[arg(short, long)]
        output: PathBuf,

        /// Transcription language (ISO 639-1 code; defaults to the saved preference)
        #[arg(short, long)]
        language: Option<String>,

        /// Whisper model: tiny, base, small, medium, large
        #[arg(short, long)]
        model: Option<String>,

        /// Minimum caption display duration in seconds
        #[arg(long)]
        min_display_secs: Option<f64>,
    },

    /// Check system capabilities
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    subburn_common::logging::init_logging(&subburn_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Generate {
            input,
            output,
            language,
            model,
            min_display_secs,
        } => commands::generate::run(input, output, language, model, min_display_secs),
        Commands::Merge {
            video,
            captions,
            output,
        } => commands::merge::run(video, captions, output),
        Commands::Burn {
            video,
            output,
            language,
            model,
            min_display_secs,
        } => commands::burn::run(video, output, language, model, min_display_secs),
        Commands::Check => commands::check::run(),
    }
}
