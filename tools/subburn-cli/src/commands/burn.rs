//! Transcribe and burn captions in one step.

use std::path::PathBuf;

use subburn_common::config::AppConfig;

use crate::commands::{generate, merge};

pub fn run(
    video: PathBuf,
    output: PathBuf,
    language: Option<String>,
    model: Option<String>,
    min_display_secs: Option<f64>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let language = language.unwrap_or_else(|| config.language.clone());
    let model = model.unwrap_or_else(|| config.model.clone());
    let min_display_secs = min_display_secs.unwrap_or(config.min_display_secs);

    // Keep the intermediate track next to the output so it can be edited
    // by hand and re-merged later.
    let captions = output.with_extension("srt");

    generate::generate_track(&video, &captions, &language, &model, min_display_secs)?;
    println!("Caption track written to {}", captions.display());

    merge::run(video, captions, output)
}
