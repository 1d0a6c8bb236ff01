// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Cropper: interactive crop-region editing for images
//!
//! The library is headless. A host UI feeds pointer events into a
//! [`tools::CropTool`] and reads back cursor names, overlay rectangles and
//! the final [`command::CropCommand`]. The `cropper` binary drives the same
//! machinery from a recorded pointer script.

use anyhow::{Context, Result, bail};
use kurbo::Size;
use std::path::{Path, PathBuf};

pub mod command;
pub mod editing;
pub mod script;
pub mod settings;
pub mod tools;

use editing::{CropSession, Mouse, ViewPort};
use settings::Settings;
use tools::CropTool;

/// Command-line options
#[derive(Debug, Clone, PartialEq)]
struct Args {
    image: PathBuf,
    script: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

const USAGE: &str = "Usage: cropper <image> <script.json> [--output <path>] [--config <path>]";

/// Entry point for the cropper command-line tool
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cropper=info".parse().context("invalid log directive")?),
        )
        .init();

    let args = parse_args(pico_args::Arguments::from_env())?;
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let image = image::open(&args.image)
        .with_context(|| format!("Failed to load image: {}", args.image.display()))?;
    tracing::info!("Loaded {} ({}x{})", args.image.display(), image.width(), image.height());

    let steps = script::load(&args.script)?;
    tracing::info!("Replaying {} steps from {}", steps.len(), args.script.display());

    let viewport = ViewPort::fit(
        Size::new(image.width() as f64, image.height() as f64),
        Size::new(settings.screen_width, settings.screen_height),
        settings.max_fit_zoom,
    );
    let mut mouse = Mouse::new(settings.drag_threshold);
    let mut tool = CropTool::default();
    let mut session = CropSession::new(viewport, settings);
    script::replay(&steps, &mut mouse, &mut tool, &mut session);

    let command = session.command();
    tracing::info!("Crop region: {:?}", command.image_rect);
    let cropped = command.apply(&image)?;

    let output = args.output.clone().unwrap_or_else(|| default_output(&args.image));
    cropped
        .save(&output)
        .with_context(|| format!("Failed to save image: {}", output.display()))?;
    tracing::info!("Wrote {} ({}x{})", output.display(), cropped.width(), cropped.height());
    Ok(())
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Args> {
    // Options first: pico-args hands out free arguments in order
    let output = args.opt_value_from_str(["-o", "--output"]).context(USAGE)?;
    let config = args.opt_value_from_str(["-c", "--config"]).context(USAGE)?;
    let image = args.free_from_str().context(USAGE)?;
    let script = args.free_from_str().context(USAGE)?;

    let rest = args.finish();
    if !rest.is_empty() {
        bail!("Unexpected arguments: {:?}\n{USAGE}", rest);
    }

    Ok(Args {
        image,
        script,
        output,
        config,
    })
}

/// `photo.png` -> `photo-cropped.png`
fn default_output(image: &Path) -> PathBuf {
    let stem = image.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
    let name = match image.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-cropped.{ext}"),
        None => format!("{stem}-cropped.png"),
    };
    image.with_file_name(name)
}
