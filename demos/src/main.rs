// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a captured room, stored as JSON, to an SVG floor plan.
//!
//! ```text
//! cargo run -p floorsketch_demos -- demos/data/sample_room.json -o plan.svg
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use floorsketch::{CaptureSession, CapturedRoom, PlanStyle, ReplaySource, SceneComposer};
use floorsketch_svg::{SvgOptions, render_scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a captured room to an SVG floor plan")]
struct Args {
    /// Captured room as JSON
    #[arg(default_value = "demos/data/sample_room.json")]
    input: PathBuf,
    /// Where to write the SVG; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Plan units per metre
    #[arg(long, default_value_t = PlanStyle::DEFAULT_SCALE)]
    scale: f64,
    /// Size the document to the drawing instead of the fixed canvas
    #[arg(long)]
    fit: bool,
    /// Padding around the drawing with --fit, in plan units
    #[arg(long, default_value_t = 50.0)]
    margin: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let room: CapturedRoom = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    info!(
        surfaces = room.surface_count(),
        objects = room.objects.len(),
        "loaded captured room"
    );

    let mut session = CaptureSession::new(ReplaySource::new(room));
    session.run()?;
    session.stop()?;
    let scene = session.compose(&SceneComposer::new(PlanStyle::with_scale(args.scale)))?;
    info!(
        nodes = scene.len(),
        reference = scene.reference_orientation(),
        "composed plan"
    );

    let svg = render_scene(
        &scene,
        &SvgOptions {
            fit_content: args.fit,
            margin: args.margin,
        },
    );
    match &args.output {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote plan");
        }
        None => println!("{svg}"),
    }
    Ok(())
}
