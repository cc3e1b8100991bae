//! Replays recorded detector output through the interaction engine.
//!
//! Input is newline-delimited JSON, one `FrameInput` per line:
//! `{"hand": [{"id": 4, "x": 100, "y": 200}, ...], "head": {"pitch": 3.0, "yaw": -25.0}}`
//! Either field may be omitted or null. One JSON line is printed per tick.

use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use gesture_paint::replay::read_frames;
use gesture_paint::{EngineConfig, InteractionEngine};

#[derive(Parser, Debug)]
#[command(name = "gesture-replay", version, about = "Replay recorded hand/head tracking into strokes")]
struct Args {
    /// Frames file (NDJSON). Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Engine config (JSON). Defaults apply to anything it leaves out.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the final document summary.
    #[arg(long)]
    quiet: bool,
}

#[derive(Serialize)]
struct Summary {
    ticks: u64,
    dropped: usize,
    strokes: usize,
    points: usize,
    live_stroke: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_path(path).inspect_err(|err| {
            log::warn!("Rejected config {}: {}", path.display(), err);
        })?,
        None => EngineConfig::default(),
    };
    let mut engine = InteractionEngine::new(&config)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = read_frames(reader, |frame| {
        let output = engine.process_frame(&frame);
        if !args.quiet {
            serde_json::to_writer(&mut out, &output)?;
            writeln!(out)?;
        }
        Ok(())
    })?;

    let document = engine.snapshot();
    let summary = Summary {
        ticks: engine.tick(),
        dropped: stats.dropped,
        strokes: document.committed().len(),
        points: document.point_count(),
        live_stroke: document.live_stroke().is_some(),
    };
    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;
    Ok(())
}
