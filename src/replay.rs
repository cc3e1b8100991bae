//! Reading recorded frames for the replay host.
//!
//! Recordings are newline-delimited JSON, one [`FrameInput`] per line. A line
//! that cannot be decoded is reported and dropped; it never ends the replay.

use std::io::{self, BufRead};
use thiserror::Error;

use crate::input::FrameInput;

/// Why a recorded line could not become a frame
#[derive(Debug, Error)]
pub enum FrameLineError {
    #[error("Line is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Line is not a valid frame: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes one recorded line. Blank lines yield `Ok(None)`.
pub fn parse_frame_line(line: &[u8]) -> Result<Option<FrameInput>, FrameLineError> {
    let text = std::str::from_utf8(line)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(text)?))
}

/// Counts of what a replay read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub frames: usize,
    pub dropped: usize,
}

/// Feeds every decodable frame from `reader` to `on_frame`, in order.
///
/// Undecodable lines are logged and counted as dropped. Only I/O failures of
/// the reader itself are returned as errors.
pub fn read_frames<R, F>(mut reader: R, mut on_frame: F) -> io::Result<ReadStats>
where
    R: BufRead,
    F: FnMut(FrameInput) -> io::Result<()>,
{
    let mut stats = ReadStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        match parse_frame_line(&buf) {
            Ok(Some(frame)) => {
                stats.frames += 1;
                on_frame(frame)?;
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("Skipping line {}: {}", line_no, err);
                stats.dropped += 1;
            }
        }
    }
    Ok(stats)
}
