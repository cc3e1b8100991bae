use egui::Color32;
use serde::Serialize;

use crate::stroke::StrokeId;

/// What the HUD stability indicator shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TrackingStatus {
    /// No hand in frame.
    #[default]
    NoHand,
    /// Hand tracked but not pinching.
    Hovering,
    /// Pinching, so points are being recorded.
    Drawing,
}

/// Notifications published by the [`crate::InteractionEngine`] whenever
/// something the UI shows has changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EngineEvent {
    StrokeCommitted {
        id: StrokeId,
        points: usize,
    },
    StrokeUndone {
        id: StrokeId,
    },
    StrokeRedone {
        id: StrokeId,
    },
    CanvasCleared,
    ColorChanged {
        index: usize,
        name: String,
        #[serde(with = "crate::color")]
        color: Color32,
    },
    BrushResized {
        size: u32,
    },
    TrackingChanged {
        status: TrackingStatus,
    },
}
