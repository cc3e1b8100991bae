//! Per-frame orchestration of gestures, head pose and the stroke log.

use egui::Color32;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::ConfigResult;
use crate::event::{EngineEvent, EventBus, EventHandler, TrackingStatus};
use crate::head_pose::{ControlEvents, HeadPoseController};
use crate::input::{FrameInput, GestureClassifier, GestureFacts};
use crate::stroke::Pixel;
use crate::stroke_log::StrokeLog;
use crate::tool_state::{ToolState, Toolbox};

/// What the renderer and HUD need after one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    pub tick: u64,
    /// Index fingertip, for the hover cursor.
    pub cursor: Option<Pixel>,
    /// Smoothed point appended this tick, if drawing.
    pub brush: Option<Pixel>,
    pub tracking: TrackingStatus,
    pub tool: ToolState,
    /// Events emitted since the previous tick, including host control calls.
    pub events: Vec<EngineEvent>,
}

/// Drives the drawing from one detector result per frame.
///
/// Ticks must be fed strictly in arrival order. Nothing in here blocks, and no
/// tick ever fails: missing input just means no gesture and no pose event.
#[derive(Debug)]
pub struct InteractionEngine {
    classifier: GestureClassifier,
    head_pose: HeadPoseController,
    strokes: StrokeLog,
    tools: Toolbox,
    tracking: TrackingStatus,
    event_bus: EventBus,
    pending: Vec<EngineEvent>,
    tick: u64,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::from_valid_config(&EngineConfig::default())
    }
}

impl InteractionEngine {
    pub fn new(config: &EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &EngineConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(config.gesture()),
            head_pose: HeadPoseController::new(config.head_pose()),
            strokes: StrokeLog::new(config.smoothing()),
            tools: config.toolbox(),
            tracking: TrackingStatus::NoHand,
            event_bus: EventBus::new(),
            pending: Vec::new(),
            tick: 0,
        }
    }

    /// Subscribe a handler to every event the engine emits.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn process_frame(&mut self, input: &FrameInput) -> FrameOutput {
        self.tick += 1;
        let hand = input.hand.as_ref();
        let facts = self.classifier.classify(hand);
        log::debug!("tick {}: {:?}", self.tick, facts);

        self.set_tracking(match (hand, facts.pinch) {
            (None, _) => TrackingStatus::NoHand,
            (Some(_), Some(_)) => TrackingStatus::Drawing,
            (Some(_), None) => TrackingStatus::Hovering,
        });

        // A fist does not preempt the pinch check; both may act this tick.
        if facts.fist {
            self.undo();
        }
        let brush = self.apply_pinch(&facts);

        let head = input.head;
        let controls = self
            .head_pose
            .update(head.map(|pose| pose.pitch), head.map(|pose| pose.yaw));
        self.apply_controls(controls);

        FrameOutput {
            tick: self.tick,
            cursor: facts.cursor,
            brush,
            tracking: self.tracking,
            tool: self.tools.state(),
            events: std::mem::take(&mut self.pending),
        }
    }

    fn apply_pinch(&mut self, facts: &GestureFacts) -> Option<Pixel> {
        if let Some((x, y)) = facts.pinch {
            let color = self.tools.color();
            let size = self.tools.size();
            return Some(self.strokes.add_point(x, y, color, size));
        }
        if self.strokes.is_open() {
            if let Some(id) = self.strokes.end_stroke() {
                let points = self.strokes.last_committed().map_or(0, |stroke| stroke.len());
                log::info!("Stroke {} committed ({} points)", id, points);
                self.emit(EngineEvent::StrokeCommitted { id, points });
            }
            // Re-arm explicitly so the next pinch starts with fresh smoothing.
            self.strokes.start_stroke();
        }
        None
    }

    fn apply_controls(&mut self, controls: ControlEvents) {
        if controls.color_delta != 0 && self.tools.cycle_color(controls.color_delta) {
            if let Some(entry) = self.tools.current() {
                log::info!("Color changed to {}", entry.name);
                let event = EngineEvent::ColorChanged {
                    index: self.tools.color_index(),
                    name: entry.name.clone(),
                    color: entry.color,
                };
                self.emit(event);
            }
        }
        if controls.size_delta != 0 && self.tools.resize(controls.size_delta) {
            log::info!("Brush size changed to {}", self.tools.size());
            self.emit(EngineEvent::BrushResized {
                size: self.tools.size(),
            });
        }
    }

    fn set_tracking(&mut self, status: TrackingStatus) {
        if status != self.tracking {
            log::debug!("Tracking {:?} -> {:?}", self.tracking, status);
            self.tracking = status;
            self.emit(EngineEvent::TrackingChanged { status });
        }
    }

    fn emit(&mut self, event: EngineEvent) {
        self.event_bus.emit(&event);
        self.pending.push(event);
    }

    /// Removes the most recently committed stroke. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(id) = self.strokes.last_committed().map(|stroke| stroke.id()) else {
            return false;
        };
        self.strokes.undo();
        log::info!("Undo performed (stroke {})", id);
        self.emit(EngineEvent::StrokeUndone { id });
        true
    }

    /// Restores the most recently undone stroke. Returns `false` if there was none.
    pub fn redo(&mut self) -> bool {
        if !self.strokes.redo() {
            return false;
        }
        if let Some(id) = self.strokes.last_committed().map(|stroke| stroke.id()) {
            log::info!("Redo performed (stroke {})", id);
            self.emit(EngineEvent::StrokeRedone { id });
        }
        true
    }

    /// Starts a new canvas. Tool settings are kept.
    pub fn clear(&mut self) {
        self.strokes.clear();
        log::info!("Canvas cleared");
        self.emit(EngineEvent::CanvasCleared);
    }

    pub fn snapshot(&self) -> Document {
        self.strokes.snapshot()
    }

    pub fn strokes(&self) -> &StrokeLog {
        &self.strokes
    }

    pub fn tool_state(&self) -> ToolState {
        self.tools.state()
    }

    pub fn toolbox(&self) -> &Toolbox {
        &self.tools
    }

    pub fn current_color(&self) -> Color32 {
        self.tools.color()
    }

    pub fn brush_size(&self) -> u32 {
        self.tools.size()
    }

    pub fn tracking(&self) -> TrackingStatus {
        self.tracking
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
