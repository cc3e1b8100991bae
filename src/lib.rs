#![warn(clippy::all, rust_2018_idioms)]

pub mod color;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod event;
pub mod head_pose;
pub mod input;
pub mod replay;
pub mod smoothing;
pub mod stroke;
pub mod stroke_log;
pub mod tool_state;

pub use config::EngineConfig;
pub use document::Document;
pub use engine::{FrameOutput, InteractionEngine};
pub use error::{ConfigError, ConfigResult};
pub use event::{EngineEvent, EventBus, EventHandler, EventRecorder, TrackingStatus};
pub use head_pose::{ControlEvents, HeadPoseController, YawLatch};
pub use input::{FrameInput, GestureClassifier, HandLandmark, HeadPose, LandmarkSet};
pub use smoothing::SmoothingFilter;
pub use stroke::{Pixel, Point, Stroke, StrokeId, StrokeRef};
pub use stroke_log::{StrokeLog, StrokeState};
pub use tool_state::{Palette, PaletteColor, ToolState, Toolbox};
