use serde::{Deserialize, Serialize};

mod gestures;
mod landmarks;

pub use gestures::{GestureClassifier, GestureConfig, GestureFacts, MIN_PINCH_LANDMARKS};
pub use landmarks::{HandLandmark, LANDMARK_COUNT, Landmark, LandmarkEntry, LandmarkSet};

/// Head orientation in degrees as estimated by the face tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    /// Positive when nodding down.
    pub pitch: f32,
    /// Positive when turning right.
    pub yaw: f32,
}

impl HeadPose {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }
}

/// Everything the detector delivers for one captured frame.
///
/// Delivered whole, never partially; the engine consumes one per tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Keypoints of the tracked hand, if one was detected.
    pub hand: Option<LandmarkSet>,
    /// Head pose, if a face was detected.
    pub head: Option<HeadPose>,
}

impl FrameInput {
    pub fn new(hand: Option<LandmarkSet>, head: Option<HeadPose>) -> Self {
        Self { hand, head }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hand(hand: LandmarkSet) -> Self {
        Self {
            hand: Some(hand),
            head: None,
        }
    }

    pub fn with_head(pitch: f32, yaw: f32) -> Self {
        Self {
            hand: None,
            head: Some(HeadPose::new(pitch, yaw)),
        }
    }
}
