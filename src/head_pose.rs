//! Turns continuous head angles into discrete tool controls.
//!
//! Yaw picks a palette entry, so it fires once per excursion outside the
//! neutral band. Pitch adjusts a magnitude, so it fires on every update held
//! outside the band.

use serde::{Deserialize, Serialize};

/// Which side the last yaw event fired for, if the head has not yet returned to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YawLatch {
    #[default]
    Idle,
    Right,
    Left,
}

/// Control deltas produced by one head-pose update. Each field is -1, 0 or +1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEvents {
    pub color_delta: i8,
    pub size_delta: i8,
}

impl ControlEvents {
    pub const NONE: Self = Self {
        color_delta: 0,
        size_delta: 0,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Angular thresholds (degrees) outside of which the head counts as turned or tilted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPoseConfig {
    pub yaw_threshold_deg: f32,
    pub pitch_threshold_deg: f32,
}

impl Default for HeadPoseConfig {
    fn default() -> Self {
        Self {
            yaw_threshold_deg: 20.0,
            pitch_threshold_deg: 20.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadPoseController {
    config: HeadPoseConfig,
    latch: YawLatch,
}

impl HeadPoseController {
    pub fn new(config: HeadPoseConfig) -> Self {
        Self {
            config,
            latch: YawLatch::Idle,
        }
    }

    pub fn latch(&self) -> YawLatch {
        self.latch
    }

    pub fn update(&mut self, pitch: Option<f32>, yaw: Option<f32>) -> ControlEvents {
        let (Some(pitch), Some(yaw)) = (pitch, yaw) else {
            return ControlEvents::NONE;
        };
        ControlEvents {
            color_delta: self.update_yaw(yaw),
            size_delta: self.pitch_delta(pitch),
        }
    }

    fn update_yaw(&mut self, yaw: f32) -> i8 {
        let threshold = self.config.yaw_threshold_deg;
        if yaw > threshold {
            self.fire(YawLatch::Right, 1)
        } else if yaw < -threshold {
            self.fire(YawLatch::Left, -1)
        } else {
            self.latch = YawLatch::Idle;
            0
        }
    }

    // Only an armed (idle) latch may fire.
    fn fire(&mut self, side: YawLatch, delta: i8) -> i8 {
        if self.latch != YawLatch::Idle {
            return 0;
        }
        self.latch = side;
        delta
    }

    // Head down shrinks the brush, head up grows it.
    fn pitch_delta(&self, pitch: f32) -> i8 {
        let threshold = self.config.pitch_threshold_deg;
        if pitch > threshold {
            -1
        } else if pitch < -threshold {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaw_deltas(controller: &mut HeadPoseController, yaws: &[f32]) -> Vec<i8> {
        yaws.iter()
            .map(|&yaw| controller.update(Some(0.0), Some(yaw)).color_delta)
            .collect()
    }

    #[test]
    fn test_yaw_fires_once_per_excursion() {
        let mut controller = HeadPoseController::default();
        let deltas = yaw_deltas(&mut controller, &[25.0, 25.0, 25.0, 0.0, 25.0]);
        assert_eq!(deltas, vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_yaw_left_is_symmetric() {
        let mut controller = HeadPoseController::default();
        let deltas = yaw_deltas(&mut controller, &[-25.0, -30.0, 5.0, -21.0]);
        assert_eq!(deltas, vec![-1, 0, 0, -1]);
        assert_eq!(controller.latch(), YawLatch::Left);
    }

    #[test]
    fn test_swinging_across_without_neutral_does_not_fire() {
        let mut controller = HeadPoseController::default();
        let deltas = yaw_deltas(&mut controller, &[25.0, -25.0, 0.0, -25.0]);
        assert_eq!(deltas, vec![1, 0, 0, -1]);
    }

    #[test]
    fn test_band_edges_are_neutral() {
        let mut controller = HeadPoseController::default();
        let deltas = yaw_deltas(&mut controller, &[20.0, -20.0]);
        assert_eq!(deltas, vec![0, 0]);
        assert_eq!(controller.pitch_delta(20.0), 0);
        assert_eq!(controller.pitch_delta(-20.0), 0);
    }

    #[test]
    fn test_pitch_fires_every_update() {
        let mut controller = HeadPoseController::default();
        let deltas: Vec<i8> = [25.0, 25.0, 25.0, 0.0, -25.0]
            .iter()
            .map(|&pitch| controller.update(Some(pitch), Some(0.0)).size_delta)
            .collect();
        assert_eq!(deltas, vec![-1, -1, -1, 0, 1]);
    }

    #[test]
    fn test_missing_angle_keeps_latch() {
        let mut controller = HeadPoseController::default();
        controller.update(Some(0.0), Some(25.0));
        assert_eq!(controller.update(None, Some(0.0)), ControlEvents::NONE);
        assert_eq!(controller.update(Some(30.0), None), ControlEvents::NONE);
        assert_eq!(controller.latch(), YawLatch::Right);
        // Still latched, so no second event.
        assert_eq!(controller.update(Some(0.0), Some(25.0)).color_delta, 0);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut controller = HeadPoseController::new(HeadPoseConfig {
            yaw_threshold_deg: 10.0,
            pitch_threshold_deg: 5.0,
        });
        let events = controller.update(Some(-6.0), Some(12.0));
        assert_eq!(
            events,
            ControlEvents {
                color_delta: 1,
                size_delta: 1
            }
        );
    }
}
