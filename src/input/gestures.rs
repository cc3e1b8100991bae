use super::landmarks::{HandLandmark, LANDMARK_COUNT, LandmarkSet};
use crate::stroke::Pixel;

/// Below this many keypoints a detection is too unreliable to trust any fingertip.
pub const MIN_PINCH_LANDMARKS: usize = 9;

/// (tip, joint) pairs compared by the fist check. The thumb is left out.
const FOLDED_FINGERS: [(HandLandmark, HandLandmark); 4] = [
    (HandLandmark::IndexTip, HandLandmark::IndexPip),
    (HandLandmark::MiddleTip, HandLandmark::MiddlePip),
    (HandLandmark::RingTip, HandLandmark::RingPip),
    (HandLandmark::PinkyTip, HandLandmark::PinkyPip),
];

/// Configuration for gesture recognition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Thumb-to-index distance (pixels) under which the hand counts as pinching
    pub pinch_threshold_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold_px: 40.0,
        }
    }
}

/// Everything the classifier can tell about one hand in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureFacts {
    /// Midpoint between thumb and index tips while pinching.
    pub pinch: Option<Pixel>,
    pub fist: bool,
    /// Index fingertip, if detected.
    pub cursor: Option<Pixel>,
}

/// Maps hand keypoints to gesture facts. Holds thresholds only, no per-frame state.
///
/// A missing hand or a short detection yields the "no gesture" answer for every query.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn classify(&self, hand: Option<&LandmarkSet>) -> GestureFacts {
        GestureFacts {
            pinch: self.pinch_midpoint(hand),
            fist: self.is_fist(hand),
            cursor: self.cursor_position(hand),
        }
    }

    /// Returns whether thumb and index tips are closer than the threshold, and
    /// their midpoint when they are.
    pub fn is_pinching(&self, hand: Option<&LandmarkSet>) -> (bool, Option<Pixel>) {
        let midpoint = self.pinch_midpoint(hand);
        (midpoint.is_some(), midpoint)
    }

    pub fn pinch_midpoint(&self, hand: Option<&LandmarkSet>) -> Option<Pixel> {
        let hand = hand.filter(|hand| hand.present_count() >= MIN_PINCH_LANDMARKS)?;
        let thumb = hand.get(HandLandmark::ThumbTip)?;
        let index = hand.get(HandLandmark::IndexTip)?;

        let dx = f64::from(index.x) - f64::from(thumb.x);
        let dy = f64::from(index.y) - f64::from(thumb.y);
        if dx.hypot(dy) >= f64::from(self.config.pinch_threshold_px) {
            return None;
        }
        // Sum in i64 so tips near the edge of the i32 range cannot overflow.
        let mid = |a: i32, b: i32| (i64::from(a) + i64::from(b)).div_euclid(2) as i32;
        Some((mid(thumb.x, index.x), mid(thumb.y, index.y)))
    }

    /// All four non-thumb fingertips sit below their middle joints.
    ///
    /// Image y grows downward, so "below" means a larger y. This assumes an
    /// upright, camera-facing hand.
    pub fn is_fist(&self, hand: Option<&LandmarkSet>) -> bool {
        let Some(hand) = hand.filter(|hand| hand.present_count() >= LANDMARK_COUNT) else {
            return false;
        };
        FOLDED_FINGERS.iter().all(|&(tip, joint)| {
            match (hand.get(tip), hand.get(joint)) {
                (Some(tip), Some(joint)) => tip.y > joint.y,
                _ => false,
            }
        })
    }

    pub fn cursor_position(&self, hand: Option<&LandmarkSet>) -> Option<Pixel> {
        hand?.get(HandLandmark::IndexTip).map(|tip| tip.pos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An open, upright hand: every fingertip above its joints.
    fn open_hand() -> LandmarkSet {
        let positions: Vec<Pixel> = (0..LANDMARK_COUNT as i32)
            .map(|i| (i * 10, 400 - i * 10))
            .collect();
        LandmarkSet::from_positions(&positions)
    }

    fn with_pinch(hand: LandmarkSet, thumb: Pixel, index: Pixel) -> LandmarkSet {
        hand.with(HandLandmark::ThumbTip, thumb.0, thumb.1)
            .with(HandLandmark::IndexTip, index.0, index.1)
    }

    #[test]
    fn test_pinch_within_threshold() {
        let classifier = GestureClassifier::default();
        let hand = with_pinch(open_hand(), (0, 0), (30, 0));
        assert_eq!(classifier.is_pinching(Some(&hand)), (true, Some((15, 0))));
    }

    #[test]
    fn test_pinch_outside_threshold() {
        let classifier = GestureClassifier::default();
        let hand = with_pinch(open_hand(), (0, 0), (50, 0));
        assert_eq!(classifier.is_pinching(Some(&hand)), (false, None));
    }

    #[test]
    fn test_pinch_at_exact_threshold_is_not_pinching() {
        let classifier = GestureClassifier::default();
        let hand = with_pinch(open_hand(), (0, 0), (40, 0));
        assert!(!classifier.is_pinching(Some(&hand)).0);
    }

    #[test]
    fn test_pinch_midpoint_floors() {
        let classifier = GestureClassifier::default();
        let hand = with_pinch(open_hand(), (-3, 0), (0, 1));
        assert_eq!(classifier.pinch_midpoint(Some(&hand)), Some((-2, 0)));
    }

    #[test]
    fn test_pinch_midpoint_near_coordinate_limits() {
        let classifier = GestureClassifier::default();
        let hand = with_pinch(open_hand(), (i32::MAX - 10, 0), (i32::MAX - 6, 0));
        assert_eq!(classifier.pinch_midpoint(Some(&hand)), Some((i32::MAX - 8, 0)));

        let hand = with_pinch(open_hand(), (0, i32::MIN), (0, i32::MIN + 3));
        assert_eq!(classifier.pinch_midpoint(Some(&hand)), Some((0, i32::MIN + 1)));
    }

    #[test]
    fn test_pinch_needs_nine_landmarks() {
        let classifier = GestureClassifier::default();
        let short = LandmarkSet::from_positions(&[(0, 0); 8])
            .with(HandLandmark::IndexTip, 10, 0);
        assert_eq!(short.present_count(), 9);
        assert!(classifier.is_pinching(Some(&short)).0);

        let mut shorter = short.clone();
        shorter.remove(HandLandmark::Wrist);
        assert!(!classifier.is_pinching(Some(&shorter)).0);
    }

    #[test]
    fn test_pinch_needs_both_tips() {
        let classifier = GestureClassifier::default();
        let mut hand = open_hand();
        hand.remove(HandLandmark::ThumbTip);
        assert_eq!(classifier.is_pinching(Some(&hand)), (false, None));
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = GestureClassifier::new(GestureConfig {
            pinch_threshold_px: 60.0,
        });
        let hand = with_pinch(open_hand(), (0, 0), (50, 0));
        assert!(classifier.is_pinching(Some(&hand)).0);
    }

    #[test]
    fn test_fist_when_all_fingers_folded() {
        let classifier = GestureClassifier::default();
        let mut hand = open_hand();
        for (tip, joint) in FOLDED_FINGERS {
            let joint_y = hand.get(joint).unwrap().y;
            hand.set(tip, 0, joint_y + 5);
        }
        assert!(classifier.is_fist(Some(&hand)));

        // One extended finger breaks the fist.
        let joint_y = hand.get(HandLandmark::RingPip).unwrap().y;
        hand.set(HandLandmark::RingTip, 0, joint_y - 5);
        assert!(!classifier.is_fist(Some(&hand)));
    }

    #[test]
    fn test_open_hand_is_not_fist() {
        let classifier = GestureClassifier::default();
        assert!(!classifier.is_fist(Some(&open_hand())));
    }

    #[test]
    fn test_fist_needs_full_hand() {
        let classifier = GestureClassifier::default();
        let mut hand = open_hand();
        for (tip, joint) in FOLDED_FINGERS {
            let joint_y = hand.get(joint).unwrap().y;
            hand.set(tip, 0, joint_y + 5);
        }
        hand.remove(HandLandmark::Wrist);
        assert!(!classifier.is_fist(Some(&hand)));
    }

    #[test]
    fn test_missing_hand_is_no_gesture() {
        let classifier = GestureClassifier::default();
        assert_eq!(classifier.classify(None), GestureFacts::default());
    }

    #[test]
    fn test_cursor_is_index_tip() {
        let classifier = GestureClassifier::default();
        let hand = LandmarkSet::new().with(HandLandmark::IndexTip, 12, 34);
        assert_eq!(classifier.cursor_position(Some(&hand)), Some((12, 34)));
        assert_eq!(classifier.cursor_position(Some(&LandmarkSet::new())), None);
    }
}
