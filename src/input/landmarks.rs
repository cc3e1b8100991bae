use serde::{Deserialize, Serialize};

use crate::stroke::Pixel;

/// Number of keypoints the detector reports for one hand.
pub const LANDMARK_COUNT: usize = 21;

/// Hand keypoints in detector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandLandmark {
    pub const ALL: [HandLandmark; LANDMARK_COUNT] = [
        Self::Wrist,
        Self::ThumbCmc,
        Self::ThumbMcp,
        Self::ThumbIp,
        Self::ThumbTip,
        Self::IndexMcp,
        Self::IndexPip,
        Self::IndexDip,
        Self::IndexTip,
        Self::MiddleMcp,
        Self::MiddlePip,
        Self::MiddleDip,
        Self::MiddleTip,
        Self::RingMcp,
        Self::RingPip,
        Self::RingDip,
        Self::RingTip,
        Self::PinkyMcp,
        Self::PinkyPip,
        Self::PinkyDip,
        Self::PinkyTip,
    ];

    /// Detector id of this keypoint (0..=20).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One detected keypoint in frame pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn pos(self) -> Pixel {
        (self.x, self.y)
    }
}

/// Wire form of a single keypoint: `{"id": 8, "x": 120, "y": 300}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkEntry {
    pub id: usize,
    pub x: i32,
    pub y: i32,
}

/// The keypoints detected for one hand in one frame.
///
/// Fixed capacity, one optional slot per [`HandLandmark`]. Partial detections
/// simply leave slots empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LandmarkEntry>", into = "Vec<LandmarkEntry>")]
pub struct LandmarkSet {
    slots: [Option<Landmark>; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from detector output where the position in the slice is the id.
    pub fn from_positions(positions: &[Pixel]) -> Self {
        let mut set = Self::new();
        for (landmark, &(x, y)) in HandLandmark::ALL.iter().zip(positions) {
            set.set(*landmark, x, y);
        }
        set
    }

    pub fn set(&mut self, landmark: HandLandmark, x: i32, y: i32) {
        self.slots[landmark.index()] = Some(Landmark::new(x, y));
    }

    pub fn with(mut self, landmark: HandLandmark, x: i32, y: i32) -> Self {
        self.set(landmark, x, y);
        self
    }

    pub fn remove(&mut self, landmark: HandLandmark) -> Option<Landmark> {
        self.slots[landmark.index()].take()
    }

    pub fn get(&self, landmark: HandLandmark) -> Option<Landmark> {
        self.slots[landmark.index()]
    }

    /// Number of distinct keypoints present.
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.present_count() == LANDMARK_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandLandmark, Landmark)> + '_ {
        HandLandmark::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(landmark, slot)| slot.map(|point| (*landmark, point)))
    }
}

impl From<Vec<LandmarkEntry>> for LandmarkSet {
    fn from(entries: Vec<LandmarkEntry>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            match HandLandmark::from_index(entry.id) {
                Some(landmark) => set.set(landmark, entry.x, entry.y),
                None => log::debug!("Ignoring unknown hand landmark id {}", entry.id),
            }
        }
        set
    }
}

impl From<LandmarkSet> for Vec<LandmarkEntry> {
    fn from(set: LandmarkSet) -> Self {
        set.iter()
            .map(|(landmark, point)| LandmarkEntry {
                id: landmark.index(),
                x: point.x,
                y: point.y,
            })
            .collect()
    }
}
