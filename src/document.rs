use crate::stroke::{Stroke, StrokeRef};
use serde::Serialize;

/// Render-ready view of the drawing: committed strokes in z-order, followed by
/// the live stroke when it has at least one point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    strokes: Vec<StrokeRef>,
    committed: usize,
}

impl Document {
    pub fn new(committed: Vec<StrokeRef>, live: Option<StrokeRef>) -> Self {
        let committed_len = committed.len();
        let mut strokes = committed;
        strokes.extend(live.filter(|stroke| !stroke.is_empty()));
        Self {
            strokes,
            committed: committed_len,
        }
    }

    /// Every stroke the renderer should draw, earliest first.
    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn committed(&self) -> &[StrokeRef] {
        &self.strokes[..self.committed]
    }

    pub fn live_stroke(&self) -> Option<&Stroke> {
        self.strokes.get(self.committed).map(|stroke| &**stroke)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|stroke| stroke.len()).sum()
    }
}
