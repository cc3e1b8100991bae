use egui::Color32;

use crate::document::Document;
use crate::smoothing::SmoothingFilter;
use crate::stroke::{MutableStroke, Pixel, Point, StrokeId, StrokeRef};

/// Whether a stroke is currently being recorded.
#[derive(Debug, Clone, Default)]
pub enum StrokeState {
    #[default]
    Closed,
    Open(MutableStroke),
}

/// Owns the drawing: committed strokes, the stroke being drawn, and the redo stack.
///
/// Every operation is total. Preconditions that do not hold (no open stroke,
/// nothing to undo) turn the call into a no-op so per-frame gesture noise can
/// never break the drawing loop.
#[derive(Debug, Clone)]
pub struct StrokeLog {
    filter: SmoothingFilter,
    /// Sole source of truth for what is drawn and what may be undone.
    committed: Vec<StrokeRef>,
    /// Strokes popped by undo, most recent last.
    redo_stack: Vec<StrokeRef>,
    state: StrokeState,
    previous: Option<Pixel>,
    next_id: u64,
}

impl Default for StrokeLog {
    fn default() -> Self {
        Self::new(SmoothingFilter::default())
    }
}

impl StrokeLog {
    pub fn new(filter: SmoothingFilter) -> Self {
        Self {
            filter,
            committed: Vec::new(),
            redo_stack: Vec::new(),
            state: StrokeState::Closed,
            previous: None,
            next_id: 1,
        }
    }

    pub fn smoothing(&self) -> SmoothingFilter {
        self.filter
    }

    /// Opens a fresh stroke, dropping any points recorded since the last commit.
    pub fn start_stroke(&mut self) {
        match &mut self.state {
            StrokeState::Open(stroke) => {
                if !stroke.is_empty() {
                    log::debug!("Discarding open stroke {} ({} points)", stroke.id(), stroke.points().len());
                }
                stroke.discard_points();
            }
            StrokeState::Closed => {
                let id = self.allocate_id();
                self.state = StrokeState::Open(MutableStroke::new(id));
            }
        }
        self.previous = None;
    }

    /// Appends a smoothed sample to the open stroke, opening one if needed.
    /// Returns the smoothed position.
    pub fn add_point(&mut self, x: i32, y: i32, color: Color32, size: u32) -> Pixel {
        if matches!(self.state, StrokeState::Closed) {
            self.start_stroke();
        }
        let (sx, sy) = self.filter.smooth(self.previous, (x, y));
        if let StrokeState::Open(stroke) = &mut self.state {
            stroke.add_point(Point::new(sx, sy, color, size));
        }
        self.previous = Some((sx, sy));
        (sx, sy)
    }

    /// Commits the open stroke if it has any points, then closes it.
    /// Returns the id of the committed stroke.
    pub fn end_stroke(&mut self) -> Option<StrokeId> {
        self.previous = None;
        let StrokeState::Open(stroke) = std::mem::take(&mut self.state) else {
            return None;
        };
        if stroke.is_empty() {
            return None;
        }
        let stroke = stroke.into_stroke_ref();
        let id = stroke.id();
        log::debug!("Committed stroke {} ({} points)", id, stroke.len());
        self.committed.push(stroke);
        self.redo_stack.clear();
        Some(id)
    }

    /// Removes the most recently committed stroke. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.redo_stack.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Re-commits the most recently undone stroke. Returns `false` when there is none.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Empties the canvas: committed strokes, the open stroke, and all history.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
        self.state = StrokeState::Closed;
        self.previous = None;
    }

    pub fn snapshot(&self) -> Document {
        let live = match &self.state {
            StrokeState::Open(stroke) if !stroke.is_empty() => Some(stroke.to_stroke_ref()),
            _ => None,
        };
        Document::new(self.committed.clone(), live)
    }

    pub fn state(&self) -> &StrokeState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, StrokeState::Open(_))
    }

    pub fn open_points(&self) -> &[Point] {
        match &self.state {
            StrokeState::Open(stroke) => stroke.points(),
            StrokeState::Closed => &[],
        }
    }

    pub fn committed(&self) -> &[StrokeRef] {
        &self.committed
    }

    pub fn last_committed(&self) -> Option<&StrokeRef> {
        self.committed.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn allocate_id(&mut self) -> StrokeId {
        let id = StrokeId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(log: &mut StrokeLog, points: &[Pixel]) -> Option<StrokeId> {
        log.start_stroke();
        for &(x, y) in points {
            log.add_point(x, y, Color32::RED, 5);
        }
        log.end_stroke()
    }

    #[test]
    fn test_add_point_opens_stroke_implicitly() {
        let mut log = StrokeLog::default();
        assert!(!log.is_open());
        assert_eq!(log.add_point(10, 20, Color32::RED, 5), (10, 20));
        assert!(log.is_open());
        assert_eq!(log.open_points().len(), 1);
    }

    #[test]
    fn test_smoothing_restarts_with_each_stroke() {
        let mut log = StrokeLog::default();
        draw(&mut log, &[(0, 0), (100, 100)]);
        // A new stroke must not be pulled toward the end of the previous one.
        assert_eq!(log.add_point(300, 300, Color32::RED, 5), (300, 300));
    }

    #[test]
    fn test_end_stroke_commits_and_closes() {
        let mut log = StrokeLog::default();
        let id = draw(&mut log, &[(0, 0), (10, 0)]);
        assert!(id.is_some());
        assert!(!log.is_open());
        assert_eq!(log.committed().len(), 1);
        assert_eq!(log.last_committed().map(|s| s.id()), id);
    }

    #[test]
    fn test_end_stroke_without_open_stroke_is_noop() {
        let mut log = StrokeLog::default();
        assert_eq!(log.end_stroke(), None);
        assert!(log.committed().is_empty());
    }

    #[test]
    fn test_new_commit_clears_redo() {
        let mut log = StrokeLog::default();
        draw(&mut log, &[(0, 0)]);
        assert!(log.undo());
        assert!(log.can_redo());
        draw(&mut log, &[(5, 5)]);
        assert!(!log.can_redo());
        assert!(!log.redo());
    }

    #[test]
    fn test_undo_leaves_open_stroke_alone() {
        let mut log = StrokeLog::default();
        draw(&mut log, &[(0, 0)]);
        log.add_point(1, 1, Color32::BLUE, 3);
        assert!(log.undo());
        assert_eq!(log.open_points().len(), 1);
        assert_eq!(log.snapshot().len(), 1);
    }

    #[test]
    fn test_discarded_stroke_reuses_id() {
        let mut log = StrokeLog::default();
        log.start_stroke();
        log.add_point(0, 0, Color32::RED, 5);
        log.start_stroke();
        log.add_point(1, 1, Color32::RED, 5);
        let id = log.end_stroke();
        assert_eq!(id, Some(StrokeId::new(1)));
    }
}
