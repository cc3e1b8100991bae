use egui::Color32;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A pixel coordinate in frame space (x grows right, y grows down).
pub type Pixel = (i32, i32);

/// A single recorded brush sample. Never changes once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    #[serde(with = "crate::color")]
    pub color: Color32,
    pub size: u32,
}

impl Point {
    pub fn new(x: i32, y: i32, color: Color32, size: u32) -> Self {
        Self { x, y, color, size }
    }

    pub fn pos(&self) -> Pixel {
        (self.x, self.y)
    }
}

/// Identifier handed out by a [`crate::StrokeLog`], increasing in the order strokes are opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrokeId(u64);

impl StrokeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
}

// Mutable stroke for the one being drawn
#[derive(Debug, Clone)]
pub struct MutableStroke {
    id: StrokeId,
    points: Vec<Point>,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(id: StrokeId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MutableStroke {
    pub fn new(id: StrokeId) -> Self {
        Self {
            id,
            points: Vec::new(),
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drops every recorded point but keeps the id.
    pub fn discard_points(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // Copy for preview while the stroke keeps growing
    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(Stroke::new(self.id, self.points.clone()))
    }

    // Freeze without copying the points
    pub fn into_stroke_ref(self) -> StrokeRef {
        Arc::new(Stroke::new(self.id, self.points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_keeps_points_and_id() {
        let mut stroke = MutableStroke::new(StrokeId::new(7));
        stroke.add_point(Point::new(1, 2, Color32::RED, 5));
        stroke.add_point(Point::new(3, 4, Color32::RED, 5));

        let preview = stroke.to_stroke_ref();
        stroke.add_point(Point::new(5, 6, Color32::RED, 5));
        assert_eq!(preview.len(), 2);

        let frozen = stroke.into_stroke_ref();
        assert_eq!(frozen.id(), StrokeId::new(7));
        assert_eq!(frozen.len(), 3);
        assert_eq!(frozen.points()[2].pos(), (5, 6));
    }

    #[test]
    fn test_discard_points_keeps_id() {
        let mut stroke = MutableStroke::new(StrokeId::new(3));
        stroke.add_point(Point::new(0, 0, Color32::GREEN, 1));
        stroke.discard_points();
        assert!(stroke.is_empty());
        assert_eq!(stroke.id(), StrokeId::new(3));
    }
}
