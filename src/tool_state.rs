use egui::Color32;
use serde::{Deserialize, Serialize};

/// A named palette entry, as shown on the HUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    /// Written as `[r, g, b]`; palette colors are always opaque.
    #[serde(with = "crate::color")]
    pub color: Color32,
}

impl PaletteColor {
    pub fn new(name: impl Into<String>, color: Color32) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Fixed ordered list of brush colors. Head turns step through it, wrapping at both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            PaletteColor::new("Red", Color32::from_rgb(255, 0, 0)),
            PaletteColor::new("Green", Color32::from_rgb(0, 255, 0)),
            PaletteColor::new("Blue", Color32::from_rgb(0, 0, 255)),
            PaletteColor::new("Yellow", Color32::from_rgb(255, 255, 0)),
            PaletteColor::new("Magenta", Color32::from_rgb(255, 0, 255)),
        ])
    }
}

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaletteColor> {
        self.colors.get(index)
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Index `delta` entries away from `index`, wrapping in either direction.
    pub fn step(&self, index: usize, delta: i64) -> usize {
        if self.colors.is_empty() {
            return 0;
        }
        let len = self.colors.len() as i64;
        (index as i64 + delta).rem_euclid(len) as usize
    }
}

/// Current brush settings exposed to the renderer and HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub color_index: usize,
    #[serde(with = "crate::color")]
    pub color: Color32,
    pub size: u32,
}

/// Owns the palette, the selected color and the brush size.
#[derive(Debug, Clone)]
pub struct Toolbox {
    palette: Palette,
    color_index: usize,
    size: u32,
    min_size: u32,
    max_size: u32,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::new(Palette::default(), 5, 1, 50)
    }
}

impl Toolbox {
    /// `size` is clamped into `[min_size, max_size]`.
    pub fn new(palette: Palette, size: u32, min_size: u32, max_size: u32) -> Self {
        let max_size = max_size.max(min_size);
        Self {
            palette,
            color_index: 0,
            size: size.clamp(min_size, max_size),
            min_size,
            max_size,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn current(&self) -> Option<&PaletteColor> {
        self.palette.get(self.color_index)
    }

    pub fn color(&self) -> Color32 {
        self.current().map_or(Color32::WHITE, |entry| entry.color)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn size_range(&self) -> (u32, u32) {
        (self.min_size, self.max_size)
    }

    /// Moves the selection by `delta` palette entries. Returns whether it changed.
    pub fn cycle_color(&mut self, delta: i8) -> bool {
        let next = self.palette.step(self.color_index, i64::from(delta));
        let changed = next != self.color_index;
        self.color_index = next;
        changed
    }

    pub fn select_color(&mut self, index: usize) -> bool {
        if index >= self.palette.len() || index == self.color_index {
            return false;
        }
        self.color_index = index;
        true
    }

    /// Adds `delta` to the brush size, clamped to the configured range. Returns whether it changed.
    pub fn resize(&mut self, delta: i8) -> bool {
        let next = (i64::from(self.size) + i64::from(delta))
            .clamp(i64::from(self.min_size), i64::from(self.max_size)) as u32;
        let changed = next != self.size;
        self.size = next;
        changed
    }

    pub fn state(&self) -> ToolState {
        ToolState {
            color_index: self.color_index,
            color: self.color(),
            size: self.size,
        }
    }
}
