//! Serde form for brush colors: an opaque `[r, g, b]` triple.
//!
//! Plain `Color32` serde is premultiplied RGBA, so a palette entry with an
//! alpha channel would be misread. Use with `#[serde(with = "crate::color")]`.

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
    [color.r(), color.g(), color.b()].serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
    let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
    Ok(Color32::from_rgb(r, g, b))
}
