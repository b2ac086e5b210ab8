//! objkit Geometry
//!
//! A rectangle value with a derived area.

use serde::{Deserialize, Serialize};

/// Build a rectangle from its width and height
pub fn rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

/// Axis-aligned rectangle
///
/// Fields are public and unchecked: negative, zero or non-finite sizes are
/// stored as given and flow straight into [`Rectangle::area`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area computed from the current fields
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
