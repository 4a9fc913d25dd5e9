//! Shared types for the ring chart crates
//!
//! Plain value types passed between the renderer, the configuration
//! crate and the host application. Everything here is cheap to clone
//! and serializable so it can cross a persistence boundary unchanged.

use serde::{Deserialize, Serialize};

pub mod color;
pub mod errors;
pub mod events;
pub mod store_state;

pub use color::{Rgb, NEUTRAL_GRAY};
pub use errors::{RingChartError, RingChartResult};
pub use events::PointerEvent;
pub use store_state::{SavedState, SurfaceOptions};

/// One input record: an amount booked against a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub amount: f64,
    pub category: String,
}

impl RawEntry {
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
        }
    }
}

/// An aggregated, named, colored slice of the total amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub amount: f64,
    pub color: Rgb,
}

/// Angular span of one category, in degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl Sector {
    pub fn new(start_angle: f32, sweep_angle: f32) -> Self {
        Self {
            start_angle,
            sweep_angle,
        }
    }

    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    /// Inclusive on both ends, so neighbours share their boundary angle.
    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.start_angle && angle <= self.end_angle()
    }

    pub fn mid_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle / 2.0
    }
}

/// Position in surface coordinates (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Bounding square of the circle with the given center and radius.
    pub fn square(center: Point, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}
