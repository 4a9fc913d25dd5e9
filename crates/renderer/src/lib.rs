//! Ring (donut) chart engine
//!
//! Aggregates raw entries into categories, lays them out as arc-ring
//! segments, paints them through a [`RingCanvas`] and maps taps back to
//! categories. [`SurfaceController`] ties the pieces together behind an
//! event-driven interface owned by the host.

pub mod calcables;
pub mod canvas;
pub mod geometry;
pub mod surface;

pub use calcables::{aggregate, category_color};
pub use canvas::{DrawCommand, RecordingCanvas, RingCanvas};
pub use geometry::{build_geometry, ArcPath, ArcSegment, RingGeometry, RingLayout};
pub use hit_test::{locate, locate_in_layout, sector_index_at};
pub use surface::{CategorySelectedCallback, SurfaceController, SurfaceState};

pub use ring_charts_shared as shared;
