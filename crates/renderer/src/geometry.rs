//! Ring geometry: bounding squares, arc-ring paths and the angular index.
//!
//! Two angle conventions meet here. Paths use the drawing convention
//! (degrees from the positive x axis, clockwise on a y-down surface).
//! Sectors use degrees clockwise from 12 o'clock, which is what the hit
//! tester computes from a tap. The two differ by a constant 90 degrees.

use ring_charts_shared::{Bounds, Category, Point, Sector};

/// Offset between the drawing convention and the 12 o'clock convention.
pub const TOP_OFFSET_DEGREES: f32 = -90.0;

const FULL_TURN: f32 = 360.0;

/// Center and radii of the ring for one surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: Point,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

impl RingLayout {
    /// The inner radius is clamped at zero, so a stroke wider than the
    /// outer radius yields a full pie instead of an inverted ring.
    pub fn new(width: f32, height: f32, stroke_width: f32) -> Self {
        let outer_radius = width.min(height) / 2.0;
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            outer_radius,
            inner_radius: (outer_radius - stroke_width).max(0.0),
        }
    }

    pub fn outer_bounds(&self) -> Bounds {
        Bounds::square(self.center, self.outer_radius)
    }

    pub fn inner_bounds(&self) -> Bounds {
        Bounds::square(self.center, self.inner_radius)
    }

    /// Whether `point` lies in the radial band, boundaries included.
    pub fn band_contains(&self, point: Point) -> bool {
        let distance = point.distance_to(self.center);
        distance >= self.inner_radius && distance <= self.outer_radius
    }

    /// Angle of `point` around the center, clockwise from 12 o'clock, in `[0, 360)`.
    pub fn angle_of(&self, point: Point) -> f32 {
        let theta = (point.y - self.center.y).atan2(point.x - self.center.x)
            + std::f32::consts::FRAC_PI_2;
        // a tiny negative angle wraps to exactly 360.0 in f32
        let degrees = theta.to_degrees().rem_euclid(FULL_TURN);
        if degrees >= FULL_TURN {
            0.0
        } else {
            degrees
        }
    }

    /// Inverse of [`RingLayout::angle_of`] at the given radius.
    pub fn point_at(&self, angle: f32, radius: f32) -> Point {
        let radians = (angle + TOP_OFFSET_DEGREES).to_radians();
        Point::new(
            self.center.x + radius * radians.cos(),
            self.center.y + radius * radians.sin(),
        )
    }

    pub fn mid_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

/// One circular arc in the drawing convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub bounds: Bounds,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcSegment {
    fn point_at(&self, angle: f32) -> Point {
        let center = self.bounds.center();
        let radius = self.bounds.width() / 2.0;
        let radians = angle.to_radians();
        Point::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    }
}

/// Filled ring segment: the outer arc traversed clockwise, joined to the
/// inner arc traversed back over the same span, closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub outer: ArcSegment,
    pub inner: ArcSegment,
}

impl ArcPath {
    pub fn new(layout: &RingLayout, draw_offset: f32, sweep: f32) -> Self {
        Self {
            outer: ArcSegment {
                bounds: layout.outer_bounds(),
                start_angle: draw_offset,
                sweep_angle: sweep,
            },
            inner: ArcSegment {
                bounds: layout.inner_bounds(),
                start_angle: draw_offset + sweep,
                sweep_angle: -sweep,
            },
        }
    }

    /// Approximate the region as a closed polygon for hosts without arc
    /// primitives. `segments_per_turn` is the resolution of a full circle;
    /// every arc gets at least one segment.
    pub fn flatten(&self, segments_per_turn: u32) -> Vec<Point> {
        let mut points = Vec::new();
        for arc in [&self.outer, &self.inner] {
            let steps = ((arc.sweep_angle.abs() / FULL_TURN) * segments_per_turn as f32)
                .ceil()
                .max(1.0) as u32;
            for step in 0..=steps {
                let t = step as f32 / steps as f32;
                points.push(arc.point_at(arc.start_angle + arc.sweep_angle * t));
            }
        }
        points
    }
}

/// Draw-ready geometry for one (categories, size, stroke width) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    pub layout: RingLayout,
    pub inner_bounds: Bounds,
    pub outer_bounds: Bounds,
    pub paths: Vec<ArcPath>,
    pub sectors: Vec<Sector>,
    neutral: bool,
}

impl RingGeometry {
    /// True when the ring is the single synthetic sector drawn for empty
    /// or zero-total data.
    pub fn is_neutral(&self) -> bool {
        self.neutral
    }

    /// Categories that back the sectors index-for-index; empty for the
    /// neutral ring.
    pub fn backing<'a>(&self, categories: &'a [Category]) -> &'a [Category] {
        if self.neutral {
            &[]
        } else {
            categories
        }
    }
}

/// Build paths and sectors for `categories` on a `width` x `height` surface.
pub fn build_geometry(
    categories: &[Category],
    width: f32,
    height: f32,
    stroke_width: f32,
) -> RingGeometry {
    let layout = RingLayout::new(width, height, stroke_width);
    let total: f64 = categories.iter().map(|c| c.amount).sum();
    let neutral = categories.is_empty() || !total.is_finite() || total <= 0.0;

    let sweeps: Vec<f32> = if neutral {
        vec![FULL_TURN]
    } else {
        categories
            .iter()
            .map(|c| ((c.amount / total) * FULL_TURN as f64) as f32)
            .collect()
    };

    let mut paths = Vec::with_capacity(sweeps.len());
    let mut sectors = Vec::with_capacity(sweeps.len());
    let mut start = 0.0f32;
    let last_filled = sweeps.iter().rposition(|sweep| *sweep > 0.0);

    for (index, mut sweep) in sweeps.into_iter().enumerate() {
        // the last non-empty sector closes the circle exactly at 360
        if Some(index) == last_filled {
            sweep = FULL_TURN - start;
        }
        // empty trailing sectors sit at 12 o'clock, not at 360
        let sector_start = if start >= FULL_TURN { start - FULL_TURN } else { start };

        paths.push(ArcPath::new(&layout, sector_start + TOP_OFFSET_DEGREES, sweep));
        sectors.push(Sector::new(sector_start, sweep));
        start += sweep;
    }

    log::debug!(
        "Built ring geometry: {} sectors for {} categories on {}x{} (stroke {}, neutral {})",
        sectors.len(),
        categories.len(),
        width,
        height,
        stroke_width,
        neutral
    );

    RingGeometry {
        layout,
        inner_bounds: layout.inner_bounds(),
        outer_bounds: layout.outer_bounds(),
        paths,
        sectors,
        neutral,
    }
}
