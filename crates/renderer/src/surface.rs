//! Stateful chart surface driven by the host's event loop.
//!
//! The controller owns the category list and the geometry cache. Hosts feed
//! it data, resize notifications, paint requests and pointer input as plain
//! method calls, in order, on one thread.

use ring_charts_shared::store_state::{validate_amount, validate_stroke_width};
use ring_charts_shared::{
    Category, Point, PointerEvent, RawEntry, RingChartResult, SavedState, SurfaceOptions,
    NEUTRAL_GRAY,
};

use crate::calcables::aggregate;
use crate::canvas::RingCanvas;
use crate::geometry::{build_geometry, RingGeometry};
use crate::hit_test;

/// Single-slot selection listener.
pub type CategorySelectedCallback = Box<dyn FnMut(&Category)>;

/// Lifecycle of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No size reported yet.
    Uninitialized,
    /// Saved state applied, still waiting for a size.
    Restoring,
    /// Size known; geometry is built from it.
    Sized { width: u32, height: u32 },
}

pub struct SurfaceController {
    state: SurfaceState,
    categories: Vec<Category>,
    stroke_width: f32,
    touch_slop: f32,
    geometry: Option<RingGeometry>,
    geometry_stale: bool,
    redraw_requested: bool,
    tap_candidate: Option<Point>,
    on_category_selected: Option<CategorySelectedCallback>,
}

impl Default for SurfaceController {
    fn default() -> Self {
        let options = SurfaceOptions::default();
        Self {
            state: SurfaceState::Uninitialized,
            categories: Vec::new(),
            stroke_width: options.stroke_width,
            touch_slop: options.touch_slop,
            geometry: None,
            geometry_stale: true,
            redraw_requested: false,
            tap_candidate: None,
            on_category_selected: None,
        }
    }
}

impl SurfaceController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SurfaceOptions) -> RingChartResult<Self> {
        options.validate()?;
        Ok(Self {
            stroke_width: options.stroke_width,
            touch_slop: options.touch_slop,
            ..Self::default()
        })
    }

    /// Replace the data set. Negative or non-finite amounts are rejected
    /// and leave the current categories in place.
    pub fn set_data(&mut self, entries: &[RawEntry]) -> RingChartResult<()> {
        for entry in entries {
            if let Err(err) = validate_amount(&entry.category, entry.amount) {
                log::warn!("Rejecting data set: {}", err);
                return Err(err);
            }
        }

        self.categories = aggregate(entries);
        log::debug!(
            "Data set: {} entries, {} categories",
            entries.len(),
            self.categories.len()
        );
        self.invalidate();
        Ok(())
    }

    pub fn set_stroke_width(&mut self, value: f32) -> RingChartResult<()> {
        if let Err(err) = validate_stroke_width(value) {
            log::warn!("Rejecting stroke width: {}", err);
            return Err(err);
        }

        self.stroke_width = value;
        self.invalidate();
        Ok(())
    }

    /// Size change from the host's layout pass. Geometry is rebuilt
    /// immediately.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!("Resize {:?} -> {}x{}", self.state, width, height);
        self.state = SurfaceState::Sized { width, height };
        self.rebuild_geometry();
    }

    /// Paint every cached path. Paths past the category list, and the
    /// neutral ring, are filled gray. Nothing is drawn before the first size.
    pub fn on_draw(&mut self, canvas: &mut dyn RingCanvas) {
        self.ensure_geometry();

        let Some(geometry) = &self.geometry else {
            return;
        };

        let backing = geometry.backing(&self.categories);
        for (index, path) in geometry.paths.iter().enumerate() {
            let color = backing.get(index).map_or(NEUTRAL_GRAY, |c| c.color);
            canvas.fill_path(path, color);
        }
    }

    /// Resolve a completed tap. The callback, if any, runs once with the
    /// hit category after the lookup has finished.
    pub fn on_tap_up(&mut self, point: Point) -> Option<Category> {
        let category = self.category_at(point)?;

        if let Some(callback) = self.on_category_selected.as_mut() {
            callback(&category);
        }
        Some(category)
    }

    /// Feed raw pointer input. A down followed by an up within the touch
    /// slop is a tap; moving farther turns it into a drag, which selects
    /// nothing.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Option<Category> {
        match event {
            PointerEvent::Down { position } => {
                self.tap_candidate = Some(position);
                None
            }
            PointerEvent::Move { position } => {
                if let Some(origin) = self.tap_candidate {
                    if origin.distance_to(position) > self.touch_slop {
                        log::trace!("Pointer left touch slop, tap cancelled");
                        self.tap_candidate = None;
                    }
                }
                None
            }
            PointerEvent::Up { position } => {
                let origin = self.tap_candidate.take()?;
                if origin.distance_to(position) > self.touch_slop {
                    return None;
                }
                self.on_tap_up(position)
            }
            PointerEvent::Cancel => {
                self.tap_candidate = None;
                None
            }
        }
    }

    /// Category under `point` without notifying the listener.
    pub fn category_at(&mut self, point: Point) -> Option<Category> {
        self.ensure_geometry();

        let SurfaceState::Sized { width, height } = self.state else {
            return None;
        };
        let geometry = self.geometry.as_ref()?;

        hit_test::locate(
            point,
            width as f32,
            height as f32,
            self.stroke_width,
            &geometry.sectors,
            geometry.backing(&self.categories),
        )
        .cloned()
    }

    pub fn set_on_category_selected<F>(&mut self, callback: F)
    where
        F: FnMut(&Category) + 'static,
    {
        self.on_category_selected = Some(Box::new(callback));
    }

    pub fn clear_on_category_selected(&mut self) {
        self.on_category_selected = None;
    }

    pub fn save_state(&self) -> SavedState {
        SavedState {
            categories: self.categories.clone(),
            stroke_width: self.stroke_width,
        }
    }

    /// Apply a snapshot. Before the first size this parks the controller in
    /// [`SurfaceState::Restoring`]; geometry follows on the next resize.
    pub fn restore_state(&mut self, state: SavedState) -> RingChartResult<()> {
        if let Err(err) = state.validate() {
            log::warn!("Rejecting saved state: {}", err);
            return Err(err);
        }

        self.categories = state.categories;
        self.stroke_width = state.stroke_width;

        if self.state == SurfaceState::Uninitialized {
            self.state = SurfaceState::Restoring;
        }

        log::debug!(
            "Restored {} categories, stroke width {} ({:?})",
            self.categories.len(),
            self.stroke_width,
            self.state
        );
        self.invalidate();
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Geometry as of the last rebuild; may lag behind a pending data or
    /// stroke change until the next paint or tap.
    pub fn geometry(&self) -> Option<&RingGeometry> {
        self.geometry.as_ref()
    }

    /// Whether a layout/redraw pass was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn invalidate(&mut self) {
        self.geometry_stale = true;
        self.redraw_requested = true;
    }

    fn ensure_geometry(&mut self) {
        if self.geometry_stale {
            self.rebuild_geometry();
        }
    }

    fn rebuild_geometry(&mut self) {
        let SurfaceState::Sized { width, height } = self.state else {
            return;
        };

        // old cache stays in place until the replacement is complete
        let geometry = build_geometry(
            &self.categories,
            width as f32,
            height as f32,
            self.stroke_width,
        );
        self.geometry = Some(geometry);
        self.geometry_stale = false;
    }
}
