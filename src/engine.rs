use crate::config::ControllerConfig;
use crate::geo::{Meters, Point, Projection, WebMercator, rotate_by_roll};
use crate::input::{DragMode, InteractionState, Modifiers, WheelDelta};
use crate::view::MapView;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The view or camera changed; the host should schedule a render.
    RenderNeeded,
    /// The host should suppress the event's default browser behavior.
    PreventDefault,
}

/// Core interaction state: all logic that doesn't depend on the DOM.
///
/// Owns the view it drives so the host and the event handlers share one
/// writer. Separated from [`crate::dom`] so it can be tested without
/// WASM/browser dependencies.
pub struct InteractionCore<V, P = WebMercator> {
    view: V,
    pub projection: P,
    pub config: ControllerConfig,
    state: InteractionState,
}

impl<V: MapView> InteractionCore<V> {
    /// Controller over `view` using Web Mercator and default sensitivities.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self::with_projection(view, WebMercator, ControllerConfig::default())
    }
}

impl<V: MapView, P: Projection> InteractionCore<V, P> {
    /// Controller with an explicit projection and config.
    ///
    /// The pan baseline starts at the view's current center.
    #[must_use]
    pub fn with_projection(view: V, projection: P, config: ControllerConfig) -> Self {
        let state = InteractionState::new(view.center_meters());
        Self { view, projection, config, state }
    }

    // --- Input events ---

    /// Button pressed at `screen_pt`. Starts a drag session; the camera is untouched.
    pub fn on_press(&mut self, screen_pt: Point) -> Vec<Action> {
        self.state.press(screen_pt);
        tracing::debug!(x = screen_pt.x, y = screen_pt.y, "drag started");
        Vec::new()
    }

    /// Button released. Re-bases orbit and pan baselines to where this drag ended.
    pub fn on_release(&mut self) -> Vec<Action> {
        if self.state.is_pressed() {
            tracing::debug!(mode = ?self.state.mode, "drag ended");
        }
        self.state.release(self.view.center_meters());
        Vec::new()
    }

    /// Pointer left the surface. Same as a release.
    pub fn on_leave(&mut self) -> Vec<Action> {
        self.on_release()
    }

    /// Pointer moved to `screen_pt`. Ignored unless a button is held.
    ///
    /// Meta selects orbit, otherwise the drag pans. When the mode differs
    /// from the previous move the segment is reset first, so this move is
    /// applied under the new mode from a zero delta.
    pub fn on_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        if !self.state.is_pressed() {
            return Vec::new();
        }

        let mode = modifiers.drag_mode();
        if mode != self.state.mode {
            tracing::debug!(from = ?self.state.mode, to = ?mode, "drag mode switched");
            self.state.reset_session(screen_pt, self.view.center_meters());
            self.state.mode = mode;
        }

        let Some(delta) = self.state.track(screen_pt) else {
            return Vec::new();
        };

        match mode {
            DragMode::Orbit => self.orbit(delta),
            DragMode::Pan => self.pan(delta),
        }
        self.view.update_camera();
        self.view.update_labels();
        vec![Action::RenderNeeded]
    }

    /// Wheel scrolled. Zooms out for positive `dy`, in for negative.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        let zoom = self.view.zoom() - delta.dy * self.config.wheel_zoom_per_pixel;
        self.view.set_zoom(zoom);
        tracing::trace!(zoom, "zoom applied");
        vec![Action::RenderNeeded, Action::PreventDefault]
    }

    fn orbit(&mut self, delta: Point) {
        let offset = self.state.drag_origin.offset_by(delta);
        self.state.orbit_offset = Some(offset);

        let roll = (offset.x * self.config.orbit_degrees_per_pixel).to_radians();
        let pitch = (offset.y * self.config.orbit_degrees_per_pixel).to_radians();
        self.view.set_camera_angles(roll, pitch);
        self.view.set_view_angles(roll, pitch);
        tracing::trace!(roll, pitch, "orbit applied");
    }

    fn pan(&mut self, delta: Point) {
        let meters_per_pixel = self.projection.meters_per_pixel(self.view.zoom());
        let screen_meters = Meters::new(delta.x * meters_per_pixel, delta.y * meters_per_pixel);
        let map_meters = rotate_by_roll(screen_meters, self.view.roll());

        let origin = self.state.map_origin;
        let target = Meters::new(origin.x - map_meters.x, origin.y + map_meters.y);
        let center = self.projection.meters_to_lng_lat(target);
        self.view.set_view(center);
        tracing::trace!(lng = center.lng, lat = center.lat, "pan applied");
    }

    // --- Queries ---

    /// The drag-tracking state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Mode of the last processed move.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.state.mode
    }

    /// Whether a drag session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_pressed()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
