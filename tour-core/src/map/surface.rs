use crate::geo::{LatLng, ScreenPoint};

use super::{Layer, LayerId, MarkerAction};

/// An imperative map canvas, in the style of a slippy-map library.
///
/// The surface owns every layer added to it. Layers can be detached and
/// re-attached through their handle without being rebuilt, and all of them
/// are dropped on `teardown`.
pub trait MapSurface {
    /// Whether the host has given the surface an area to draw into.
    fn is_ready(&self) -> bool;

    fn create_canvas(&mut self, center: LatLng, zoom: u8);

    /// Adds a layer and attaches it on top of the existing ones.
    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// No-op if the layer is already attached.
    fn attach(&mut self, id: LayerId);

    /// No-op if the layer is already detached.
    fn detach(&mut self, id: LayerId);

    /// Dispatches a click at a viewport position. Opens the popup of the
    /// marker under the pointer (closing any other) and returns the action
    /// bound to it.
    fn click(&mut self, point: ScreenPoint) -> Option<MarkerAction>;

    /// Removes the canvas and releases every layer.
    fn teardown(&mut self);
}
