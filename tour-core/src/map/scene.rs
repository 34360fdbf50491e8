use crate::geo::{LatLng, ScreenPoint, TilePlacement, Viewport};

use super::{
    Layer, LayerId, MapSurface, Marker, MarkerAction, MarkerKind, Polyline, Popup, TileLayer,
};

/// In-memory map canvas. Keeps the layers in z-order and knows how to
/// project them onto its viewport; a renderer paints whatever is attached.
#[derive(Debug, Default)]
pub struct Scene {
    width: f64,
    height: f64,
    viewport: Option<Viewport>,
    layers: Vec<Layer>,
    attached: Vec<LayerId>,
    open_popup: Option<LayerId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the host whenever the drawing area changes size.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.width = width;
            viewport.height = height;
        }
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn is_created(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    pub fn is_attached(&self, id: LayerId) -> bool {
        self.attached.contains(&id)
    }

    /// Attached layers, bottom first.
    pub fn attached(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.attached
            .iter()
            .filter_map(move |&id| self.layers.get(id.0).map(|layer| (id, layer)))
    }

    pub fn tile_layers(&self) -> impl Iterator<Item = &TileLayer> {
        self.attached().filter_map(|(_, layer)| match layer {
            Layer::Tiles(tiles) => Some(tiles),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.attached().filter_map(|(_, layer)| match layer {
            Layer::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.attached().filter_map(|(_, layer)| match layer {
            Layer::Polyline(line) => Some(line),
            _ => None,
        })
    }

    pub fn marker_count(&self, kind: MarkerKind) -> usize {
        self.markers().filter(|marker| marker.kind == kind).count()
    }

    pub fn to_screen(&self, pos: LatLng) -> Option<ScreenPoint> {
        self.viewport.map(|viewport| viewport.to_screen(pos))
    }

    pub fn visible_tiles(&self) -> Vec<TilePlacement> {
        self.viewport
            .map(|viewport| viewport.visible_tiles())
            .unwrap_or_default()
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.pan_by(dx, dy);
        }
    }

    pub fn zoom_by(&mut self, delta: i32) -> bool {
        self.viewport
            .as_mut()
            .map(|viewport| viewport.zoom_by(delta))
            .unwrap_or(false)
    }

    /// The open popup and the marker position it is anchored to. A popup
    /// whose marker got detached is not shown.
    pub fn popup(&self) -> Option<(&Popup, ScreenPoint)> {
        let id = self.open_popup.filter(|&id| self.is_attached(id))?;
        match self.layer(id)? {
            Layer::Marker(marker) => {
                let anchor = self.to_screen(marker.position)?;
                marker.popup.as_ref().map(|popup| (popup, anchor))
            }
            _ => None,
        }
    }

    pub fn close_popup(&mut self) {
        self.open_popup = None;
    }

    /// Attaches `id` at its slot in the paint order: tiles, then polylines,
    /// then markers, each pane ordered by creation.
    fn insert_attached(&mut self, id: LayerId) {
        let Some(key) = self.paint_key(id) else {
            return;
        };
        let index = self
            .attached
            .partition_point(|&other| self.paint_key(other).is_some_and(|other| other < key));
        self.attached.insert(index, id);
    }

    fn paint_key(&self, id: LayerId) -> Option<(u8, usize)> {
        let pane = match self.layers.get(id.0)? {
            Layer::Tiles(_) => 0,
            Layer::Polyline(_) => 1,
            Layer::Marker(_) => 2,
        };
        Some((pane, id.0))
    }

    /// Topmost attached marker under `point`.
    fn marker_at(&self, point: ScreenPoint) -> Option<(LayerId, &Marker)> {
        let viewport = self.viewport.as_ref()?;
        self.attached
            .iter()
            .rev()
            .filter_map(|&id| match self.layers.get(id.0) {
                Some(Layer::Marker(marker)) => Some((id, marker)),
                _ => None,
            })
            .find(|(_, marker)| {
                let center = viewport.to_screen(marker.position);
                center.distance(point) <= marker.icon.radius() + marker.icon.border
            })
    }
}

impl MapSurface for Scene {
    fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    fn create_canvas(&mut self, center: LatLng, zoom: u8) {
        self.viewport = Some(Viewport::new(center, zoom, self.width, self.height));
    }

    fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.layers.len());
        self.layers.push(layer);
        self.insert_attached(id);
        id
    }

    fn attach(&mut self, id: LayerId) {
        if !self.is_attached(id) {
            self.insert_attached(id);
        }
    }

    fn detach(&mut self, id: LayerId) {
        self.attached.retain(|&attached| attached != id);
        if self.open_popup == Some(id) {
            self.open_popup = None;
        }
    }

    fn click(&mut self, point: ScreenPoint) -> Option<MarkerAction> {
        let hit = self
            .marker_at(point)
            .map(|(id, marker)| (id, marker.popup.is_some(), marker.action));
        match hit {
            Some((id, has_popup, action)) => {
                self.open_popup = has_popup.then_some(id);
                action
            }
            None => {
                self.open_popup = None;
                None
            }
        }
    }

    fn teardown(&mut self) {
        self.viewport = None;
        self.layers.clear();
        self.attached.clear();
        self.open_popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::StopId,
        map::{MarkerIcon, PolylineStyle},
    };

    const CENTER: LatLng = LatLng::new(52.5194, 13.3930);

    fn stop_marker(position: LatLng, id: u32) -> Layer {
        Layer::Marker(Marker {
            kind: MarkerKind::Stop,
            position,
            icon: MarkerIcon::STOP,
            popup: Some(Popup {
                title: "Stop".into(),
                lines: vec![],
            }),
            action: Some(MarkerAction::SelectStop(StopId(id))),
        })
    }

    fn ready_scene() -> Scene {
        let mut scene = Scene::new();
        scene.set_size(640.0, 480.0);
        scene.create_canvas(CENTER, 14);
        scene
    }

    #[test]
    fn not_ready_without_size() {
        let mut scene = Scene::new();
        assert!(!scene.is_ready());
        scene.set_size(640.0, 0.0);
        assert!(!scene.is_ready());
        scene.set_size(640.0, 480.0);
        assert!(scene.is_ready());
    }

    #[test]
    fn detach_and_attach_are_idempotent() {
        let mut scene = ready_scene();
        let id = scene.add_layer(stop_marker(CENTER, 1));
        scene.attach(id);
        assert_eq!(scene.marker_count(MarkerKind::Stop), 1);
        scene.detach(id);
        scene.detach(id);
        assert_eq!(scene.marker_count(MarkerKind::Stop), 0);
        assert!(scene.layer(id).is_some());
        scene.attach(id);
        assert_eq!(scene.marker_count(MarkerKind::Stop), 1);
    }

    #[test]
    fn click_opens_popup_and_returns_action() {
        let mut scene = ready_scene();
        scene.add_layer(stop_marker(CENTER, 7));

        let action = scene.click(ScreenPoint::new(325.0, 240.0));
        assert_eq!(action, Some(MarkerAction::SelectStop(StopId(7))));
        let (popup, anchor) = scene.popup().expect("popup should be open");
        assert_eq!(popup.title, "Stop");
        assert!((anchor.x - 320.0).abs() < 1e-6);

        assert_eq!(scene.click(ScreenPoint::new(10.0, 10.0)), None);
        assert!(scene.popup().is_none());
    }

    #[test]
    fn topmost_marker_wins() {
        let mut scene = ready_scene();
        scene.add_layer(stop_marker(CENTER, 1));
        scene.add_layer(stop_marker(CENTER, 2));
        assert_eq!(
            scene.click(ScreenPoint::new(320.0, 240.0)),
            Some(MarkerAction::SelectStop(StopId(2)))
        );
    }

    #[test]
    fn detaching_marker_closes_its_popup() {
        let mut scene = ready_scene();
        let id = scene.add_layer(stop_marker(CENTER, 1));
        scene.click(ScreenPoint::new(320.0, 240.0));
        scene.detach(id);
        assert!(scene.popup().is_none());
        scene.attach(id);
        assert!(scene.popup().is_none());
    }

    #[test]
    fn detaching_other_layer_keeps_popup() {
        let mut scene = ready_scene();
        scene.add_layer(stop_marker(CENTER, 1));
        let other = scene.add_layer(stop_marker(LatLng::new(52.50, 13.30), 2));
        scene.click(ScreenPoint::new(320.0, 240.0));
        scene.detach(other);
        assert_eq!(scene.popup().map(|(popup, _)| popup.title.as_str()), Some("Stop"));
    }

    #[test]
    fn polylines_paint_below_markers() {
        let mut scene = ready_scene();
        let marker = scene.add_layer(stop_marker(CENTER, 1));
        let line = scene.add_layer(Layer::Polyline(Polyline {
            path: vec![CENTER, LatLng::new(52.52, 13.40)],
            style: PolylineStyle::tour_route(),
        }));
        let order = |scene: &Scene| scene.attached().map(|(id, _)| id).collect::<Vec<_>>();
        assert_eq!(order(&scene), vec![line, marker]);

        scene.detach(line);
        scene.attach(line);
        assert_eq!(order(&scene), vec![line, marker]);
        // The route never catches clicks meant for the marker.
        assert_eq!(
            scene.click(ScreenPoint::new(320.0, 240.0)),
            Some(MarkerAction::SelectStop(StopId(1)))
        );
    }

    #[test]
    fn teardown_releases_everything() {
        let mut scene = ready_scene();
        scene.add_layer(stop_marker(CENTER, 1));
        scene.add_layer(Layer::Polyline(Polyline {
            path: vec![CENTER, LatLng::new(52.52, 13.40)],
            style: PolylineStyle::tour_route(),
        }));
        scene.teardown();
        assert!(!scene.is_created());
        assert_eq!(scene.attached().count(), 0);
        assert!(scene.visible_tiles().is_empty());
        // The host area survives, so the canvas can be created again.
        assert!(scene.is_ready());
    }
}
