use crate::{
    catalog::{BusStop, Catalog, Restaurant, StopId, MAP_CENTER, MAP_ZOOM},
    geo::ScreenPoint,
};

use super::{
    Layer, LayerId, MapPanel, MapSurface, Marker, MarkerAction, MarkerIcon, MarkerKind, Polyline,
    PolylineStyle, Popup, TileLayer,
};

// Handles of everything the tour map placed on its surface.
struct TourLayers {
    tiles: LayerId,
    stops: Vec<LayerId>,
    restaurants: Vec<LayerId>,
    route: LayerId,
}

/// Owns a map surface for the lifetime of the map view and keeps its
/// layers in sync with a `MapPanel`.
///
/// The surface is initialized lazily on the first render pass where it is
/// ready, exactly once, and torn down on `teardown` or drop.
pub struct TourMap<S: MapSurface> {
    catalog: &'static Catalog,
    tiles: TileLayer,
    surface: S,
    layers: Option<TourLayers>,
    show_restaurants: bool,
    show_route: bool,
}

impl<S: MapSurface> TourMap<S> {
    pub fn new(catalog: &'static Catalog, tiles: TileLayer, surface: S) -> Self {
        Self {
            catalog,
            tiles,
            surface,
            layers: None,
            show_restaurants: true,
            show_route: true,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_initialized(&self) -> bool {
        self.layers.is_some()
    }

    /// Places the tile layer, markers and route. Returns false, leaving the
    /// map uninitialized, if the surface is not ready yet.
    pub fn initialize(&mut self) -> bool {
        if self.layers.is_some() {
            return true;
        }
        if !self.surface.is_ready() {
            return false;
        }

        let catalog = self.catalog;
        self.surface.create_canvas(MAP_CENTER, MAP_ZOOM);
        let tiles = self.surface.add_layer(Layer::Tiles(self.tiles.clone()));
        let stops = catalog
            .stops()
            .iter()
            .map(|stop| self.surface.add_layer(Layer::Marker(stop_marker(stop))))
            .collect();
        let restaurants = catalog
            .restaurants()
            .iter()
            .map(|restaurant| {
                self.surface
                    .add_layer(Layer::Marker(restaurant_marker(restaurant)))
            })
            .collect();
        let route = self.surface.add_layer(Layer::Polyline(Polyline {
            path: catalog.route().to_vec(),
            style: PolylineStyle::tour_route(),
        }));

        log::debug!("map initialized");
        self.layers = Some(TourLayers {
            tiles,
            stops,
            restaurants,
            route,
        });
        self.apply_visibility();
        true
    }

    /// Render pass: initialize if possible, then apply the panel toggles.
    pub fn render(&mut self, panel: &MapPanel) -> bool {
        self.show_restaurants = panel.show_restaurants();
        self.show_route = panel.show_route();
        if self.initialize() {
            self.apply_visibility();
            true
        } else {
            false
        }
    }

    pub fn set_show_restaurants(&mut self, show: bool) {
        self.show_restaurants = show;
        self.apply_visibility();
    }

    pub fn set_show_route(&mut self, show: bool) {
        self.show_route = show;
        self.apply_visibility();
    }

    /// Forwards a click to the surface, returning the stop whose marker was
    /// hit.
    pub fn click(&mut self, point: ScreenPoint) -> Option<StopId> {
        if self.layers.is_none() {
            return None;
        }
        match self.surface.click(point)? {
            MarkerAction::SelectStop(id) => Some(id),
        }
    }

    pub fn teardown(&mut self) {
        if self.layers.take().is_some() {
            self.surface.teardown();
            log::debug!("map torn down");
        }
    }

    fn apply_visibility(&mut self) {
        let Some(layers) = &self.layers else {
            return;
        };
        for &id in &layers.restaurants {
            if self.show_restaurants {
                self.surface.attach(id);
            } else {
                self.surface.detach(id);
            }
        }
        if self.show_route {
            self.surface.attach(layers.route);
        } else {
            self.surface.detach(layers.route);
        }
        // Bus stops and tiles are always visible.
        self.surface.attach(layers.tiles);
        for &id in &layers.stops {
            self.surface.attach(id);
        }
    }
}

impl<S: MapSurface> Drop for TourMap<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn stop_marker(stop: &BusStop) -> Marker {
    Marker {
        kind: MarkerKind::Stop,
        position: stop.position,
        icon: MarkerIcon::STOP,
        popup: Some(Popup {
            title: stop.name.to_string(),
            lines: vec![stop.stop_label(), stop.arrival_time.to_string()],
        }),
        action: Some(MarkerAction::SelectStop(stop.id)),
    }
}

fn restaurant_marker(restaurant: &Restaurant) -> Marker {
    Marker {
        kind: MarkerKind::Restaurant,
        position: restaurant.position,
        icon: MarkerIcon::RESTAURANT,
        popup: Some(Popup {
            title: restaurant.name.to_string(),
            lines: vec![
                restaurant.cuisine.to_string(),
                restaurant.rating_label(),
                restaurant.distance.to_string(),
            ],
        }),
        action: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::catalog,
        map::{MarkerKind, Scene},
    };

    fn osm() -> TileLayer {
        TileLayer {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            attribution: "© OpenStreetMap contributors".into(),
        }
    }

    fn ready_map() -> TourMap<Scene> {
        let mut scene = Scene::new();
        scene.set_size(800.0, 600.0);
        let mut map = TourMap::new(catalog(), osm(), scene);
        assert!(map.render(&MapPanel::default()));
        map
    }

    fn counts(map: &TourMap<Scene>) -> (usize, usize, usize) {
        let scene = map.surface();
        (
            scene.marker_count(MarkerKind::Stop),
            scene.marker_count(MarkerKind::Restaurant),
            scene.polylines().count(),
        )
    }

    #[test]
    fn initial_layers() {
        let map = ready_map();
        assert_eq!(counts(&map), (4, 4, 1));
        let scene = map.surface();
        assert_eq!(scene.tile_layers().count(), 1);
        let route = scene.polylines().next().unwrap();
        assert_eq!(route.path, catalog().route());
        assert_eq!(route.style.dash, &[10.0, 10.0][..]);
        let viewport = scene.viewport().unwrap();
        assert_eq!(viewport.center, MAP_CENTER);
        assert_eq!(viewport.zoom, MAP_ZOOM);
    }

    #[test]
    fn initialization_runs_once() {
        let mut map = ready_map();
        assert!(map.initialize());
        assert!(map.render(&MapPanel::default()));
        assert_eq!(counts(&map), (4, 4, 1));
        assert_eq!(map.surface().attached().count(), 10);
    }

    #[test]
    fn unready_surface_defers_initialization() {
        let mut map = TourMap::new(catalog(), osm(), Scene::new());
        assert!(!map.render(&MapPanel::default()));
        assert!(!map.is_initialized());
        assert_eq!(map.surface().attached().count(), 0);
        assert_eq!(map.click(ScreenPoint::new(1.0, 1.0)), None);

        map.surface_mut().set_size(800.0, 600.0);
        assert!(map.render(&MapPanel::default()));
        assert_eq!(counts(&map), (4, 4, 1));
    }

    #[test]
    fn toggles_made_before_initialization_apply() {
        let mut map = TourMap::new(catalog(), osm(), Scene::new());
        let mut panel = MapPanel::default();
        panel.set_show_restaurants(false);
        panel.set_show_route(false);
        assert!(!map.render(&panel));

        map.surface_mut().set_size(800.0, 600.0);
        assert!(map.render(&panel));
        assert_eq!(counts(&map), (4, 0, 0));
    }

    #[test]
    fn restaurant_toggle_leaves_stops_alone() {
        let mut map = ready_map();
        for show_route in [true, false] {
            map.set_show_route(show_route);
            map.set_show_restaurants(false);
            let (stops, restaurants, _) = counts(&map);
            assert_eq!((stops, restaurants), (4, 0));
            map.set_show_restaurants(true);
            let (stops, restaurants, _) = counts(&map);
            assert_eq!((stops, restaurants), (4, 4));
        }
    }

    #[test]
    fn route_toggle_restores_same_path() {
        let mut map = ready_map();
        map.set_show_route(false);
        assert_eq!(map.surface().polylines().count(), 0);
        map.set_show_route(false);
        assert_eq!(map.surface().polylines().count(), 0);
        map.set_show_route(true);
        let lines: Vec<_> = map.surface().polylines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].path.len(), 4);
        assert_eq!(lines[0].path, catalog().route());
        assert_eq!(counts(&map).0, 4);
    }

    fn paint_order(map: &TourMap<Scene>) -> Vec<LayerId> {
        map.surface().attached().map(|(id, _)| id).collect()
    }

    #[test]
    fn toggling_restores_paint_order() {
        let mut map = ready_map();
        let initial = paint_order(&map);
        let kinds: Vec<_> = map
            .surface()
            .attached()
            .map(|(_, layer)| match layer {
                Layer::Tiles(_) => 'T',
                Layer::Polyline(_) => 'P',
                Layer::Marker(marker) if marker.kind == MarkerKind::Stop => 'S',
                Layer::Marker(_) => 'R',
            })
            .collect();
        assert_eq!(kinds, "TPSSSSRRRR".chars().collect::<Vec<_>>());

        map.set_show_restaurants(false);
        map.set_show_restaurants(true);
        assert_eq!(paint_order(&map), initial);

        map.set_show_route(false);
        map.set_show_route(true);
        assert_eq!(paint_order(&map), initial);
    }

    #[test]
    fn hiding_restaurants_closes_their_popup() {
        let mut map = ready_map();
        let curry = &catalog().restaurants()[2];
        let point = map.surface().to_screen(curry.position).unwrap();
        map.click(point);
        assert!(map.surface().popup().is_some());

        map.set_show_restaurants(false);
        map.set_show_restaurants(true);
        assert!(map.surface().popup().is_none());
    }

    #[test]
    fn clicking_stop_marker_selects_it() {
        let mut map = ready_map();
        let tv_tower = &catalog().stops()[1];
        let point = map.surface().to_screen(tv_tower.position).unwrap();
        assert_eq!(map.click(point), Some(tv_tower.id));

        let (popup, _) = map.surface().popup().unwrap();
        assert_eq!(popup.title, "TV Tower");
        assert_eq!(popup.lines, vec!["Stop #2".to_string(), "10:20 AM".to_string()]);
    }

    #[test]
    fn clicking_restaurant_opens_popup_only() {
        let mut map = ready_map();
        let curry = &catalog().restaurants()[2];
        let point = map.surface().to_screen(curry.position).unwrap();
        assert_eq!(map.click(point), None);
        let (popup, _) = map.surface().popup().unwrap();
        assert_eq!(popup.title, "Curry 36");
        assert_eq!(popup.lines[1], "⭐ 4.7");
    }

    #[test]
    fn selecting_and_dismissing_leaves_layers_unchanged() {
        let mut map = ready_map();
        let mut panel = MapPanel::default();
        let stop = panel.select_stop(StopId(2)).unwrap();
        assert_eq!(
            (stop.name, stop.stop_label(), stop.arrival_time),
            ("TV Tower", "Stop #2".to_string(), "10:20 AM")
        );
        map.render(&panel);
        panel.dismiss_stop();
        map.render(&panel);
        assert!(panel.selected_stop().is_none());
        assert_eq!(counts(&map), (4, 4, 1));
    }

    #[test]
    fn teardown_allows_clean_reinitialization() {
        let mut map = ready_map();
        map.teardown();
        assert!(!map.is_initialized());
        assert!(!map.surface().is_created());
        assert_eq!(map.surface().attached().count(), 0);

        assert!(map.render(&MapPanel::default()));
        assert_eq!(counts(&map), (4, 4, 1));
        assert_eq!(map.surface().attached().count(), 10);
    }
}
