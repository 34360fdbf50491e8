//! Web Mercator projection and slippy-map tile math.

use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

// Latitude at which the Web Mercator world becomes a square.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point in pixels, either on the whole projected world or relative to the
/// top-left corner of a viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM))
}

/// Projects a coordinate to world pixels at `zoom`.
pub fn project(pos: LatLng, zoom: u8) -> ScreenPoint {
    let size = world_size(zoom);
    let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (pos.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    ScreenPoint::new(x, y)
}

pub fn unproject(point: ScreenPoint, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lng = point.x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * point.y / size);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileId {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

/// A tile together with the viewport position of its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TilePlacement {
    pub tile: TileId,
    pub origin: ScreenPoint,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
        }
    }

    fn top_left(&self) -> ScreenPoint {
        let center = project(self.center, self.zoom);
        ScreenPoint::new(center.x - self.width / 2.0, center.y - self.height / 2.0)
    }

    pub fn to_screen(&self, pos: LatLng) -> ScreenPoint {
        let world = project(pos, self.zoom);
        let top_left = self.top_left();
        ScreenPoint::new(world.x - top_left.x, world.y - top_left.y)
    }

    pub fn to_lat_lng(&self, point: ScreenPoint) -> LatLng {
        let top_left = self.top_left();
        unproject(
            ScreenPoint::new(point.x + top_left.x, point.y + top_left.y),
            self.zoom,
        )
    }

    /// Moves the map content by `(dx, dy)` screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let size = world_size(self.zoom);
        let center = project(self.center, self.zoom);
        let y = (center.y - dy).clamp(0.0, size);
        self.center = unproject(ScreenPoint::new(center.x - dx, y), self.zoom);
    }

    /// Changes the zoom level, keeping the center fixed. Returns false if
    /// the zoom was already at the limit.
    pub fn zoom_by(&mut self, delta: i32) -> bool {
        let zoom = (i32::from(self.zoom) + delta).clamp(i32::from(MIN_ZOOM), i32::from(MAX_ZOOM));
        let changed = zoom != i32::from(self.zoom);
        self.zoom = zoom as u8;
        changed
    }

    /// Tiles intersecting the viewport, row by row. Columns wrap around the
    /// antimeridian, rows outside the world are skipped.
    pub fn visible_tiles(&self) -> Vec<TilePlacement> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec::new();
        }
        let count = 1i64 << self.zoom;
        let top_left = self.top_left();
        let x0 = (top_left.x / TILE_SIZE).floor() as i64;
        let x1 = ((top_left.x + self.width) / TILE_SIZE).ceil() as i64;
        let y0 = ((top_left.y / TILE_SIZE).floor() as i64).max(0);
        let y1 = (((top_left.y + self.height) / TILE_SIZE).ceil() as i64).min(count);

        let mut tiles = Vec::new();
        for y in y0..y1 {
            for x in x0..x1 {
                tiles.push(TilePlacement {
                    tile: TileId {
                        zoom: self.zoom,
                        x: x.rem_euclid(count) as u32,
                        y: y as u32,
                    },
                    origin: ScreenPoint::new(
                        x as f64 * TILE_SIZE - top_left.x,
                        y as f64 * TILE_SIZE - top_left.y,
                    ),
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: LatLng = LatLng::new(52.5194, 13.3930);

    #[test]
    fn projection_round_trips() {
        let point = project(BERLIN, 14);
        let back = unproject(point, 14);
        assert!((back.lat - BERLIN.lat).abs() < 1e-9);
        assert!((back.lng - BERLIN.lng).abs() < 1e-9);
    }

    #[test]
    fn berlin_lands_on_known_tile() {
        let point = project(BERLIN, 14);
        assert_eq!((point.x / TILE_SIZE).floor(), 8801.0);
        assert_eq!((point.y / TILE_SIZE).floor(), 5373.0);
    }

    #[test]
    fn center_projects_to_middle_of_viewport() {
        let viewport = Viewport::new(BERLIN, 14, 800.0, 600.0);
        let center = viewport.to_screen(BERLIN);
        assert!((center.x - 400.0).abs() < 1e-6);
        assert!((center.y - 300.0).abs() < 1e-6);

        // North is up, east is right.
        let north_east = viewport.to_screen(LatLng::new(52.53, 13.40));
        assert!(north_east.x > 400.0);
        assert!(north_east.y < 300.0);
    }

    #[test]
    fn panning_moves_content_with_the_pointer() {
        let mut viewport = Viewport::new(BERLIN, 14, 800.0, 600.0);
        let before = viewport.to_screen(BERLIN);
        viewport.pan_by(50.0, -20.0);
        let after = viewport.to_screen(BERLIN);
        assert!((after.x - before.x - 50.0).abs() < 1e-6);
        assert!((after.y - before.y + 20.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::new(BERLIN, MAX_ZOOM, 100.0, 100.0);
        assert!(!viewport.zoom_by(1));
        assert_eq!(viewport.zoom, MAX_ZOOM);
        assert!(viewport.zoom_by(-3));
        assert_eq!(viewport.zoom, MAX_ZOOM - 3);
    }

    #[test]
    fn visible_tiles_cover_viewport() {
        let viewport = Viewport::new(BERLIN, 14, 800.0, 600.0);
        let tiles = viewport.visible_tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.len() <= 5 * 4);
        assert!(tiles.iter().all(|p| p.tile.zoom == 14));
        assert!(tiles.iter().all(|p| p.tile.x < 1 << 14 && p.tile.y < 1 << 14));
        assert!(tiles.iter().any(|p| p.tile.x == 8801 && p.tile.y == 5373));
        assert!(tiles.iter().all(|p| p.origin.x > -TILE_SIZE && p.origin.x < 800.0));
        assert!(tiles.iter().all(|p| p.origin.y > -TILE_SIZE && p.origin.y < 600.0));
    }

    #[test]
    fn whole_world_at_zoom_zero() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 0, 256.0, 256.0);
        let tiles = viewport.visible_tiles();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].tile, TileId { zoom: 0, x: 0, y: 0 });
    }

    #[test]
    fn empty_viewport_has_no_tiles() {
        let viewport = Viewport::new(BERLIN, 14, 0.0, 0.0);
        assert!(viewport.visible_tiles().is_empty());
    }
}
