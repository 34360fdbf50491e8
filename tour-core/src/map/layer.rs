use crate::{
    catalog::StopId,
    geo::{LatLng, TileId},
};

/// Opaque handle to a layer placed on a map surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(pub(crate) usize);

/// Color as `0xRRGGBBAA`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const WHITE: Rgba = Rgba(0xffffffff);
    pub const STOP_BLUE: Rgba = Rgba(0x3b82f6ff);
    pub const RESTAURANT_RED: Rgba = Rgba(0xef4444ff);

    pub fn with_opacity(self, opacity: f64) -> Rgba {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u32;
        Rgba((self.0 & 0xffffff00) | alpha)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Stop,
    Restaurant,
}

/// What a click on a marker does, besides opening its popup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkerAction {
    SelectStop(StopId),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerIcon {
    pub fill: Rgba,
    pub diameter: f64,
    pub border: f64,
    pub border_color: Rgba,
}

impl MarkerIcon {
    pub const STOP: MarkerIcon = MarkerIcon {
        fill: Rgba::STOP_BLUE,
        diameter: 32.0,
        border: 3.0,
        border_color: Rgba::WHITE,
    };
    pub const RESTAURANT: MarkerIcon = MarkerIcon {
        fill: Rgba::RESTAURANT_RED,
        diameter: 28.0,
        border: 3.0,
        border_color: Rgba::WHITE,
    };

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub popup: Option<Popup>,
    pub action: Option<MarkerAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolylineStyle {
    pub color: Rgba,
    pub weight: f64,
    pub opacity: f64,
    /// Alternating dash and gap lengths, in pixels.
    pub dash: &'static [f64],
}

impl PolylineStyle {
    pub fn tour_route() -> Self {
        Self {
            color: Rgba::STOP_BLUE,
            weight: 4.0,
            opacity: 0.7,
            dash: &[10.0, 10.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub path: Vec<LatLng>,
    pub style: PolylineStyle,
}

/// Raster tile source, addressed by a `{s}`/`{z}`/`{x}`/`{y}` URL template.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
}

impl TileLayer {
    pub fn url(&self, tile: TileId) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (tile.x as usize + tile.y as usize) % self.subdomains.len();
            self.subdomains[index].as_str()
        };
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    Tiles(TileLayer),
    Marker(Marker),
    Polyline(Polyline),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_url_rotates_subdomains() {
        let layer = TileLayer {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            attribution: String::new(),
        };
        let tile = TileId {
            zoom: 14,
            x: 8801,
            y: 5373,
        };
        assert_eq!(
            layer.url(tile),
            "https://c.tile.openstreetmap.org/14/8801/5373.png"
        );
    }

    #[test]
    fn opacity_replaces_alpha() {
        assert_eq!(Rgba::STOP_BLUE.with_opacity(0.0), Rgba(0x3b82f600));
        assert_eq!(Rgba::STOP_BLUE.with_opacity(1.0), Rgba(0x3b82f6ff));
    }
}
