mod layer;
mod panel;
mod scene;
mod surface;
mod tour;

pub use layer::{
    Layer, LayerId, Marker, MarkerAction, MarkerIcon, MarkerKind, Polyline, PolylineStyle, Popup,
    Rgba, TileLayer,
};
pub use panel::MapPanel;
pub use scene::Scene;
pub use surface::MapSurface;
pub use tour::TourMap;
