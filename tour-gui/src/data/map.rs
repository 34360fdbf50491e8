use druid::{lens, Data, Lens, LensExt};
use tour_core::map::MapPanel;

#[derive(Clone, Default, Data, Lens)]
pub struct MapDetail {
    #[data(same_fn = "PartialEq::eq")]
    pub panel: MapPanel,
}

impl MapDetail {
    pub fn show_restaurants() -> impl Lens<MapDetail, bool> {
        Self::panel.then(lens::Map::new(
            |panel: &MapPanel| panel.show_restaurants(),
            |panel: &mut MapPanel, show| panel.set_show_restaurants(show),
        ))
    }

    pub fn show_route() -> impl Lens<MapDetail, bool> {
        Self::panel.then(lens::Map::new(
            |panel: &MapPanel| panel.show_route(),
            |panel: &mut MapPanel, show| panel.set_show_route(show),
        ))
    }
}
