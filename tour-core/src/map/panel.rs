use crate::{
    catalog::{catalog, BusStop, StopId},
    error::Error,
};

/// User-facing state of the map view: the two visibility toggles and the
/// stop shown in the detail overlay.
#[derive(Copy, Clone, Debug)]
pub struct MapPanel {
    show_restaurants: bool,
    show_route: bool,
    selected_stop: Option<&'static BusStop>,
}

impl Default for MapPanel {
    fn default() -> Self {
        Self {
            show_restaurants: true,
            show_route: true,
            selected_stop: None,
        }
    }
}

impl PartialEq for MapPanel {
    fn eq(&self, other: &Self) -> bool {
        self.show_restaurants == other.show_restaurants
            && self.show_route == other.show_route
            && self.selected_stop.map(|stop| stop.id) == other.selected_stop.map(|stop| stop.id)
    }
}

impl MapPanel {
    pub fn show_restaurants(&self) -> bool {
        self.show_restaurants
    }

    pub fn set_show_restaurants(&mut self, show: bool) {
        self.show_restaurants = show;
    }

    pub fn show_route(&self) -> bool {
        self.show_route
    }

    pub fn set_show_route(&mut self, show: bool) {
        self.show_route = show;
    }

    pub fn selected_stop(&self) -> Option<&'static BusStop> {
        self.selected_stop
    }

    pub fn is_selected(&self, id: StopId) -> bool {
        self.selected_stop.is_some_and(|stop| stop.id == id)
    }

    pub fn select_stop(&mut self, id: StopId) -> Result<&'static BusStop, Error> {
        let stop = catalog().stop(id)?;
        self.selected_stop = Some(stop);
        Ok(stop)
    }

    pub fn dismiss_stop(&mut self) {
        self.selected_stop = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let panel = MapPanel::default();
        assert!(panel.show_restaurants());
        assert!(panel.show_route());
        assert!(panel.selected_stop().is_none());
    }

    #[test]
    fn select_and_dismiss() {
        let mut panel = MapPanel::default();
        let stop = panel.select_stop(StopId(2)).unwrap();
        assert_eq!(stop.name, "TV Tower");
        assert_eq!(stop.stop_label(), "Stop #2");
        assert_eq!(stop.arrival_time, "10:20 AM");
        assert!(panel.is_selected(StopId(2)));
        assert!(!panel.is_selected(StopId(1)));

        panel.dismiss_stop();
        assert!(panel.selected_stop().is_none());
        assert_eq!(panel, MapPanel::default());
    }

    #[test]
    fn unknown_stop_keeps_selection() {
        let mut panel = MapPanel::default();
        panel.select_stop(StopId(4)).unwrap();
        assert_eq!(panel.select_stop(StopId(40)).err(), Some(Error::UnknownStop(StopId(40))));
        assert!(panel.is_selected(StopId(4)));
    }
}
