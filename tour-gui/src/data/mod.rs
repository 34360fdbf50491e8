mod config;
mod map;

use druid::{Data, Lens};
use tour_core::{
    driver::DriverPanel,
    shell::{Shell, View},
    sights::SightBrowser,
};

pub use crate::data::{config::Config, map::MapDetail};

#[derive(Clone, Default, Data, Lens)]
pub struct AppState {
    #[data(same_fn = "PartialEq::eq")]
    pub shell: Shell,
    pub driver: DriverDetail,
    pub sights: SightsDetail,
    pub map: MapDetail,
}

/// The mounted view, used as the key that switches the main content.
#[derive(Copy, Clone, Debug, PartialEq, Data)]
pub struct Route(#[data(same_fn = "PartialEq::eq")] pub View);

impl AppState {
    pub fn route(&self) -> Route {
        Route(self.shell.active())
    }

    /// Mounts `view`. A freshly mounted view starts from its initial state,
    /// re-selecting the active view changes nothing.
    pub fn navigate(&mut self, view: View) {
        let Some(unmounted) = self.shell.navigate(view) else {
            return;
        };
        log::debug!("navigating from {:?} to {:?}", unmounted, view);
        match view {
            View::Driver => self.driver = DriverDetail::default(),
            View::Sights => self.sights = SightsDetail::default(),
            View::Map => self.map = MapDetail::default(),
        }
    }
}

#[derive(Clone, Default, Data, Lens)]
pub struct DriverDetail {
    #[data(same_fn = "PartialEq::eq")]
    pub panel: DriverPanel,
}

#[derive(Clone, Default, Data, Lens)]
pub struct SightsDetail {
    #[data(same_fn = "PartialEq::eq")]
    pub browser: SightBrowser,
}

#[cfg(test)]
mod tests {
    use tour_core::catalog::StopId;

    use super::*;

    #[test]
    fn navigation_resets_the_mounted_view() {
        let mut state = AppState::default();
        state.navigate(View::Map);
        state.map.panel.select_stop(StopId(2)).unwrap();
        state.map.panel.set_show_route(false);

        // Re-selecting the active view is not a remount.
        state.navigate(View::Map);
        assert!(state.map.panel.is_selected(StopId(2)));

        state.navigate(View::Sights);
        state.navigate(View::Map);
        assert!(state.map.panel.selected_stop().is_none());
        assert!(state.map.panel.show_route());
    }

    #[test]
    fn playback_toggle_survives_other_navigation() {
        let mut state = AppState::default();
        state.driver.panel.toggle_playback();
        state.navigate(View::Driver);
        assert!(!state.driver.panel.is_playing());
    }
}
