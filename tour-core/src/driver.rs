use crate::catalog::{catalog, DriverFeed};

/// State of the driver view. The camera feed is a still image, so the
/// play/pause toggle only changes which icon is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DriverPanel {
    is_playing: bool,
}

impl Default for DriverPanel {
    fn default() -> Self {
        Self { is_playing: true }
    }
}

impl DriverPanel {
    pub fn feed(&self) -> &'static DriverFeed {
        catalog().driver_feed()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_the_icon_state() {
        let mut panel = DriverPanel::default();
        assert!(panel.is_playing());
        let image = panel.feed().image;
        panel.toggle_playback();
        assert!(!panel.is_playing());
        assert_eq!(panel.feed().image, image);
        panel.toggle_playback();
        assert!(panel.is_playing());
    }

    #[test]
    fn static_cards() {
        let feed = DriverPanel::default().feed();
        let titles: Vec<_> = feed.stats.iter().map(|card| card.title).collect();
        assert_eq!(titles, ["Current Speed", "Next Stop", "Route Progress"]);
        assert_eq!(feed.stats[0].value, "45 km/h");
        assert_eq!(feed.stats[2].value, "60%");
    }
}
