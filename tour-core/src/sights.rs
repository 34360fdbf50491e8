use crate::{
    catalog::{catalog, Sight, SightId},
    error::Error,
};

/// Selection state of the sights browser. Always points at one of the
/// catalog sights, the first one by default.
#[derive(Copy, Clone, Debug)]
pub struct SightBrowser {
    selected: &'static Sight,
}

impl Default for SightBrowser {
    fn default() -> Self {
        Self {
            selected: catalog().first_sight(),
        }
    }
}

impl PartialEq for SightBrowser {
    fn eq(&self, other: &Self) -> bool {
        self.selected.id == other.selected.id
    }
}

impl SightBrowser {
    pub fn selected(&self) -> &'static Sight {
        self.selected
    }

    pub fn is_selected(&self, id: SightId) -> bool {
        self.selected.id == id
    }

    /// Selects the sight with `id`. On an unknown id the selection is left
    /// as it was.
    pub fn select(&mut self, id: SightId) -> Result<&'static Sight, Error> {
        let sight = catalog().sight(id)?;
        self.selected = sight;
        Ok(sight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sight_selected_by_default() {
        let browser = SightBrowser::default();
        assert_eq!(browser.selected().name, "Brandenburg Gate");
        assert!(browser.is_selected(SightId(1)));
    }

    #[test]
    fn selecting_shows_exactly_that_sight() {
        let mut browser = SightBrowser::default();
        for sight in catalog().sights() {
            let selected = browser.select(sight.id).unwrap();
            assert_eq!(selected.id, sight.id);
            let shown = browser.selected();
            assert_eq!(shown.name, sight.name);
            assert_eq!(shown.year_built, sight.year_built);
            assert_eq!(shown.visitors_per_year, sight.visitors_per_year);
            assert_eq!(shown.fun_fact, sight.fun_fact);
            assert_eq!(shown.location, sight.location);
        }
        assert_eq!(browser.selected().name, "Reichstag Building");
        assert_eq!(browser.selected().stop_label(), "Stop #4");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut browser = SightBrowser::default();
        browser.select(SightId(2)).unwrap();
        assert_eq!(
            browser.select(SightId(99)).err(),
            Some(Error::UnknownSight(SightId(99)))
        );
        assert_eq!(browser.selected().name, "Berlin TV Tower");
    }
}
