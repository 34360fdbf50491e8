/// The views the shell can show, in sidebar order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Driver,
    Sights,
    Map,
}

impl View {
    pub const ALL: [View; 3] = [View::Driver, View::Sights, View::Map];

    pub fn title(self) -> &'static str {
        match self {
            View::Driver => "Driver View",
            View::Sights => "Historical Sights",
            View::Map => "Map & Directions",
        }
    }
}

/// Holds the active view. Exactly one view is mounted at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Shell {
    active: View,
}

impl Shell {
    pub fn active(&self) -> View {
        self.active
    }

    pub fn is_mounted(&self, view: View) -> bool {
        self.active == view
    }

    /// Switches to `view` and returns the view that got unmounted, or `None`
    /// if `view` was already active.
    pub fn navigate(&mut self, view: View) -> Option<View> {
        if self.active == view {
            None
        } else {
            Some(std::mem::replace(&mut self.active, view))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_driver_view() {
        let shell = Shell::default();
        assert_eq!(shell.active(), View::Driver);
    }

    #[test]
    fn exactly_one_view_mounted() {
        let mut shell = Shell::default();
        for view in View::ALL {
            shell.navigate(view);
            let mounted: Vec<_> = View::ALL
                .into_iter()
                .filter(|&v| shell.is_mounted(v))
                .collect();
            assert_eq!(mounted, vec![view]);
        }
    }

    #[test]
    fn navigate_reports_unmounted_view() {
        let mut shell = Shell::default();
        assert_eq!(shell.navigate(View::Map), Some(View::Driver));
        assert_eq!(shell.navigate(View::Map), None);
        assert_eq!(shell.navigate(View::Sights), Some(View::Map));
    }
}
