use druid::Selector;
use tour_core::shell::View;

// Navigation

pub const NAVIGATE: Selector<View> = Selector::new("app.navigate");
