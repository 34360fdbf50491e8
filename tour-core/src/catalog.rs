//! Static tour data: sights, bus stops, restaurants and the route between
//! the stops. Everything here is built once and shared read-only.

use std::fmt;

use once_cell::sync::Lazy;

use crate::{error::Error, geo::LatLng};

/// Center of the tour map, between the Reichstag and the TV Tower.
pub const MAP_CENTER: LatLng = LatLng::new(52.5194, 13.3930);
pub const MAP_ZOOM: u8 = 14;

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::berlin);

/// The process-wide tour catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SightId(pub u32);

impl fmt::Display for SightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RestaurantId(pub u32);

#[derive(Debug)]
pub struct Sight {
    pub id: SightId,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub year_built: &'static str,
    pub visitors_per_year: &'static str,
    pub fun_fact: &'static str,
    pub location: &'static str,
}

impl Sight {
    pub fn stop_label(&self) -> String {
        format!("Stop #{}", self.id)
    }
}

#[derive(Debug)]
pub struct BusStop {
    pub id: StopId,
    pub name: &'static str,
    pub position: LatLng,
    pub arrival_time: &'static str,
}

impl BusStop {
    /// Sequence label as shown on popups and in the sidebar.
    pub fn stop_label(&self) -> String {
        format!("Stop #{}", self.id)
    }
}

#[derive(Debug)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: &'static str,
    pub cuisine: &'static str,
    pub position: LatLng,
    pub rating: f64,
    pub distance: &'static str,
}

impl Restaurant {
    pub fn rating_label(&self) -> String {
        format!("⭐ {}", self.rating)
    }
}

#[derive(Debug)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub detail: Option<&'static str>,
}

/// The simulated front camera shown in the driver view.
#[derive(Debug)]
pub struct DriverFeed {
    pub image: &'static str,
    pub caption: &'static str,
    pub stats: [StatCard; 3],
    pub about: &'static str,
}

#[derive(Debug)]
pub struct Catalog {
    sights: Vec<Sight>,
    stops: Vec<BusStop>,
    restaurants: Vec<Restaurant>,
    route: Vec<LatLng>,
    driver_feed: DriverFeed,
}

impl Catalog {
    pub fn sights(&self) -> &[Sight] {
        &self.sights
    }

    pub fn first_sight(&self) -> &Sight {
        &self.sights[0]
    }

    pub fn sight(&self, id: SightId) -> Result<&Sight, Error> {
        self.sights
            .iter()
            .find(|sight| sight.id == id)
            .ok_or(Error::UnknownSight(id))
    }

    pub fn stops(&self) -> &[BusStop] {
        &self.stops
    }

    pub fn stop(&self, id: StopId) -> Result<&BusStop, Error> {
        self.stops
            .iter()
            .find(|stop| stop.id == id)
            .ok_or(Error::UnknownStop(id))
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Stop coordinates in tour order.
    pub fn route(&self) -> &[LatLng] {
        &self.route
    }

    pub fn driver_feed(&self) -> &DriverFeed {
        &self.driver_feed
    }
}

impl Catalog {
    fn berlin() -> Self {
        let stops = vec![
            BusStop {
                id: StopId(1),
                name: "Brandenburg Gate",
                position: LatLng::new(52.5163, 13.3777),
                arrival_time: "10:00 AM",
            },
            BusStop {
                id: StopId(2),
                name: "TV Tower",
                position: LatLng::new(52.5208, 13.4094),
                arrival_time: "10:20 AM",
            },
            BusStop {
                id: StopId(3),
                name: "Berlin Cathedral",
                position: LatLng::new(52.5191, 13.4013),
                arrival_time: "10:40 AM",
            },
            BusStop {
                id: StopId(4),
                name: "Reichstag",
                position: LatLng::new(52.5186, 13.3762),
                arrival_time: "11:00 AM",
            },
        ];
        let route = stops.iter().map(|stop| stop.position).collect();

        Self {
            sights: berlin_sights(),
            stops,
            restaurants: berlin_restaurants(),
            route,
            driver_feed: DriverFeed {
                image: "https://images.unsplash.com/photo-1647098025970-434524d35c02?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                caption: "Front Camera - HD 1080p",
                stats: [
                    StatCard {
                        title: "Current Speed",
                        value: "45 km/h",
                        detail: None,
                    },
                    StatCard {
                        title: "Next Stop",
                        value: "Brandenburg Gate",
                        detail: Some("In 3 minutes"),
                    },
                    StatCard {
                        title: "Route Progress",
                        value: "60%",
                        detail: Some("Complete"),
                    },
                ],
                about: "This view shows a live feed from the front-facing camera mounted on the bus. \
                        Passengers can enjoy seeing the road ahead and get a driver's perspective of \
                        navigating through Berlin's historic streets. The feed updates in real-time \
                        as the bus moves through the city.",
            },
        }
    }
}

fn berlin_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: RestaurantId(1),
            name: "Berliner Küche",
            cuisine: "German",
            position: LatLng::new(52.5170, 13.3800),
            rating: 4.5,
            distance: "50m from Brandenburg Gate",
        },
        Restaurant {
            id: RestaurantId(2),
            name: "Bella Italia",
            cuisine: "Italian",
            position: LatLng::new(52.5200, 13.4080),
            rating: 4.3,
            distance: "100m from TV Tower",
        },
        Restaurant {
            id: RestaurantId(3),
            name: "Curry 36",
            cuisine: "Fast Food",
            position: LatLng::new(52.5195, 13.4020),
            rating: 4.7,
            distance: "80m from Cathedral",
        },
        Restaurant {
            id: RestaurantId(4),
            name: "Hauptstadt Café",
            cuisine: "Café",
            position: LatLng::new(52.5180, 13.3770),
            rating: 4.6,
            distance: "70m from Reichstag",
        },
    ]
}

fn berlin_sights() -> Vec<Sight> {
    vec![
        Sight {
            id: SightId(1),
            name: "Brandenburg Gate",
            image: "https://images.unsplash.com/photo-1640603799331-15e3d8b14ada?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
            description: "The Brandenburg Gate is an 18th-century neoclassical monument, built on the \
                          orders of Prussian king Frederick William II. It's one of the most iconic \
                          landmarks in Germany and a symbol of German reunification.",
            year_built: "1791",
            visitors_per_year: "10 million+",
            fun_fact: "The gate was once part of a wall that divided Berlin during the Cold War.",
            location: "Pariser Platz, 10117 Berlin",
        },
        Sight {
            id: SightId(2),
            name: "Berlin TV Tower",
            image: "https://images.unsplash.com/photo-1560930950-5cc20e80e392?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
            description: "Standing at 368 meters tall, the Fernsehturm (TV Tower) is the tallest \
                          structure in Germany. It offers panoramic views of Berlin from its \
                          observation deck and rotating restaurant.",
            year_built: "1969",
            visitors_per_year: "1.2 million",
            fun_fact: "On sunny days, sunlight creates a cross reflection on the tower's sphere, \
                       nicknamed 'Pope's Revenge' by Berliners.",
            location: "Panoramastraße 1A, 10178 Berlin",
        },
        Sight {
            id: SightId(3),
            name: "Berlin Cathedral",
            image: "https://images.unsplash.com/photo-1569404225992-9ac478f3c14e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
            description: "The Berlin Cathedral (Berliner Dom) is a magnificent Baroque-style \
                          Protestant cathedral located on Museum Island. Its stunning dome and \
                          ornate interior make it one of Berlin's most beautiful buildings.",
            year_built: "1905",
            visitors_per_year: "800,000",
            fun_fact: "The cathedral's dome walkway offers one of the best views of central \
                       Berlin, accessible by climbing 270 steps.",
            location: "Am Lustgarten, 10178 Berlin",
        },
        Sight {
            id: SightId(4),
            name: "Reichstag Building",
            image: "https://images.unsplash.com/photo-1564613655657-7f7a7df91177?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
            description: "The Reichstag is the historic seat of the German parliament (Bundestag). \
                          Its modern glass dome, designed by Norman Foster, symbolizes transparency \
                          in government and offers spectacular city views.",
            year_built: "1894 (Dome rebuilt 1999)",
            visitors_per_year: "3 million",
            fun_fact: "The words 'Dem Deutschen Volke' (To the German People) were added to the \
                       building in 1916 using melted-down French cannons from the Napoleonic Wars.",
            location: "Platz der Republik 1, 11011 Berlin",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = catalog();
        for (i, sight) in catalog.sights().iter().enumerate() {
            assert!(catalog.sights()[i + 1..].iter().all(|s| s.id != sight.id));
        }
        for (i, stop) in catalog.stops().iter().enumerate() {
            assert!(catalog.stops()[i + 1..].iter().all(|s| s.id != stop.id));
        }
    }

    #[test]
    fn route_follows_stops_in_tour_order() {
        let catalog = catalog();
        assert_eq!(catalog.route().len(), 4);
        for (point, stop) in catalog.route().iter().zip(catalog.stops()) {
            assert_eq!(*point, stop.position);
        }
        assert_eq!(catalog.stops()[1].name, "TV Tower");
    }

    #[test]
    fn lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.stop(StopId(3)).map(|s| s.name), Ok("Berlin Cathedral"));
        assert_eq!(catalog.sight(SightId(4)).map(|s| s.year_built), Ok("1894 (Dome rebuilt 1999)"));
        assert_eq!(
            catalog.stop(StopId(9)).map(|s| s.name),
            Err(Error::UnknownStop(StopId(9)))
        );
        assert_eq!(
            catalog.sight(SightId(0)).map(|s| s.name),
            Err(Error::UnknownSight(SightId(0)))
        );
    }

    #[test]
    fn labels() {
        let catalog = catalog();
        assert_eq!(catalog.stops()[1].stop_label(), "Stop #2");
        assert_eq!(catalog.restaurants()[2].rating_label(), "⭐ 4.7");
        assert_eq!(catalog.driver_feed().stats[1].detail, Some("In 3 minutes"));
    }
}
