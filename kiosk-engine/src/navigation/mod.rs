//! In-store navigation
//!
//! Static routing tables keyed by aisle zone. Map coordinates are
//! fractions of the store map, measured from the top-left corner.
//! Unknown zones fall back to the map center with a generic direction.

use serde::{Deserialize, Serialize};

/// Guidance for walking from the entrance to an aisle zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGuidance {
    /// Marker position on the store map, 0.0 (left) to 1.0 (right).
    pub map_x: f64,
    /// Marker position on the store map, 0.0 (top) to 1.0 (bottom).
    pub map_y: f64,
    /// Phrase completing "Walk straight through the ...".
    pub directions: String,
    /// Estimated walking distance in meters.
    pub distance_m: u32,
}

struct Route {
    aisle: &'static str,
    map_x: f64,
    map_y: f64,
    directions: &'static str,
    distance_m: u32,
}

const ROUTES: &[Route] = &[
    Route {
        aisle: "Aisle 1",
        map_x: 0.27,
        map_y: 0.45,
        directions: "entrance, then turn left to Aisle 1",
        distance_m: 35,
    },
    Route {
        aisle: "Aisle 2",
        map_x: 0.37,
        map_y: 0.45,
        directions: "entrance, head straight to Aisle 2",
        distance_m: 40,
    },
    Route {
        aisle: "Aisle 3",
        map_x: 0.47,
        map_y: 0.45,
        directions: "entrance, head to center Aisle 3",
        distance_m: 45,
    },
    Route {
        aisle: "Aisle 4",
        map_x: 0.57,
        map_y: 0.45,
        directions: "entrance, turn slightly right to Aisle 4",
        distance_m: 50,
    },
    Route {
        aisle: "Aisle 5",
        map_x: 0.67,
        map_y: 0.45,
        directions: "entrance, turn right to Aisle 5",
        distance_m: 55,
    },
    Route {
        aisle: "Dairy Section",
        map_x: 0.40,
        map_y: 0.18,
        directions: "entrance, head to the Dairy section at the top",
        distance_m: 50,
    },
    Route {
        aisle: "Meat & Poultry",
        map_x: 0.60,
        map_y: 0.18,
        directions: "entrance, head to Meat & Poultry section at the top right",
        distance_m: 60,
    },
    Route {
        aisle: "Bakery Section",
        map_x: 0.12,
        map_y: 0.25,
        directions: "entrance, turn left to the Bakery section",
        distance_m: 30,
    },
    Route {
        aisle: "Seafood Section",
        map_x: 0.92,
        map_y: 0.25,
        directions: "entrance, head to the right for Seafood section",
        distance_m: 55,
    },
    Route {
        aisle: "Produce Section",
        map_x: 0.08,
        map_y: 0.40,
        directions: "entrance, turn left to the Produce area",
        distance_m: 25,
    },
    Route {
        aisle: "Flowers Section",
        map_x: 0.08,
        map_y: 0.58,
        directions: "entrance, turn left to the Flowers section",
        distance_m: 40,
    },
];

/// Guidance for the given aisle zone.
pub fn guidance_for(aisle: &str) -> RouteGuidance {
    match ROUTES.iter().find(|route| route.aisle == aisle) {
        Some(route) => RouteGuidance {
            map_x: route.map_x,
            map_y: route.map_y,
            directions: route.directions.to_string(),
            distance_m: route.distance_m,
        },
        None => RouteGuidance {
            map_x: 0.47,
            map_y: 0.45,
            directions: "entrance to your destination".to_string(),
            distance_m: 45,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_known_zone_guidance() {
        let guidance = guidance_for("Produce Section");
        assert_eq!(guidance.map_x, 0.08);
        assert_eq!(guidance.map_y, 0.40);
        assert_eq!(guidance.distance_m, 25);
        assert!(guidance.directions.contains("Produce"));
    }

    #[test]
    fn test_unknown_zone_falls_back_to_center() {
        let guidance = guidance_for("Aisle 99");
        assert_eq!(guidance.map_x, 0.47);
        assert_eq!(guidance.map_y, 0.45);
        assert_eq!(guidance.directions, "entrance to your destination");
        assert_eq!(guidance.distance_m, 45);
    }

    #[test]
    fn test_every_catalog_aisle_has_a_route() {
        let catalog = Catalog::load();
        for item in catalog.items() {
            let guidance = guidance_for(&item.aisle);
            assert_ne!(
                guidance.directions, "entrance to your destination",
                "no route for aisle {}",
                item.aisle
            );
        }
    }
}
