use geo_core::{Coordinate, DistanceMetric, Haversine, NearestNeighborFinder};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(lat, lng)| Coordinate::new(lat, lng).expect("strategy stays in range"))
}

fn antipode(c: &Coordinate) -> Coordinate {
    let lng = if c.longitude > 0.0 {
        c.longitude - 180.0
    } else {
        c.longitude + 180.0
    };
    Coordinate::new(-c.latitude, lng).expect("antipode stays in range")
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let metric = Haversine::default();
        let ab = metric.distance(&a, &b).unwrap();
        let ba = metric.distance(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-6, "{} != {}", ab, ba);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        let d = Haversine::default().distance(&a, &a).unwrap();
        prop_assert_eq!(d, 0.0);
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(a in coordinate(), b in coordinate()) {
        let d = Haversine::default().distance(&a, &b).unwrap();
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * geo_core::EARTH_RADIUS_METERS + 1e-3);
    }

    #[test]
    fn antipodal_distance_is_half_circumference(a in coordinate()) {
        let d = Haversine::default().distance(&a, &antipode(&a)).unwrap();
        prop_assert!(d.is_finite());
        prop_assert!((d - std::f64::consts::PI * geo_core::EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn every_point_gets_one_entry_and_never_itself(
        coords in prop::collection::vec(coordinate(), 0..24)
    ) {
        let points: Vec<(usize, Coordinate)> = coords.into_iter().enumerate().collect();
        let result = NearestNeighborFinder::new().find_nearest(&points).unwrap();

        prop_assert_eq!(result.len(), points.len());
        for (entry, (id, _)) in result.iter().zip(&points) {
            prop_assert_eq!(entry.id, *id);
            match &entry.nearest {
                Some(neighbor) => prop_assert_ne!(neighbor.id, entry.id),
                None => prop_assert_eq!(points.len(), 1),
            }
        }
    }

    #[test]
    fn recorded_distance_is_the_minimum(
        coords in prop::collection::vec(coordinate(), 2..16)
    ) {
        let metric = Haversine::default();
        let points: Vec<(usize, Coordinate)> = coords.into_iter().enumerate().collect();
        let result = NearestNeighborFinder::new().find_nearest(&points).unwrap();

        for entry in &result {
            let recorded = entry.nearest.as_ref().unwrap().distance_meters;
            let (_, own) = points[entry.id];
            let minimum = points
                .iter()
                .filter(|(other, _)| *other != entry.id)
                .map(|(_, c)| metric.distance(&own, c).unwrap().round() as u64)
                .min()
                .unwrap();
            prop_assert_eq!(recorded, minimum);
        }
    }
}
