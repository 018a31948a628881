use geo_core::{Coordinate, NearestNeighborFinder};

const CRACOW: u64 = 1;
const BEIJING: u64 = 2;
const MADRID: u64 = 3;
const BERLIN: u64 = 4;

fn capitals() -> Vec<(u64, Coordinate)> {
    vec![
        (CRACOW, Coordinate::parse("50.049683", "19.944544").unwrap()),
        (BEIJING, Coordinate::parse("39.916668", "116.383331").unwrap()),
        (MADRID, Coordinate::parse("40.416775", "-3.703790").unwrap()),
        (BERLIN, Coordinate::parse("52.520008", "13.404954").unwrap()),
    ]
}

fn nearest(result: &geo_core::NeighborResult<u64>, id: u64) -> (u64, u64) {
    let neighbor = result.get(&id).unwrap().nearest.as_ref().unwrap();
    (neighbor.id, neighbor.distance_meters)
}

#[test]
fn test_city_nearest_neighbors() {
    let result = NearestNeighborFinder::new().find_nearest(&capitals()).unwrap();

    assert_eq!(result.len(), 4);
    assert_eq!(nearest(&result, CRACOW), (BERLIN, 531_022));
    assert_eq!(nearest(&result, BEIJING), (CRACOW, 7_128_470));
    assert_eq!(nearest(&result, MADRID), (BERLIN, 1_869_146));
    assert_eq!(nearest(&result, BERLIN), (CRACOW, 531_022));
}

#[test]
fn test_nearest_is_not_symmetric() {
    let result = NearestNeighborFinder::new().find_nearest(&capitals()).unwrap();

    // Madrid's nearest is Berlin, but Berlin's nearest is Cracow
    assert_eq!(nearest(&result, MADRID).0, BERLIN);
    assert_ne!(nearest(&result, BERLIN).0, MADRID);
    // Beijing points at Cracow without Cracow pointing back
    assert_eq!(nearest(&result, BEIJING).0, CRACOW);
    assert_ne!(nearest(&result, CRACOW).0, BEIJING);
}

#[test]
fn test_input_is_left_untouched() {
    let points = capitals();
    let before = points.clone();
    let _ = NearestNeighborFinder::new().find_nearest(&points).unwrap();
    assert_eq!(points, before);
}
