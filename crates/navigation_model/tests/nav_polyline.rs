use navigation_model::{
    error::NavPolylineError,
    nav_coord::NavCoord,
    nav_polyline::NavPolyline,
    polyline::{self, decode_with_precision, encode_with_precision},
};
use serde_json::json;

fn leg_record() -> serde_json::Value {
    json!({
        "distance": { "text": "0.3 mi", "value": 512 },
        "polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
        "travel_mode": "WALKING"
    })
}

#[test]
fn test_nested_record() {
    let record = leg_record();
    let polyline = NavPolyline::from(&record["polyline"]);

    assert_eq!(polyline.points(), Some("_p~iF~ps|U_ulLnnqC_mqNvxq`@"));
    assert_eq!(
        polyline.coordinates(),
        Some(vec![
            NavCoord::new(38.5, -120.2),
            NavCoord::new(40.7, -120.95),
            NavCoord::new(43.252, -126.453),
        ])
    );

    // The parent record has no points of its own
    assert_eq!(
        NavPolyline::from(&record).try_coordinates(),
        Err(NavPolylineError::MissingPoints)
    );
}

#[test]
fn test_accessors_are_stable() {
    let polyline = NavPolyline::from_json(&leg_record()["polyline"]);

    assert_eq!(polyline.points(), polyline.points());
    assert_eq!(polyline.coordinates(), polyline.coordinates());
    assert_eq!(polyline.display_coordinates(), polyline.display_coordinates());
}

#[test]
fn test_encode_then_decode_campus_walk() {
    let coordinates = vec![
        NavCoord::new(40.10206, -88.22721),
        NavCoord::new(40.10206, -88.22698),
        NavCoord::new(40.10311, -88.22698),
        NavCoord::new(40.10311, -88.22512),
        NavCoord::new(40.10125, -88.22512),
    ];

    let polyline = NavPolyline::from_coordinates(&coordinates).unwrap();

    assert_eq!(polyline.coordinates(), Some(coordinates.clone()));
    assert_eq!(
        polyline.display_coordinates().unwrap(),
        coordinates
            .iter()
            .map(geo_types::Point::from)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_precision_must_match() {
    let coordinates = vec![NavCoord::new(40.102061, -88.227215)];
    let encoded = encode_with_precision(&coordinates, 6).unwrap();

    assert_eq!(decode_with_precision(&encoded, 6).unwrap(), coordinates);

    let polyline = NavPolyline::new(encoded);
    assert_eq!(polyline.coordinates_with_precision(6), Some(coordinates));
    // Read at the default precision the latitude lands at 401 degrees
    assert_eq!(polyline.coordinates(), None);
}

#[test]
fn test_single_point() {
    let encoded = polyline::encode(&[NavCoord::new(0.0, 0.0)]).unwrap();

    assert_eq!(encoded, "??");
    assert_eq!(
        NavPolyline::new(encoded).coordinates(),
        Some(vec![NavCoord::new(0.0, 0.0)])
    );
}
