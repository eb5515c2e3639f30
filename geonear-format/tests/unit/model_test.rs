use super::*;

fn create_test_points() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new("Paris", "France", 48.8566, 2.3522),
        GeoPoint::new("Lyon", "France", 45.7640, 4.8357),
        GeoPoint::new("Montreal", "Canada", 45.5017, -73.5673),
    ]
}

fn serialize_to_string(points: &[GeoPoint]) -> String {
    let mut buffer = vec![];
    let mut writer = BufWriter::new(&mut buffer);
    serialize_points(points, &mut writer).unwrap();
    drop(writer);

    String::from_utf8(buffer).unwrap()
}

#[test]
fn can_serialize_points_with_named_keys() {
    let json = serialize_to_string(&create_test_points());

    ["\"Name\"", "\"Region\"", "\"Latitude\"", "\"Longitude\""]
        .iter()
        .for_each(|key| assert!(json.contains(key), "missing {key} in '{json}'"));
}

#[test]
fn can_round_trip_point_list() {
    let points = create_test_points();

    let json = serialize_to_string(&points);
    let restored = deserialize_points(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(restored, points);
}

#[test]
fn can_deserialize_points_preserving_order() {
    let json = r#"[
        { "Name": "Paris", "Region": "France", "Latitude": 48.8566, "Longitude": 2.3522 },
        { "Name": "Lyon", "Region": "France", "Latitude": 45.7640, "Longitude": 4.8357 }
    ]"#;

    let points = deserialize_points(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(
        points.iter().map(|point| point.name.as_str()).collect::<Vec<_>>(),
        vec!["Paris", "Lyon"]
    );
}

#[test]
fn can_propagate_json_error() {
    let json = r#"[ { "Name": "Paris" "#;

    let result = deserialize_points(BufReader::new(json.as_bytes())).err().expect("no error returned");

    assert_eq!(result.code, "E0003");
    assert_eq!(result.cause, "cannot deserialize points");
}
