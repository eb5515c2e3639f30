use super::*;

#[test]
fn can_read_points() {
    let source = r"city,country,latitude,longitude
Paris,France,48.8566,2.3522
Lyon,France,45.7640,4.8357
Montreal,Canada,45.5017,-73.5673
";

    let points = read_csv_points(BufReader::new(source.as_bytes())).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0], GeoPoint::new("Paris", "France", 48.8566, 2.3522));
    assert_eq!(points[2].longitude, -73.5673);
}

#[test]
fn can_strip_whitespace_in_longitude() {
    let source = r"city,country,latitude,longitude
Montreal,Canada,45.5017,-73. 5673
";

    let points = read_csv_points(BufReader::new(source.as_bytes())).unwrap();

    assert_eq!(points[0].longitude, -73.5673);
}

#[test]
fn can_skip_blank_records() {
    let source = "city,country,latitude,longitude\nParis,France,48.8566,2.3522\n\nLyon,France,45.7640,4.8357\n";

    let points = read_csv_points(BufReader::new(source.as_bytes())).unwrap();

    assert_eq!(points.len(), 2);
}

#[test]
fn can_fail_on_bad_coordinate() {
    let source = r"city,country,latitude,longitude
Paris,France,48.8566,2.3522
Lyon,France,not_a_number,4.8357
";

    let result = read_csv_points(BufReader::new(source.as_bytes())).err().expect("no error returned");

    assert_eq!(result.code, "E0002");
    assert_eq!(result.cause, "cannot read point record");
    assert!(result.details.is_some());
}

#[test]
fn can_fail_on_missing_fields() {
    let source = r"city,country,latitude,longitude
Paris,France,48.8566
";

    let result = read_csv_points(BufReader::new(source.as_bytes())).err().expect("no error returned");

    assert_eq!(result.code, "E0002");
}

#[test]
fn can_round_trip_csv_points() {
    let points = vec![
        GeoPoint::new("Paris", "France", 48.8566, 2.3522),
        GeoPoint::new("Montreal", "Canada", 45.5017, -73.5673),
    ];
    let mut buffer = vec![];

    write_csv_points(&points, &mut buffer).unwrap();
    let restored = read_csv_points(BufReader::new(buffer.as_slice())).unwrap();

    assert_eq!(restored, points);
}
