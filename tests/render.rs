use geo::{polygon, MultiPolygon};

use civicscope::{data, io, render, Boundary, BoundarySet, Config, ScoreError};

fn borough_squares() -> BoundarySet {
    let boundaries = data::BOROUGHS.iter().enumerate()
        .map(|(i, name)| {
            let x = -74.2 + i as f64 * 0.1;
            let shape = MultiPolygon(vec![polygon![
                (x: x, y: 40.6),
                (x: x + 0.08, y: 40.6),
                (x: x + 0.08, y: 40.7),
                (x: x, y: 40.7),
            ]]);
            Boundary::new(*name, shape)
        })
        .collect();
    BoundarySet::new(boundaries).unwrap()
}

#[test]
fn writes_every_output_into_the_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output_dir = tmp.path().join("output");

    let boundaries = borough_squares();
    let scores = civicscope::run(&config, &boundaries, &data::nyc_attributes()).unwrap();

    io::fs::ensure_dir_exists(&config.output_dir).unwrap();
    render::write_web_map(&config.web_map_path(), &boundaries, &scores, &config.name_property, &config.web_map).unwrap();
    render::write_static_map(&config.static_map_path(), &boundaries, &scores, &config.static_map).unwrap();
    render::write_animated_map(&config.animation_path(), &boundaries, &data::nyc_turnout(), &config.animation).unwrap();
    io::csv::write_scores(&scores, &config.scores_path()).unwrap();

    assert!(config.web_map_path().ends_with("nyc-vote-heatmap.html"));
    let html = std::fs::read_to_string(config.web_map_path()).unwrap();
    assert!(html.contains("L.map"));
    assert!(html.contains("Staten Island"));

    let svg = std::fs::read_to_string(config.static_map_path()).unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
    assert_eq!(svg.matches("class=\"region\"").count(), 5);

    let animated = std::fs::read_to_string(config.animation_path()).unwrap();
    assert!(animated.contains("<animate"));
    assert!(animated.contains("2024"));

    let csv = std::fs::read_to_string(config.scores_path()).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("borough,raw_weight,normalized_weight"));
    assert_eq!(lines.count(), 5);
}

#[test]
fn existing_outputs_are_kept_without_force() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("nyc-vote-heatmap.html");
    std::fs::write(&target, "keep me").unwrap();

    assert!(io::fs::check_output_path(&target, false).is_err());
    assert!(io::fs::check_output_path(&target, true).is_ok());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep me");
}

#[test]
fn animation_needs_turnout_for_every_region() {
    let mut boundaries = data::BOROUGHS.iter()
        .map(|name| Boundary::new(*name, MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0),
        ]])))
        .collect::<Vec<_>>();
    boundaries.push(Boundary::new("Hoboken", MultiPolygon(vec![polygon![
        (x: 2.0, y: 0.0), (x: 3.0, y: 0.0), (x: 3.0, y: 1.0),
    ]])));
    let boundaries = BoundarySet::new(boundaries).unwrap();

    let err = render::animated_map_to_string(&boundaries, &data::nyc_turnout(), &Config::default().animation).unwrap_err();
    assert!(matches!(err.downcast_ref::<ScoreError>(), Some(ScoreError::JoinMismatch { .. })));
}
