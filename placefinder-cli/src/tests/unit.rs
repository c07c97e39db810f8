//! Focused unit tests covering search configuration resolution.

use super::*;
use crate::search::{SearchArgs, SearchConfig, config_from_layers_for_test};
use geo::Coord;
use placefinder_core::TravelMode;
use rstest::rstest;
use std::time::Duration;

fn args(query: Option<&str>) -> SearchArgs {
    SearchArgs {
        query: query.map(str::to_owned),
        ..SearchArgs::default()
    }
}

#[rstest]
#[case::absent(None)]
#[case::blank(Some("   "))]
fn converting_without_query_errors(#[case] query: Option<&str>) {
    let err = SearchConfig::try_from(args(query)).expect_err("missing query should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_QUERY);
            assert_eq!(env, ENV_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn defaults_apply_when_only_query_given() {
    let config = SearchConfig::try_from(args(Some("bakery"))).expect("config should build");

    assert_eq!(config.query, "bakery");
    assert_eq!(config.position, None);
    assert_eq!(config.nominatim.base_url, "https://nominatim.openstreetmap.org");
    assert_eq!(config.nominatim.limit, 10);
    assert_eq!(config.nominatim.timeout, Duration::from_secs(15));
    assert_eq!(config.select, None);
    assert!(!config.directions);
    assert_eq!(config.mode, TravelMode::Driving);
}

#[rstest]
fn explicit_options_override_defaults() {
    let config = SearchConfig::try_from(SearchArgs {
        latitude: Some(-33.86),
        longitude: Some(151.21),
        nominatim_url: Some("http://localhost:8080".to_owned()),
        limit: Some(3),
        timeout_secs: Some(2),
        select: Some(1),
        directions: Some(true),
        walking: Some(true),
        ..args(Some("opera house"))
    })
    .expect("config should build");

    assert_eq!(config.position, Some(Coord { x: 151.21, y: -33.86 }));
    assert_eq!(config.nominatim.base_url, "http://localhost:8080");
    assert_eq!(config.nominatim.limit, 3);
    assert_eq!(config.nominatim.timeout, Duration::from_secs(2));
    assert_eq!(config.select, Some(1));
    assert!(config.directions);
    assert_eq!(config.mode, TravelMode::Walking);
}

#[rstest]
#[case::latitude_only(Some(10.0), None, ARG_LATITUDE, ARG_LONGITUDE)]
#[case::longitude_only(None, Some(10.0), ARG_LONGITUDE, ARG_LATITUDE)]
fn half_a_position_is_rejected(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] expected_given: &'static str,
    #[case] expected_missing: &'static str,
) {
    let err = SearchConfig::try_from(SearchArgs {
        latitude,
        longitude,
        ..args(Some("museum"))
    })
    .expect_err("incomplete position should error");
    match err {
        CliError::IncompleteCentre { given, missing } => {
            assert_eq!(given, expected_given);
            assert_eq!(missing, expected_missing);
        }
        other => panic!("expected IncompleteCentre, found {other:?}"),
    }
}

#[rstest]
#[case::latitude(91.0, 0.0, ARG_LATITUDE)]
#[case::longitude(0.0, -180.5, ARG_LONGITUDE)]
fn out_of_range_position_is_rejected(
    #[case] latitude: f64,
    #[case] longitude: f64,
    #[case] expected_field: &'static str,
) {
    let err = SearchConfig::try_from(SearchArgs {
        latitude: Some(latitude),
        longitude: Some(longitude),
        ..args(Some("museum"))
    })
    .expect_err("out-of-range position should error");
    match err {
        CliError::InvalidCoordinate { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected InvalidCoordinate, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "nominatim_url": "http://from-file:8080",
            "limit": 5,
            "latitude": 1.0,
            "longitude": 2.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "query": "from env",
        "limit": 7,
    }));
    composer.push_cli(json!({
        "query": "from cli",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.query, "from cli");
    assert_eq!(config.nominatim.limit, 7);
    assert_eq!(config.nominatim.base_url, "http://from-file:8080");
    assert_eq!(config.position, Some(Coord { x: 2.0, y: 1.0 }));
}
