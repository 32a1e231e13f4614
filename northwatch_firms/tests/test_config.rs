#![allow(unused)]

use std::time::Duration;

use northwatch_firms::{load_config, FeedSchema, FirmsConfig, HotspotConfidence};

#[test]
fn test_load_shipped_config () {
    let config: FirmsConfig = load_config("firms.ron").unwrap();
    println!("config: {:?}", config);

    assert_eq!( config.sources.len(), 2);
    assert_eq!( config.sources[0].source, "MODIS_C6_1");
    assert_eq!( config.sources[0].schema, FeedSchema::Modis);
    assert_eq!( config.sources[1].schema, FeedSchema::Viirs);

    assert_eq!( config.bounds.west().degrees(), -140.0);
    assert_eq!( config.bounds.south().degrees(), 40.0);
    assert_eq!( config.bounds.east().degrees(), -50.0);
    assert_eq!( config.bounds.north().degrees(), 90.0);

    assert_eq!( config.ttl, Duration::from_secs( 900));
    assert_eq!( config.default_bands, vec![
        HotspotConfidence::Low, HotspotConfidence::Nominal, HotspotConfidence::High
    ]);
    assert_eq!( config.min_brightness, 0.0);
}

#[test]
fn test_config_ron_round_trip () {
    let config: FirmsConfig = load_config("firms.ron").unwrap();

    let ron_str = ron::ser::to_string( &config).unwrap();
    let reparsed: FirmsConfig = ron::de::from_str( &ron_str).unwrap();

    assert_eq!( reparsed.sources.len(), config.sources.len());
    assert_eq!( reparsed.ttl, config.ttl);
    assert_eq!( reparsed.bounds, config.bounds);
}
