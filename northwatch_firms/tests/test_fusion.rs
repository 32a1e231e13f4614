#![allow(unused)]

use std::{fs::File, sync::Arc};

use async_trait::async_trait;
use reqwest::Client;
use uom::si::f64::ThermodynamicTemperature;
use uom::si::thermodynamic_temperature::kelvin;

use northwatch_common::angle::{Latitude, Longitude};
use northwatch_common::geo::GeoRect;
use northwatch_firms::{FeedNotice, Hotspot, HotspotConfidence, HotspotSnapshot};
use northwatch_firms::errors::{NorthwatchFirmsError, Result};
use northwatch_firms::importer::{FirmsPipeline, HotspotImporter, ModisHotspotImporter};

fn default_bounds () -> GeoRect {
    GeoRect::from_wsen_degrees( -140.0, 40.0, -50.0, 90.0)
}

fn make_hotspot (source: &Arc<String>, idx: usize, conf: HotspotConfidence, bright: f64) -> Hotspot {
    Hotspot {
        lat: Latitude::from_degrees( 50.0),
        lon: Longitude::from_degrees( -100.0),
        bright: ThermodynamicTemperature::new::<kelvin>( bright),
        frp: None,
        conf_raw: conf.to_string(),
        conf,
        acq_date: "2025-08-05".to_string(),
        acq_time: format!("{:04}", idx), // encodes original row order
        source: source.clone()
    }
}

struct StubImporter {
    source: Arc<String>,
    hotspots: Vec<Hotspot>,
    fail: bool
}

impl StubImporter {
    fn ok (source: &str, hotspots: Vec<Hotspot>) -> Self {
        StubImporter { source: Arc::new( source.to_string()), hotspots, fail: false }
    }
    fn failing (source: &str) -> Self {
        StubImporter { source: Arc::new( source.to_string()), hotspots: Vec::new(), fail: true }
    }
}

#[async_trait]
impl HotspotImporter for StubImporter {
    fn source (&self) -> Arc<String> { self.source.clone() }

    async fn fetch_hotspots (&self, _client: &Client, _bounds: &GeoRect) -> Result<Vec<Hotspot>> {
        if self.fail {
            Err( NorthwatchFirmsError::SchemaError( "no brightness column".to_string()))
        } else {
            Ok( self.hotspots.clone())
        }
    }
}

fn source_a_hotspots (source: &Arc<String>) -> Vec<Hotspot> {
    vec![
        make_hotspot( source, 0, HotspotConfidence::High, 345.0),
        make_hotspot( source, 1, HotspotConfidence::Nominal, 320.0),
        make_hotspot( source, 2, HotspotConfidence::Low, 305.0),
    ]
}

fn source_b_hotspots (source: &Arc<String>) -> Vec<Hotspot> {
    vec![
        make_hotspot( source, 0, HotspotConfidence::Unknown, 315.0),
        make_hotspot( source, 1, HotspotConfidence::High, 360.0),
    ]
}

#[tokio::test]
async fn test_fusion_preserves_source_and_row_order () {
    let src_a = Arc::new( "A".to_string());
    let src_b = Arc::new( "B".to_string());

    let pipeline = FirmsPipeline::from_importers( vec![
        Box::new( StubImporter::ok( "A", source_a_hotspots( &src_a))),
        Box::new( StubImporter::ok( "B", source_b_hotspots( &src_b))),
    ], default_bounds());

    let snapshot = pipeline.execute().await;

    // order is A0,A1,A2,B0,B1
    let order: Vec<(String,String)> = snapshot.hotspots.iter()
        .map( |h| ((*h.source).clone(), h.acq_time.clone()))
        .collect();
    assert_eq!( order, vec![
        ("A".to_string(),"0000".to_string()),
        ("A".to_string(),"0001".to_string()),
        ("A".to_string(),"0002".to_string()),
        ("B".to_string(),"0000".to_string()),
        ("B".to_string(),"0001".to_string()),
    ]);

    assert_eq!( snapshot.counts.len(), 2);
    assert_eq!( snapshot.counts[0].count, 3);
    assert_eq!( snapshot.counts[1].count, 2);
    assert_eq!( snapshot.total, 5);
    assert!( snapshot.notices.is_empty());
}

#[tokio::test]
async fn test_failed_source_degrades_to_notice () {
    let src_a = Arc::new( "A".to_string());

    let pipeline = FirmsPipeline::from_importers( vec![
        Box::new( StubImporter::ok( "A", source_a_hotspots( &src_a))),
        Box::new( StubImporter::failing( "B")),
    ], default_bounds());

    let snapshot = pipeline.execute().await;

    // snapshot contains exactly the A records
    assert_eq!( snapshot.total, 3);
    assert!( snapshot.hotspots.iter().all( |h| *h.source == "A"));

    // B is still reported, with a zero count and an observable notice
    assert_eq!( snapshot.counts[1].count, 0);
    assert_eq!( snapshot.notices.len(), 1);
    assert_eq!( *snapshot.notices[0].source, "B");
    println!("notice: {}", snapshot.notices[0].message);
}

#[tokio::test]
async fn test_all_sources_failed_yields_empty_snapshot () {
    let pipeline = FirmsPipeline::from_importers( vec![
        Box::new( StubImporter::failing( "A")),
        Box::new( StubImporter::failing( "B")),
    ], default_bounds());

    let snapshot = pipeline.execute().await;

    assert!( snapshot.is_empty());
    assert_eq!( snapshot.total, 0);
    assert_eq!( snapshot.notices.len(), 2);
}

#[test]
fn test_identical_input_fuses_identically () {
    let source = Arc::new( "MODIS_C6_1".to_string());
    let bounds = default_bounds();

    let fuse_from_fixture = || {
        let file = File::open("tests/MODIS_C6_1_Global_24h_sample.csv").unwrap();
        let hotspots = ModisHotspotImporter::import_hotspots( file, &source, &bounds).unwrap();
        HotspotSnapshot::fuse( vec![ (source.clone(), Ok(hotspots)) ])
    };

    let json_1 = fuse_from_fixture().to_json().unwrap();
    let json_2 = fuse_from_fixture().to_json().unwrap();

    assert_eq!( json_1, json_2);
}

#[tokio::test]
async fn test_filter_view () {
    let src_a = Arc::new( "A".to_string());
    let src_b = Arc::new( "B".to_string());

    let pipeline = FirmsPipeline::from_importers( vec![
        Box::new( StubImporter::ok( "A", source_a_hotspots( &src_a))),
        Box::new( StubImporter::ok( "B", source_b_hotspots( &src_b))),
    ], default_bounds());
    let snapshot = pipeline.execute().await;

    let no_threshold = ThermodynamicTemperature::new::<kelvin>( 0.0);

    // band selection, Unknown is excludable
    let view = snapshot.filter_view( &[HotspotConfidence::High, HotspotConfidence::Nominal], no_threshold);
    assert_eq!( view.len(), 3);
    assert!( view.iter().all( |h| h.conf != HotspotConfidence::Unknown && h.conf != HotspotConfidence::Low));

    // brightness threshold
    let view = snapshot.filter_view(
        &[HotspotConfidence::Low, HotspotConfidence::Nominal, HotspotConfidence::High, HotspotConfidence::Unknown],
        ThermodynamicTemperature::new::<kelvin>( 330.0)
    );
    assert_eq!( view.len(), 2); // 345.0 and 360.0

    // the snapshot itself is untouched
    assert_eq!( snapshot.total, 5);
}
