#![allow(unused)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use northwatch_common::geo::GeoRect;
use northwatch_firms::Hotspot;
use northwatch_firms::cache::SnapshotCache;
use northwatch_firms::errors::Result;
use northwatch_firms::importer::{FirmsPipeline, HotspotImporter};

struct CountingImporter {
    source: Arc<String>,
    fetches: Arc<AtomicUsize>
}

#[async_trait]
impl HotspotImporter for CountingImporter {
    fn source (&self) -> Arc<String> { self.source.clone() }

    async fn fetch_hotspots (&self, _client: &Client, _bounds: &GeoRect) -> Result<Vec<Hotspot>> {
        self.fetches.fetch_add( 1, Ordering::SeqCst);
        Ok( Vec::new())
    }
}

fn counting_pipeline (fetches: &Arc<AtomicUsize>) -> FirmsPipeline {
    let importer = CountingImporter {
        source: Arc::new( "A".to_string()),
        fetches: fetches.clone()
    };
    FirmsPipeline::from_importers(
        vec![ Box::new( importer) ],
        GeoRect::from_wsen_degrees( -140.0, 40.0, -50.0, 90.0)
    )
}

#[tokio::test]
async fn test_cache_memoizes_within_ttl () {
    let fetches = Arc::new( AtomicUsize::new( 0));
    let pipeline = counting_pipeline( &fetches);
    let cache = SnapshotCache::new( Duration::from_secs( 900));

    let s1 = cache.get_or_refresh( &pipeline).await;
    let s2 = cache.get_or_refresh( &pipeline).await;

    // one underlying fetch per source, second call is served from cache
    assert_eq!( fetches.load( Ordering::SeqCst), 1);
    assert!( Arc::ptr_eq( &s1, &s2));
}

#[tokio::test]
async fn test_cache_refreshes_after_expiry () {
    let fetches = Arc::new( AtomicUsize::new( 0));
    let pipeline = counting_pipeline( &fetches);
    let cache = SnapshotCache::new( Duration::from_millis( 50));

    cache.get_or_refresh( &pipeline).await;
    tokio::time::sleep( Duration::from_millis( 80)).await;
    cache.get_or_refresh( &pipeline).await;

    assert_eq!( fetches.load( Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalidate_forces_rebuild () {
    let fetches = Arc::new( AtomicUsize::new( 0));
    let pipeline = counting_pipeline( &fetches);
    let cache = SnapshotCache::new( Duration::from_secs( 900));

    cache.get_or_refresh( &pipeline).await;
    cache.invalidate().await;
    cache.get_or_refresh( &pipeline).await;

    assert_eq!( fetches.load( Ordering::SeqCst), 2);
}
