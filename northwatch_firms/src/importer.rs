/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! feed adapters that turn the per-satellite FIRMS CSV products into uniform
//! [`Hotspot`] records, and the pipeline that runs all configured adapters and
//! fuses their output into a [`HotspotSnapshot`]

use std::{io, path::{Path,PathBuf}, sync::Arc};

use async_trait::async_trait;
use chrono::{Datelike, Timelike, Utc};
use csv;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use uom::si::{f64::{Power,ThermodynamicTemperature}, power::megawatt, thermodynamic_temperature::kelvin};

use northwatch_common::geo::{GeoPoint, GeoRect};
use northwatch_common::net::retrieve_data;

use crate::errors::{schema_error, NorthwatchFirmsError, Result};
use crate::{FeedSchema, FirmsConfig, FirmsSourceConfig, Hotspot, HotspotConfidence, HotspotSnapshot};

/// column names that can carry the brightness temperature, across product generations
const BRIGHTNESS_COLUMNS: [&'static str; 2] = ["brightness", "bright_ti4"];

/* #region raw records *********************************************************************************************/

/// raw record format of the MODIS C6.1 active fire product as retrieved from the FIRMS server,
/// field descriptions on https://www.earthdata.nasa.gov/data/tools/firms
/// Confidence stays a string since MODIS and VIIRS encode it differently,
/// classification happens after deserialization
#[derive(Debug,Deserialize)]
struct RawModisHotspot {
    latitude: f64,
    longitude: f64,
    #[serde(alias="bright_ti4")]
    brightness: f64, // channel 21/22 brightness temperature in K
    acq_date: String,
    acq_time: String,
    confidence: String, // 0-100 percentage for MODIS
    frp: Option<f64>, // MW
}

/// raw record format of the VIIRS 375m active fire product. VIIRS reports the I-4 band
/// brightness temperature under `bright_ti4` and categorical confidence words
#[derive(Debug,Deserialize)]
struct RawViirsHotspot {
    latitude: f64,
    longitude: f64,
    #[serde(alias="brightness")]
    bright_ti4: f64, // I-4 band brightness temperature in K
    acq_date: String,
    acq_time: String,
    confidence: String,
    frp: Option<f64>, // MW
}

/* #endregion raw records */

/* #region importer trait ******************************************************************************************/

/// a feed adapter that knows how to fetch and normalize one configured FIRMS source
#[async_trait]
pub trait HotspotImporter: Send + Sync {
    fn source (&self) -> Arc<String>;

    /// fetch the feed and return its normalized, geographically filtered records
    /// in original row order
    async fn fetch_hotspots (&self, client: &Client, bounds: &GeoRect) -> Result<Vec<Hotspot>>;
}

/// verify there is a brightness-bearing column before deserializing any rows.
/// Serde aliases would silently produce row errors for every record, the explicit
/// header check turns a structurally unusable feed into one SchemaError
fn check_brightness_column (headers: &csv::StringRecord, source: &str) -> Result<()> {
    if headers.iter().any( |h| BRIGHTNESS_COLUMNS.contains( &h.trim())) {
        Ok(())
    } else {
        Err( schema_error!("no brightness column in {} (expected one of {:?})", source, BRIGHTNESS_COLUMNS))
    }
}

fn filtered_hotspot (lat: f64, lon: f64, bounds: &GeoRect) -> Option<GeoPoint> {
    let p = GeoPoint::from_lon_lat_degrees( lon, lat);
    if bounds.contains( &p) { Some(p) } else { None }
}

/* #endregion importer trait */

/* #region MODIS importer ******************************************************************************************/

pub struct ModisHotspotImporter {
    source: Arc<String>,
    url: String,
    cache_dir: Option<PathBuf>
}

impl ModisHotspotImporter {
    pub fn new (source: &str, url: &str) -> Self {
        ModisHotspotImporter { source: Arc::new( source.to_string()), url: url.to_string(), cache_dir: None }
    }

    pub fn with_cache_dir (mut self, dir: impl AsRef<Path>) -> Self {
        self.cache_dir = Some( dir.as_ref().to_path_buf());
        self
    }

    /// parse the CSV data provided by the reader, convert the RawModisHotspots from it
    /// into (uom-aware) Hotspots and drop everything outside `bounds`. Rows that fail to
    /// deserialize are logged and skipped
    pub fn import_hotspots (reader: impl io::Read, source: &Arc<String>, bounds: &GeoRect) -> Result<Vec<Hotspot>> {
        let mut hotspots: Vec<Hotspot> = Vec::new();
        let mut csv_reader = csv::Reader::from_reader( reader);

        check_brightness_column( csv_reader.headers()?, source)?;

        for res in csv_reader.deserialize::<RawModisHotspot>() {
            match res {
                Ok(raw_hs) => {
                    if let Some(p) = filtered_hotspot( raw_hs.latitude, raw_hs.longitude, bounds) {
                        let conf = HotspotConfidence::classify( &raw_hs.confidence);
                        hotspots.push( Hotspot {
                            lat: p.latitude(),
                            lon: p.longitude(),
                            bright: ThermodynamicTemperature::new::<kelvin>( raw_hs.brightness),
                            frp: raw_hs.frp.map( |v| Power::new::<megawatt>(v)),
                            conf_raw: raw_hs.confidence,
                            conf,
                            acq_date: raw_hs.acq_date,
                            acq_time: raw_hs.acq_time,
                            source: source.clone()
                        });
                    }
                }
                Err(e) => {
                    warn!("skipping malformed {} record: {}", source, e);
                }
            }
        }

        Ok(hotspots)
    }
}

#[async_trait]
impl HotspotImporter for ModisHotspotImporter {
    fn source (&self) -> Arc<String> { self.source.clone() }

    async fn fetch_hotspots (&self, client: &Client, bounds: &GeoRect) -> Result<Vec<Hotspot>> {
        let save_to = raw_file_path( &self.cache_dir, &self.source);
        let data = retrieve_data( client, &self.url, save_to.as_deref()).await?;
        Self::import_hotspots( data.as_bytes(), &self.source, bounds)
    }
}

/* #endregion MODIS importer */

/* #region VIIRS importer ******************************************************************************************/

pub struct ViirsHotspotImporter {
    source: Arc<String>,
    url: String,
    cache_dir: Option<PathBuf>
}

impl ViirsHotspotImporter {
    pub fn new (source: &str, url: &str) -> Self {
        ViirsHotspotImporter { source: Arc::new( source.to_string()), url: url.to_string(), cache_dir: None }
    }

    pub fn with_cache_dir (mut self, dir: impl AsRef<Path>) -> Self {
        self.cache_dir = Some( dir.as_ref().to_path_buf());
        self
    }

    pub fn import_hotspots (reader: impl io::Read, source: &Arc<String>, bounds: &GeoRect) -> Result<Vec<Hotspot>> {
        let mut hotspots: Vec<Hotspot> = Vec::new();
        let mut csv_reader = csv::Reader::from_reader( reader);

        check_brightness_column( csv_reader.headers()?, source)?;

        for res in csv_reader.deserialize::<RawViirsHotspot>() {
            match res {
                Ok(raw_hs) => {
                    if let Some(p) = filtered_hotspot( raw_hs.latitude, raw_hs.longitude, bounds) {
                        let conf = HotspotConfidence::classify( &raw_hs.confidence);
                        hotspots.push( Hotspot {
                            lat: p.latitude(),
                            lon: p.longitude(),
                            bright: ThermodynamicTemperature::new::<kelvin>( raw_hs.bright_ti4),
                            frp: raw_hs.frp.map( |v| Power::new::<megawatt>(v)),
                            conf_raw: raw_hs.confidence,
                            conf,
                            acq_date: raw_hs.acq_date,
                            acq_time: raw_hs.acq_time,
                            source: source.clone()
                        });
                    }
                }
                Err(e) => {
                    warn!("skipping malformed {} record: {}", source, e);
                }
            }
        }

        Ok(hotspots)
    }
}

#[async_trait]
impl HotspotImporter for ViirsHotspotImporter {
    fn source (&self) -> Arc<String> { self.source.clone() }

    async fn fetch_hotspots (&self, client: &Client, bounds: &GeoRect) -> Result<Vec<Hotspot>> {
        let save_to = raw_file_path( &self.cache_dir, &self.source);
        let data = retrieve_data( client, &self.url, save_to.as_deref()).await?;
        Self::import_hotspots( data.as_bytes(), &self.source, bounds)
    }
}

/* #endregion VIIRS importer */

/// where to save the raw CSV of a retrieval, if a cache dir is set
fn raw_file_path (cache_dir: &Option<PathBuf>, source: &str) -> Option<PathBuf> {
    cache_dir.as_ref().map( |dir| {
        let now = Utc::now();
        let fname = format!("{}_{:4}-{:02}-{:02}_{:02}{:02}.csv",
                            source, now.year(), now.month(), now.day(), now.hour(), now.minute());
        dir.join( Path::new(&fname))
    })
}

pub fn make_importer (config: &FirmsSourceConfig, cache_dir: Option<&Path>) -> Box<dyn HotspotImporter> {
    match config.schema {
        FeedSchema::Modis => {
            let imp = ModisHotspotImporter::new( &config.source, &config.url);
            match cache_dir {
                Some(dir) => Box::new( imp.with_cache_dir( dir)),
                None => Box::new( imp)
            }
        }
        FeedSchema::Viirs => {
            let imp = ViirsHotspotImporter::new( &config.source, &config.url);
            match cache_dir {
                Some(dir) => Box::new( imp.with_cache_dir( dir)),
                None => Box::new( imp)
            }
        }
    }
}

/* #region pipeline ************************************************************************************************/

/// one fetch/normalize/filter/fuse run over all configured sources. Sources are
/// processed sequentially in configured order so that record order and count reports
/// are deterministic
pub struct FirmsPipeline {
    importers: Vec<Box<dyn HotspotImporter>>,
    bounds: GeoRect
}

impl FirmsPipeline {
    pub fn from_config (config: &FirmsConfig, cache_dir: Option<&Path>) -> Self {
        let importers = config.sources.iter().map( |src| make_importer( src, cache_dir)).collect();
        FirmsPipeline { importers, bounds: config.bounds }
    }

    pub fn from_importers (importers: Vec<Box<dyn HotspotImporter>>, bounds: GeoRect) -> Self {
        FirmsPipeline { importers, bounds }
    }

    /// run all importers and fuse their contributions. This never fails, importer
    /// errors degrade into notices on the returned snapshot
    pub async fn execute (&self) -> HotspotSnapshot {
        let client = Client::new(); // no need to keep it around, runs are minutes apart
        let mut contributions: Vec<(Arc<String>, Result<Vec<Hotspot>>)> = Vec::with_capacity( self.importers.len());

        for importer in &self.importers {
            let source = importer.source();
            let res = importer.fetch_hotspots( &client, &self.bounds).await;
            match &res {
                Ok(hs) => debug!("{}: {} hotspots", source, hs.len()),
                Err(e) => warn!("{}: import failed: {}", source, e)
            }
            contributions.push( (source, res));
        }

        HotspotSnapshot::fuse( contributions)
    }
}

/* #endregion pipeline */
