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

//! ingestion and normalization core for NASA FIRMS active fire data
//! (see https://firms.modaps.eosdis.nasa.gov/active_fire/ for available products).
//! Heterogeneous per-satellite CSV feeds are fetched, normalized into uniform
//! [`Hotspot`] records, geographically filtered and fused into a single
//! [`HotspotSnapshot`] that downstream map/UI layers consume

use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use serde::{Serialize,Deserialize};
use uom::si::{f64::{Power,ThermodynamicTemperature}, power::megawatt, thermodynamic_temperature::kelvin};

use northwatch_common::angle::{Latitude,Longitude};
use northwatch_common::geo::GeoRect;
use northwatch_common::define_load_config;

pub mod errors;
pub mod importer;
pub mod cache;

use errors::{NorthwatchFirmsError, Result};

define_load_config!{}

/* #region confidence **********************************************************************************************/

/// ordinal confidence band of a fire detection. The upstream products encode this
/// inconsistently (categorical words for VIIRS, 0-100 percentages for MODIS) so every
/// record gets classified into one of these bands on import. `Unknown` is a first class
/// band that downstream filters can exclude, it is not an error
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum HotspotConfidence {
    Low,
    Nominal,
    High,
    Unknown
}

impl HotspotConfidence {
    /// classify a source-native confidence representation. Categorical tokens take
    /// precedence over numeric interpretation, anything else is Unknown
    pub fn classify (raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        match s.as_str() {
            "low" => HotspotConfidence::Low,
            "nominal" => HotspotConfidence::Nominal,
            "high" => HotspotConfidence::High,
            _ => match s.parse::<f64>() {
                Ok(v) if v.is_nan() => HotspotConfidence::Unknown,
                Ok(v) if v >= 80.0 => HotspotConfidence::High,
                Ok(v) if v >= 40.0 => HotspotConfidence::Nominal,
                Ok(_) => HotspotConfidence::Low,
                Err(_) => HotspotConfidence::Unknown
            }
        }
    }
}

impl fmt::Display for HotspotConfidence {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HotspotConfidence::Low => "low",
            HotspotConfidence::Nominal => "nominal",
            HotspotConfidence::High => "high",
            HotspotConfidence::Unknown => "unknown"
        };
        f.write_str(s)
    }
}

/* #endregion confidence */

/* #region hotspot records *****************************************************************************************/

/// the uniform internal fire detection record all feed adapters produce.
/// Note the brightness temperature scales of the products are NOT reconciled
/// (MODIS channel 21/22 vs VIIRS I-4), records just carry what the feed reported
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Hotspot {
    pub lat: Latitude,
    pub lon: Longitude,
    pub bright: ThermodynamicTemperature,
    pub frp: Option<Power>,
    pub conf_raw: String,
    pub conf: HotspotConfidence,
    pub acq_date: String, // kept as received, e.g. "2025-08-05"
    pub acq_time: String, // zero padded "HHMM" as received
    pub source: Arc<String>
}

impl Hotspot {
    pub fn brightness_kelvin (&self) -> f64 { self.bright.get::<kelvin>() }
    pub fn frp_megawatt (&self) -> Option<f64> { self.frp.map(|p| p.get::<megawatt>()) }
}

/// per-source record count of a fused snapshot
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct SourceCount {
    pub source: Arc<String>,
    pub count: usize
}

/// observable degradation report for a feed that could not contribute to a snapshot
#[derive(Debug,Clone,Serialize)]
pub struct FeedNotice {
    pub source: Arc<String>,
    pub message: String
}

/* #endregion hotspot records */

/* #region snapshot ************************************************************************************************/

/// the fused dataset of one pipeline run: all hotspots in configured source order
/// (per-source row order preserved, no cross-source dedup), per-source counts in the
/// same order, and notices for sources that failed. Contains no wallclock data so
/// identical upstream bytes fuse into an identical snapshot
#[derive(Debug,Serialize)]
pub struct HotspotSnapshot {
    pub hotspots: Vec<Hotspot>,
    pub counts: Vec<SourceCount>,
    pub total: usize,
    pub notices: Vec<FeedNotice>
}

impl HotspotSnapshot {
    /// fuse per-source contributions into one snapshot. Contributions are processed in
    /// the given order. A failed source contributes a zero count and a notice, it never
    /// aborts fusion
    pub fn fuse (contributions: Vec<(Arc<String>, Result<Vec<Hotspot>>)>) -> Self {
        let mut hotspots: Vec<Hotspot> = Vec::new();
        let mut counts: Vec<SourceCount> = Vec::with_capacity( contributions.len());
        let mut notices: Vec<FeedNotice> = Vec::new();

        for (source, res) in contributions {
            match res {
                Ok(mut hs) => {
                    counts.push( SourceCount { source, count: hs.len() });
                    hotspots.append( &mut hs);
                }
                Err(e) => {
                    counts.push( SourceCount { source: source.clone(), count: 0 });
                    notices.push( FeedNotice { source, message: e.to_string() });
                }
            }
        }

        let total = hotspots.len();
        HotspotSnapshot { hotspots, counts, total, notices }
    }

    pub fn empty () -> Self {
        HotspotSnapshot { hotspots: Vec::new(), counts: Vec::new(), total: 0, notices: Vec::new() }
    }

    pub fn len (&self) -> usize { self.hotspots.len() }
    pub fn is_empty (&self) -> bool { self.hotspots.is_empty() }

    /// return the records matching the given confidence bands and minimum brightness.
    /// This is the display-side selection contract, it operates on a copy and leaves
    /// the snapshot itself untouched
    pub fn filter_view (&self, bands: &[HotspotConfidence], min_bright: ThermodynamicTemperature) -> Vec<Hotspot> {
        self.hotspots.iter()
            .filter( |h| bands.contains( &h.conf) && h.bright >= min_bright)
            .cloned()
            .collect()
    }

    pub fn to_json_pretty (&self) -> Result<String> {
        Ok( serde_json::to_string_pretty( &self)? )
    }

    pub fn to_json (&self) -> Result<String> {
        Ok( serde_json::to_string( &self)? )
    }
}

/* #endregion snapshot */

/* #region config **************************************************************************************************/

/// which raw CSV record layout a configured source uses
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum FeedSchema {
    Modis,
    Viirs
}

impl FromStr for FeedSchema {
    type Err = NorthwatchFirmsError;

    fn from_str (s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "modis" => Ok(FeedSchema::Modis),
            "viirs" => Ok(FeedSchema::Viirs),
            other => Err( errors::op_failed!("unknown feed schema {}", other))
        }
    }
}

/// one upstream FIRMS CSV resource
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct FirmsSourceConfig {
    pub source: String,
    pub url: String,
    pub schema: FeedSchema
}

#[derive(Debug,Serialize,Deserialize)]
pub struct FirmsConfig {
    pub sources: Vec<FirmsSourceConfig>, // fetch/fusion order
    pub bounds: GeoRect,
    pub ttl: Duration,
    pub default_bands: Vec<HotspotConfidence>,
    pub min_brightness: f64 // kelvin
}

impl FirmsConfig {
    pub fn min_brightness_temp (&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>( self.min_brightness)
    }
}

/* #endregion config */
