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

//! tool to parse and print a locally stored FIRMS CSV file with a chosen schema adapter,
//! e.g. to inspect raw downloads saved by get_hotspots

use std::{fs::File, str::FromStr, sync::Arc};

use northwatch_common::{check_cli, define_cli};
use northwatch_common::geo::GeoRect;
use northwatch_firms::FeedSchema;
use northwatch_firms::importer::{ModisHotspotImporter, ViirsHotspotImporter};
use northwatch_firms::errors::Result;

define_cli! { ARGS [about="FIRMS CSV file reader"] =
    schema: String [help="record schema of the file (modis|viirs)", long, default_value="modis"],
    source: String [help="source id to tag records with", long, default_value="local"],
    path: String [help="pathname of FIRMS CSV file"]
}

fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_max_level( tracing::Level::INFO).init();

    let schema = FeedSchema::from_str( &ARGS.schema)?;
    let source = Arc::new( ARGS.source.clone());
    let bounds = GeoRect::from_wsen_degrees( -180.0, -90.0, 180.0, 90.0); // whole globe, no filtering here

    let file = File::open( &ARGS.path)?;
    let hotspots = match schema {
        FeedSchema::Modis => ModisHotspotImporter::import_hotspots( file, &source, &bounds)?,
        FeedSchema::Viirs => ViirsHotspotImporter::import_hotspots( file, &source, &bounds)?
    };

    println!("{} hotspots in {}", hotspots.len(), ARGS.path);
    for h in &hotspots {
        let s = serde_json::to_string( h)?;
        println!("{s}");
    }

    Ok(())
}
