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

//! this application serves both as a test for the FIRMS fetch/fuse pipeline and associated
//! configs, and as a production tool to obtain a one-shot fused hotspot snapshot

use std::path::Path;

use northwatch_common::{check_cli, define_cli};
use northwatch_firms::{load_config, FirmsConfig};
use northwatch_firms::importer::FirmsPipeline;
use northwatch_firms::errors::Result;

define_cli! { ARGS [about="FIRMS hotspot fetch/fuse tool"] =
    verbose: bool [help="run verbose", short],
    json: bool [help="print fused snapshot as JSON", long],
    save_dir: Option<String> [help="directory to save raw CSV downloads to", long],
    config: String [help="filename of FirmsConfig", long, default_value="firms.ron"]
}

#[tokio::main]
async fn main () -> Result<()> {
    check_cli!(ARGS);

    let level = if ARGS.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level( level).init();

    let config: FirmsConfig = load_config( &ARGS.config)?;
    let save_dir = ARGS.save_dir.as_ref().map( |d| Path::new( d));

    println!("retrieving hotspots for {} sources within {}", config.sources.len(), config.bounds);

    let pipeline = FirmsPipeline::from_config( &config, save_dir);
    let snapshot = pipeline.execute().await;

    for sc in &snapshot.counts {
        println!("{:20} : {:6} hotspots", sc.source, sc.count);
    }
    println!("{:20} : {:6} hotspots", "total", snapshot.total);

    for notice in &snapshot.notices {
        println!("NOTE - source {} failed: {}", notice.source, notice.message);
    }

    if ARGS.json {
        println!("{}", snapshot.to_json_pretty()?);
    }

    Ok(())
}
