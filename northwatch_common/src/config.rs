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

//! RON based config file support. Configs are looked up in the directory named by the
//! NORTHWATCH_CONFIG environment variable first and fall back to the crate-local
//! `configs/` directory, so a deployment can override shipped defaults without
//! touching the source tree

use std::{env, fs, path::{Path, PathBuf}};

use serde::Deserialize;
use thiserror;

pub const CONFIG_DIR_ENV: &'static str = "NORTHWATCH_CONFIG";

#[derive(thiserror::Error,Debug)]
pub enum NorthwatchConfigError {
    #[error("IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("config parse error: {0}")]
    RonError( #[from] ron::de::SpannedError),

    #[error("config file not found: {0}")]
    NotFoundError(String),
}

pub type Result<T> = std::result::Result<T, NorthwatchConfigError>;

/// deserialize the RON file at `path` into a C
pub fn load_config_path<C> (path: impl AsRef<Path>) -> Result<C> where C: for<'a> Deserialize<'a> {
    let data = fs::read( path.as_ref())?;
    let conf: C = ron::de::from_bytes( data.as_slice())?;
    Ok(conf)
}

/// locate `file_name` in the config lookup order: NORTHWATCH_CONFIG override dir
/// first, then the `configs/` dir of the given crate
pub fn find_config_file (crate_dir: &str, file_name: &str) -> Option<PathBuf> {
    if let Ok(dir) = env::var( CONFIG_DIR_ENV) {
        let path = Path::new( &dir).join( file_name);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new( crate_dir).join("configs").join( file_name);
    if path.is_file() { return Some(path) }

    None
}

/// define a crate-local `load_config` function that resolves config files relative to
/// the calling crate (its CARGO_MANIFEST_DIR), honoring the NORTHWATCH_CONFIG override
#[macro_export]
macro_rules! define_load_config {
    () => {
        pub fn load_config<C> (file_name: &str) -> $crate::config::Result<C> where C: for<'a> serde::Deserialize<'a> {
            match $crate::config::find_config_file( env!("CARGO_MANIFEST_DIR"), file_name) {
                Some(path) => $crate::config::load_config_path( path),
                None => Err( $crate::config::NorthwatchConfigError::NotFoundError( file_name.to_string()))
            }
        }
    }
}
pub use define_load_config;
