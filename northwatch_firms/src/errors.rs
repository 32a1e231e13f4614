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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NorthwatchFirmsError>;

#[derive(Error,Debug)]
pub enum NorthwatchFirmsError {

   #[error("IO error {0}")]
   IOError( #[from] std::io::Error),

   #[error("fetch error {0}")]
   FetchError( #[from] northwatch_common::net::NorthwatchNetError),

   #[error("CSV error {0}")]
   CsvError( #[from] csv::Error),

   #[error("schema error {0}")]
   SchemaError( String ),

   #[error("config error {0}")]
   ConfigError( #[from] northwatch_common::config::NorthwatchConfigError),

   #[error("JSON error {0}")]
   JsonError( #[from] serde_json::Error),

   #[error("operation failed {0}")]
   OpFailedError(String),
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        NorthwatchFirmsError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;

macro_rules! schema_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        NorthwatchFirmsError::SchemaError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use schema_error;
