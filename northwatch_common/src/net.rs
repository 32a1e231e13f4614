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

//! common utility functions for network operations

use std::{fs::File, io::Write, path::Path};

use reqwest::{Client, StatusCode};
use thiserror;
use tracing::debug;

#[derive(thiserror::Error,Debug)]
pub enum NorthwatchNetError {
    #[error("IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("http error: {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFoundError(String),

    #[error("operation failed: {0}")]
    OpFailed(String),
}

pub type Result<T> = std::result::Result<T, NorthwatchNetError>;

/// fetch the content of `url` into a String using HTTP GET. If `save_to` is set the
/// raw bytes are also written to that file so that retrieved data can be inspected later
pub async fn retrieve_data (client: &Client, url: &str, save_to: Option<&Path>) -> Result<String> {
    let response = client.get( url).send().await?;

    match response.status() {
        StatusCode::OK => {
            let data = response.text().await?;
            debug!("retrieved {} bytes from {}", data.len(), url);

            if let Some(path) = save_to {
                let mut file = File::create( path)?;
                file.write_all( data.as_bytes())?;
            }
            Ok(data)
        }
        StatusCode::NOT_FOUND => {
            Err( NorthwatchNetError::NotFoundError( format!("{url}")))
        }
        other => {
            Err( NorthwatchNetError::OpFailed( format!("response status {other:?}")))
        }
    }
}

/// fetch file from URL using HTTP GET. Retrieve in chunks to support large files
pub async fn download_url (client: &Client, url: &str, path: impl AsRef<Path>) -> Result<u64> {
    let mut file = File::create( path)?;
    let mut len: u64 = 0;

    let mut response = client.get( url).send().await?;

    match response.status() {
        StatusCode::OK => {
            while let Some(chunk) = response.chunk().await? {
                len += chunk.len() as u64;
                file.write_all( &chunk)?;
            }

            file.flush()?;
            Ok(len)
        }
        StatusCode::NOT_FOUND => {
            Err( NorthwatchNetError::NotFoundError( format!("{url}")))
        }
        other => {
            Err( NorthwatchNetError::OpFailed( format!("response status {other:?}")))
        }
    }
}
