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

//! TTL memoization of fused snapshots. The cache is an owned object so that its
//! lifetime and scope are explicit at the call site, there is no process-global state

use std::{sync::Arc, time::{Duration,Instant}};

use tokio::sync::Mutex;
use tracing::debug;

use crate::importer::FirmsPipeline;
use crate::HotspotSnapshot;

struct CacheEntry {
    snapshot: Arc<HotspotSnapshot>,
    created: Instant
}

/// single-slot TTL cache for the fused hotspot snapshot. The slot is guarded by an
/// async mutex held across the rebuild so concurrent misses collapse into one pipeline
/// run, callers never observe a partially built snapshot
pub struct SnapshotCache {
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>
}

impl SnapshotCache {
    pub fn new (ttl: Duration) -> Self {
        SnapshotCache { ttl, entry: Mutex::new( None) }
    }

    pub fn ttl (&self) -> Duration { self.ttl }

    /// return the cached snapshot if it is younger than ttl, otherwise run the
    /// pipeline and cache its result. The swap is atomic from the caller perspective
    pub async fn get_or_refresh (&self, pipeline: &FirmsPipeline) -> Arc<HotspotSnapshot> {
        let mut guard = self.entry.lock().await;

        if let Some(entry) = guard.as_ref() {
            if entry.created.elapsed() < self.ttl {
                return entry.snapshot.clone()
            }
            debug!("snapshot expired after {:?}, refreshing", self.ttl);
        }

        let snapshot = Arc::new( pipeline.execute().await);
        *guard = Some( CacheEntry { snapshot: snapshot.clone(), created: Instant::now() });

        snapshot
    }

    /// drop the cached snapshot so the next access rebuilds regardless of age
    pub async fn invalidate (&self) {
        *self.entry.lock().await = None;
    }
}
