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

//! WGS84 surface geometry as newtype wrappers around [geo](https://docs.rs/geo/latest/geo/index.html)
//! primitives. The wrappers pin down degree semantics and lon/lat order, which the
//! underlying generic x/y types leave open

use std::fmt;

use serde::ser::{Serialize as SerializeTrait, SerializeStruct, Serializer};
use serde::de::{Deserialize as DeserializeTrait, Deserializer};
use serde::Deserialize;

use geo::{Coord, Point, Rect};

use crate::angle::{normalize_180, normalize_90, Latitude, Longitude};

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint( Point::new( lon.degrees(), lat.degrees()))
    }

    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn longitude (&self) -> Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude (&self) -> Latitude { Latitude::from_degrees( self.0.y()) }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

// we don't provide a From<Point> since that would allow to create a GeoPoint from arbitrary Points

impl SerializeTrait for GeoPoint {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude().degrees())?;
        state.serialize_field("lat", &self.latitude().degrees())?;
        state.end()
    }
}

impl<'de> DeserializeTrait<'de> for GeoPoint {
    fn deserialize<D> (deserializer: D) -> Result<GeoPoint, D::Error> where D: Deserializer<'de> {
        #[derive(Deserialize)]
        struct GeoPointFields { lon: Longitude, lat: Latitude }

        let fields = GeoPointFields::deserialize( deserializer)?;
        Ok( GeoPoint::from_lon_lat( fields.lon, fields.lat))
    }
}

/* #endregion GeoPoint */

/* #region GeoRect ************************************************************************************************/

/// a wrapper for geo::Rect representing a west/south/east/north bounding box in geodetic degrees
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_wsen (west: Longitude, south: Latitude, east: Longitude, north: Latitude) -> Self {
        GeoRect( Rect::new(
            Coord { x: west.degrees(), y: south.degrees() },
            Coord { x: east.degrees(), y: north.degrees() }
        ))
    }

    pub fn from_wsen_degrees (west: f64, south: f64, east: f64, north: f64) -> Self {
        GeoRect::from_wsen(
            Longitude::from_degrees( west), Latitude::from_degrees( south),
            Longitude::from_degrees( east), Latitude::from_degrees( north)
        )
    }

    pub fn west (&self) -> Longitude { Longitude::from_degrees( self.0.min().x) }
    pub fn south (&self) -> Latitude { Latitude::from_degrees( self.0.min().y) }
    pub fn east (&self) -> Longitude { Longitude::from_degrees( self.0.max().x) }
    pub fn north (&self) -> Latitude { Latitude::from_degrees( self.0.max().y) }

    pub fn rect<'a> (&'a self) -> &'a Rect { &self.0 }

    /// boundary inclusive containment check. Note geo::Rect::contains excludes points on
    /// the max edges so the comparison is spelled out on raw degrees here
    pub fn contains (&self, p: &GeoPoint) -> bool {
        let x = p.point().x();
        let y = p.point().y();

        x >= self.0.min().x && x <= self.0.max().x &&
        y >= self.0.min().y && y <= self.0.max().y
    }
}

impl fmt::Display for GeoRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[W:{},S:{},E:{},N:{}]", self.0.min().x, self.0.min().y, self.0.max().x, self.0.max().y)
    }
}

impl SerializeTrait for GeoRect {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoRect", 4)?;
        state.serialize_field("west", &self.west().degrees())?;
        state.serialize_field("south", &self.south().degrees())?;
        state.serialize_field("east", &self.east().degrees())?;
        state.serialize_field("north", &self.north().degrees())?;
        state.end()
    }
}

impl<'de> DeserializeTrait<'de> for GeoRect {
    fn deserialize<D> (deserializer: D) -> Result<GeoRect, D::Error> where D: Deserializer<'de> {
        #[derive(Deserialize)]
        struct GeoRectFields { west: Longitude, south: Latitude, east: Longitude, north: Latitude }

        let fields = GeoRectFields::deserialize( deserializer)?;
        Ok( GeoRect::from_wsen( fields.west, fields.south, fields.east, fields.north))
    }
}

/* #endregion GeoRect */
