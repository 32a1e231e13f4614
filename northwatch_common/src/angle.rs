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

//! normalized geodetic angle newtypes. Plain f64 degrees are too easy to mix up
//! (lat/lon order bugs, un-normalized values from upstream feeds) so we wrap them
//! in dedicated types that normalize on construction and range-check on deserialization

use std::{cmp, fmt};

use serde::ser::{Serialize as SerializeTrait, Serializer};
use serde::de::{self, Deserialize as DeserializeTrait, Deserializer, Visitor};

#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// generate a concrete normalized angle newtype. Construction always normalizes,
/// deserialization rejects degrees outside [min..max] so out-of-range input from
/// config files or feeds cannot be represented
macro_rules! define_angle {
    ($name:ident, $normalize:ident, $min:literal, $max:literal) => {
        #[derive(Clone,Copy)]
        pub struct $name(f64);

        impl $name {
            #[inline]
            pub fn from_degrees (deg: f64) -> Self { $name( $normalize(deg)) }

            #[inline] pub fn degrees (&self) -> f64 { self.0 }
            #[inline] pub fn radians (&self) -> f64 { self.0.to_radians() }
        }

        impl From<$name> for f64 {
            fn from (a: $name) -> f64 { a.0 }
        }

        impl fmt::Display for $name {
            fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.0) }
        }

        impl fmt::Debug for $name {
            fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!( stringify!($name), "({})"), self.0)
            }
        }

        impl cmp::PartialEq for $name {
            fn eq (&self, other: &Self) -> bool { self.0 == other.0 }
        }

        impl cmp::PartialOrd for $name {
            fn partial_cmp (&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp( &other.0) }
        }

        impl SerializeTrait for $name {
            fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
                serializer.serialize_f64( self.0)
            }
        }

        impl<'de> DeserializeTrait<'de> for $name {
            fn deserialize<D> (deserializer: D) -> Result<$name, D::Error> where D: Deserializer<'de> {
                struct AngleVisitor;

                impl<'de> Visitor<'de> for AngleVisitor {
                    type Value = $name;

                    fn expecting (&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        let msg = format!("expecting floating point degrees between [{}..{}]", $min, $max);
                        formatter.write_str( &msg)
                    }

                    fn visit_f64<E> (self, value: f64) -> Result<Self::Value, E> where E: de::Error {
                        if value >= $min && value <= $max {
                            Ok( $name::from_degrees( value))
                        } else {
                            Err( E::custom( format!("degrees out of range: {}", value)))
                        }
                    }

                    fn visit_i64<E> (self, value: i64) -> Result<Self::Value, E> where E: de::Error {
                        self.visit_f64( value as f64)
                    }

                    fn visit_u64<E> (self, value: u64) -> Result<Self::Value, E> where E: de::Error {
                        self.visit_f64( value as f64)
                    }
                }

                deserializer.deserialize_f64( AngleVisitor)
            }
        }
    };
}

define_angle! { Latitude, normalize_90, -90.0, 90.0 }
define_angle! { Longitude, normalize_180, -180.0, 180.0 }
