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

//! locale independent text representation of numeric values.
//!
//! Values are written with the shortest decimal representation that parses back into the same
//! `f64`. Integral values keep a trailing ".0" so that they are recognizable as floating point
//! values, and non-finite values use the lowercase `nan`, `inf` and `-inf` tokens.

use std::str::FromStr;
use crate::define_error;

define_error!{ pub NumFmtError =
    InvalidNumber(String) : "invalid number: '{0}'",
    InvalidValueCount(String,usize) : "invalid number of values in '{0}' (expected {1})"
}

type Result<T> = std::result::Result<T,NumFmtError>;

pub fn fmt_f64 (v: f64)->String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        let s = v.to_string(); // Display is round-trip exact and never uses exponents
        if s.contains('.') { s } else { s + ".0" }
    }
}

pub fn parse_f64 (s: &str)->Result<f64> {
    let s = s.trim();
    f64::from_str(s).map_err(|_| NumFmtError::InvalidNumber(s.to_string()))
}

/// split a value list that uses whitespace and/or commas as separators
pub fn split_values (s: &str)->Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',').filter(|v| !v.is_empty()).collect()
}

pub fn parse_list<T: FromStr> (s: &str)->Result<Vec<T>> {
    split_values(s).into_iter()
        .map( |v| v.parse::<T>().map_err(|_| NumFmtError::InvalidNumber(v.to_string())))
        .collect()
}

/// parse a list with either one value (which is then used for both) or two values
pub fn parse_pair<T: FromStr + Copy> (s: &str)->Result<(T,T)> {
    let vs = parse_list::<T>(s)?;
    match vs.as_slice() {
        [v] => Ok((*v,*v)),
        [a,b] => Ok((*a,*b)),
        _ => Err( NumFmtError::InvalidValueCount(s.to_string(), 2))
    }
}
