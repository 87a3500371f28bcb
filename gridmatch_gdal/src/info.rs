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

use std::path::Path;
use gridmatch_common::{fs::{set_filepath_lines, filepath_contents_as_string}, num_fmt::{fmt_f64, parse_f64}};
use tracing::debug;

use crate::meta::RasterMetadata;
use crate::errors::{Result, output_write_failed, invalid_info_file};

/// the token we write for rasters that do not have a no-data value
pub const NONE_TOKEN: &str = "None";

pub const N_INFO_LINES: usize = 8;

/// the georeferencing info we store in text files, one value per line in field order
#[derive(Debug,Clone,PartialEq)]
pub struct InfoRecord {
    pub pixel_width: f64,
    pub pixel_height: f64,
    pub ul_x: f64,
    pub ul_y: f64,
    pub lr_x: f64,
    pub lr_y: f64,
    pub proj4: String,
    pub nodata: Option<f64>
}

impl From<&RasterMetadata> for InfoRecord {
    fn from (meta: &RasterMetadata)->Self {
        InfoRecord {
            pixel_width: meta.pixel_width,
            pixel_height: meta.pixel_height,
            ul_x: meta.ul_x,
            ul_y: meta.ul_y,
            lr_x: meta.lr_x,
            lr_y: meta.lr_y,
            proj4: meta.proj4.trim().to_string(),
            nodata: meta.nodata
        }
    }
}

impl InfoRecord {
    pub fn to_lines (&self)->[String;N_INFO_LINES] {
        [
            fmt_f64( self.pixel_width),
            fmt_f64( self.pixel_height),
            fmt_f64( self.ul_x),
            fmt_f64( self.ul_y),
            fmt_f64( self.lr_x),
            fmt_f64( self.lr_y),
            self.proj4.clone(),
            self.nodata.map_or_else( || NONE_TOKEN.to_string(), fmt_f64)
        ]
    }

    /// parse the text representation produced by `to_lines`. The source is only used for error messages
    pub fn parse (s: &str, source: &Path)->Result<Self> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != N_INFO_LINES {
            return Err( invalid_info_file( source, format!("expected {N_INFO_LINES} lines, got {}", lines.len())))
        }

        let nodata = match lines[7].trim() {
            NONE_TOKEN => None,
            v => Some( parse_f64(v)? )
        };

        Ok( InfoRecord {
            pixel_width: parse_f64( lines[0])?,
            pixel_height: parse_f64( lines[1])?,
            ul_x: parse_f64( lines[2])?,
            ul_y: parse_f64( lines[3])?,
            lr_x: parse_f64( lines[4])?,
            lr_y: parse_f64( lines[5])?,
            proj4: lines[6].trim().to_string(),
            nodata
        })
    }
}

/// write the info of `meta` to the text file at `path`, replacing existing content.
/// Parent directories have to exist
pub fn write_info_file (meta: &RasterMetadata, path: impl AsRef<Path>)->Result<()> {
    let path = path.as_ref();
    let rec = InfoRecord::from( meta);

    set_filepath_lines( path, &rec.to_lines()).map_err(|e| output_write_failed( path, e))?;
    debug!("wrote raster info to {path:?}");
    Ok(())
}

pub fn read_info_file (path: impl AsRef<Path>)->Result<InfoRecord> {
    let path = path.as_ref();
    let s = filepath_contents_as_string( &path)?;
    InfoRecord::parse( &s, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record (nodata: Option<f64>)->InfoRecord {
        InfoRecord {
            pixel_width: 0.000277777777777778,
            pixel_height: -0.000277777777777778,
            ul_x: -122.00013888888889,
            ul_y: 39.00013888888889,
            lr_x: -120.99986111111111,
            lr_y: 37.99986111111111,
            proj4: "+proj=longlat +datum=WGS84 +no_defs".to_string(),
            nodata
        }
    }

    #[test]
    fn test_lines() {
        let meta = RasterMetadata::from_parts( [500000.0, 30.0, 0.0, 4000000.0, 0.0, -30.0], 100, 200,
                                               String::new(), "+proj=utm +zone=11 +datum=WGS84 +units=m +no_defs ".to_string(), None);
        let lines = InfoRecord::from( &meta).to_lines();
        assert_eq!( lines, [
            "30.0", "-30.0", "500000.0", "4000000.0", "503000.0", "3994000.0",
            "+proj=utm +zone=11 +datum=WGS84 +units=m +no_defs", "None"
        ]);
    }

    #[test]
    fn test_parse_roundtrip() {
        for nodata in [None, Some(-9999.0), Some(0.0), Some(3.4028234663852886e38)] {
            let rec = record( nodata);
            let s = rec.to_lines().join("\n") + "\n";
            let parsed = InfoRecord::parse( &s, Path::new("test")).unwrap();
            assert_eq!( parsed, rec);
        }
    }

    #[test]
    fn test_nan_nodata() {
        let rec = record( Some(f64::NAN));
        let lines = rec.to_lines();
        assert_eq!( lines[7], "nan");

        let parsed = InfoRecord::parse( &lines.join("\n"), Path::new("test")).unwrap();
        assert!( parsed.nodata.unwrap().is_nan());
    }

    #[test]
    fn test_parse_errors() {
        assert!( InfoRecord::parse( "30.0\n-30.0\n", Path::new("short.txt")).unwrap_err().to_string().contains("short.txt"));

        let long = record(None).to_lines().join("\n") + "\nextra\n";
        let e = InfoRecord::parse( &long, Path::new("long.txt")).unwrap_err();
        assert!( e.to_string().contains("got 9"));

        let mut lines = record(None).to_lines();
        lines[2] = "500,000".to_string();
        assert!( InfoRecord::parse( &lines.join("\n"), Path::new("x")).is_err());
    }

    #[test]
    fn test_write_to_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("info.txt");
        let meta = RasterMetadata::from_parts( [0.0, 1.0, 0.0, 0.0, 0.0, -1.0], 1, 1, String::new(), String::new(), None);

        match write_info_file( &meta, &path) {
            Err(crate::GridmatchError::OutputWriteFailed{path: p, ..}) => assert_eq!( p, path),
            other => panic!("unexpected result {other:?}")
        }
    }
}
