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

use std::str::FromStr;
use gridmatch_common::{ok_or_bail, NumFmtError, num_fmt::{fmt_f64, parse_list, parse_pair}};
use crate::meta::RasterMetadata;

/// axis aligned target extent in ground units of the reference raster, in the
/// (x_min, y_min, x_max, y_max) order used by `gdalwarp -te`
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TargetExtent {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64
}

impl TargetExtent {
    /// the bounds of the raster described by `meta`. Corners are sorted so that this also works for
    /// south-up rasters (positive pixel height) or negative pixel widths
    pub fn from_metadata (meta: &RasterMetadata)->Self {
        let (x_min, x_max) = ordered( meta.ul_x, meta.lr_x);
        let (y_min, y_max) = ordered( meta.lr_y, meta.ul_y);
        TargetExtent { x_min, y_min, x_max, y_max }
    }

    pub fn to_args (&self)->[String;4] {
        [ fmt_f64(self.x_min), fmt_f64(self.y_min), fmt_f64(self.x_max), fmt_f64(self.y_max) ]
    }
}

#[inline]
fn ordered (a: f64, b: f64)->(f64,f64) {
    if a <= b { (a,b) } else { (b,a) }
}

/// output pixel resolution in ground units. gdalwarp only takes the absolute value of the y resolution,
/// x has to be positive
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Resolution {
    pub x: f64,
    pub y: f64
}

impl Resolution {
    pub fn new (x: f64, y: f64)->Self { Resolution{x,y} }

    /// the native pixel size of the raster described by `meta`. The (negative for north-up)
    /// pixel height is kept, the pixel width is made positive
    pub fn from_metadata (meta: &RasterMetadata)->Self {
        Resolution { x: meta.pixel_width.abs(), y: meta.pixel_height }
    }

    pub fn to_args (&self)->[String;2] {
        [ fmt_f64(self.x), fmt_f64(self.y) ]
    }
}

/// accepts "xres yres", "xres,yres" or a single value for square pixels
impl FromStr for Resolution {
    type Err = NumFmtError;

    fn from_str (s: &str)->Result<Self,Self::Err> {
        let (x,y) = parse_pair::<f64>(s)?;
        ok_or_bail!( x != 0.0 && y != 0.0 && x.is_finite() && y.is_finite(), NumFmtError::InvalidNumber(s.to_string()));
        Ok( Resolution{x,y} )
    }
}

/// output raster dimensions in pixels
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Size {
    pub width: u64,
    pub height: u64
}

impl Size {
    pub fn new (width: u64, height: u64)->Self { Size{width,height} }

    pub fn to_args (&self)->[String;2] {
        [ self.width.to_string(), self.height.to_string() ]
    }
}

/// accepts "width height" or "width,height" (both values are required). One of them can be 0,
/// in which case gdalwarp computes it from the aspect ratio of the extent
impl FromStr for Size {
    type Err = NumFmtError;

    fn from_str (s: &str)->Result<Self,Self::Err> {
        match parse_list::<u64>(s)?.as_slice() {
            [width,height] => {
                ok_or_bail!( *width > 0 || *height > 0, NumFmtError::InvalidNumber(s.to_string()));
                Ok( Size{ width: *width, height: *height } )
            }
            _ => Err( NumFmtError::InvalidValueCount(s.to_string(), 2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta (gt: [f64;6], cols: usize, rows: usize)->RasterMetadata {
        RasterMetadata::from_parts( gt, cols, rows, String::new(), String::new(), None)
    }

    #[test]
    fn test_north_up_extent() {
        let m = meta( [500000.0, 30.0, 0.0, 4000000.0, 0.0, -30.0], 100, 200);
        let te = TargetExtent::from_metadata( &m);
        assert_eq!( te, TargetExtent { x_min: 500000.0, y_min: 3994000.0, x_max: 503000.0, y_max: 4000000.0 });
        assert_eq!( te.to_args(), ["500000.0", "3994000.0", "503000.0", "4000000.0"]);
    }

    #[test]
    fn test_south_up_extent() {
        let m = meta( [10.0, 0.5, 0.0, -20.0, 0.0, 0.5], 4, 8);
        let te = TargetExtent::from_metadata( &m);
        assert_eq!( te, TargetExtent { x_min: 10.0, y_min: -20.0, x_max: 12.0, y_max: -16.0 });
        assert!( te.y_min <= te.y_max);
    }

    #[test]
    fn test_resolution_from_metadata() {
        let m = meta( [500000.0, 30.0, 0.0, 4000000.0, 0.0, -30.0], 100, 200);
        let res = Resolution::from_metadata( &m);
        assert_eq!( res, Resolution::new( 30.0, -30.0));
        assert_eq!( res.to_args(), ["30.0", "-30.0"]);
    }

    #[test]
    fn test_resolution_negative_width() {
        let m = meta( [503000.0, -30.0, 0.0, 4000000.0, 0.0, -30.0], 100, 200);
        let res = Resolution::from_metadata( &m);
        assert_eq!( res, Resolution::new( 30.0, -30.0));

        let te = TargetExtent::from_metadata( &m);
        assert_eq!( te, TargetExtent { x_min: 500000.0, y_min: 3994000.0, x_max: 503000.0, y_max: 4000000.0 });
    }

    #[test]
    fn test_parse_resolution() {
        assert_eq!( "30 30".parse::<Resolution>().unwrap(), Resolution::new(30.0, 30.0));
        assert_eq!( "0.25,-0.25".parse::<Resolution>().unwrap(), Resolution::new(0.25, -0.25));
        assert_eq!( "10".parse::<Resolution>().unwrap(), Resolution::new(10.0, 10.0));
        assert!( "0 10".parse::<Resolution>().is_err());
        assert!( "x".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!( "1024 768".parse::<Size>().unwrap(), Size::new(1024, 768));
        assert_eq!( "512,0".parse::<Size>().unwrap(), Size::new(512, 0));
        assert_eq!( Size::new(512,0).to_args(), ["512", "0"]);
        assert!( "0 0".parse::<Size>().is_err());
        assert!( "1.5 2".parse::<Size>().is_err());
        assert!( "512".parse::<Size>().is_err());
        assert!( "1 2 3".parse::<Size>().is_err());
    }
}
