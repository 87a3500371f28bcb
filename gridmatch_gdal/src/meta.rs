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
use gdal::{Dataset, GeoTransform};
use gdal::spatial_ref::SpatialRef;
use tracing::{debug,warn};

use crate::open_raster;
use crate::errors::Result;

/// what GDAL reports for rasters that do not have a geotransform
pub const DEFAULT_GEOTRANSFORM: GeoTransform = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// the georeferencing info of a (non-rotated) raster
#[derive(Debug,Clone,PartialEq)]
pub struct RasterMetadata {
    pub pixel_width: f64,
    pub pixel_height: f64, // negative for north-up rasters

    pub ul_x: f64,
    pub ul_y: f64,

    pub rows: usize,
    pub cols: usize,

    pub lr_x: f64,
    pub lr_y: f64,

    pub wkt: String,
    pub proj4: String,

    pub nodata: Option<f64> // of band 1
}

impl RasterMetadata {

    /// open the raster at `path` and read its georeferencing info. The dataset is closed before we return
    pub fn open<P: AsRef<Path>> (path: P)->Result<Self> {
        let ds = open_raster( path.as_ref())?;
        Self::from_dataset( &ds)
    }

    pub fn from_dataset (ds: &Dataset)->Result<Self> {
        let (cols,rows) = ds.raster_size();

        let gt = match ds.geo_transform() {
            Ok(gt) => gt,
            Err(e) => {
                debug!("no geotransform ({e}), using default");
                DEFAULT_GEOTRANSFORM
            }
        };

        let wkt = ds.projection();
        let proj4 = wkt_to_proj4( &wkt)?;

        let nodata = if ds.raster_count() > 0 { ds.rasterband(1)?.no_data_value() } else { None };

        Ok( Self::from_parts( gt, cols, rows, wkt, proj4, nodata) )
    }

    /// note that rotation terms of the geotransform are ignored
    pub fn from_parts (gt: GeoTransform, cols: usize, rows: usize, wkt: String, proj4: String, nodata: Option<f64>)->Self {
        if gt[2] != 0.0 || gt[4] != 0.0 {
            warn!("ignoring rotation terms of geotransform {gt:?}");
        }

        let ul_x = gt[0];
        let pixel_width = gt[1];
        let lr_x = ul_x + (cols as f64 * pixel_width);

        let ul_y = gt[3];
        let pixel_height = gt[5];
        let lr_y = ul_y + (rows as f64 * pixel_height);

        RasterMetadata { pixel_width, pixel_height, ul_x, ul_y, rows, cols, lr_x, lr_y, wkt, proj4, nodata }
    }

    pub fn has_srs (&self)->bool { !self.proj4.is_empty() }
}

/// translate a WKT SRS definition into a (trimmed) PROJ string. Empty input means there is no SRS
pub fn wkt_to_proj4 (wkt: &str)->Result<String> {
    if wkt.trim().is_empty() {
        Ok( String::new() )
    } else {
        let srs = SpatialRef::from_wkt( wkt)?;
        Ok( srs.to_proj4()?.trim().to_string() )
    }
}
