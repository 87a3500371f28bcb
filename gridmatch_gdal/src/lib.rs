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

//! GDAL based raster tools to match the grid of a reference raster (`clip_to_raster`) and to
//! extract georeferencing info from rasters (`geotiff_info`).

pub mod errors;
pub mod meta;
pub mod extent;
pub mod warp;
pub mod info;

use std::path::Path;
use gdal::errors::CplErrType;
use tracing::{debug,warn};
use tracing_subscriber::EnvFilter;

// we re-export these so that tools and tests don't need a direct gdal dependency to import them
pub use gdal::{self, Dataset, DatasetOptions, GdalOpenFlags, GeoTransform, DriverManager};
pub use gdal::spatial_ref::SpatialRef;

pub use errors::{GridmatchError, Result};
pub use meta::RasterMetadata;
pub use extent::{TargetExtent, Resolution, Size};
pub use warp::{ResampleAlg, ClipOptions, OutputGrid, WarpCommand, DEFAULT_WARP_CMD};
pub use info::InfoRecord;

use crate::errors::unreadable_raster;

/// set up tracing for our command line tools (use RUST_LOG to set the max level) and route GDAL
/// error/warning output through it. Output goes to stderr so that it does not mix with tool output
pub fn init_tool_logging() {
    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    gdal::config::set_error_handler(gdal_error_output);
}

fn gdal_error_output (cpl_et: CplErrType, ec: i32, msg: &str) {
    match cpl_et {
        CplErrType::Failure | CplErrType::Fatal => warn!("GDAL error {ec}: {msg}"),
        _ => debug!("GDAL {ec}: {msg}")
    }
}

/// open a raster dataset read-only. Anything that does not open as a raster (missing file, unknown
/// format, vector-only data) is reported as `UnreadableRaster` for the given path
pub fn open_raster<P: AsRef<Path>> (path: P)->Result<Dataset> {
    let path = path.as_ref();
    let dso = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_READONLY | GdalOpenFlags::GDAL_OF_RASTER,
        allowed_drivers: None,
        open_options: None,
        sibling_files: None
    };

    match Dataset::open_ex( path, dso) {
        Ok(ds) => Ok(ds),
        Err(e) => {
            debug!("failed to open {path:?}: {e}");
            Err( unreadable_raster(path))
        }
    }
}

/// compose the warp command that maps `src` onto the grid of the `clip_src` reference raster.
/// Both inputs have to be readable rasters (source first). Datasets are closed when this returns
pub fn compose_clip_command<P: AsRef<Path>> (warp_cmd: &str, src: P, clip_src: P, dst: P, opts: &ClipOptions)->Result<WarpCommand> {
    let src = src.as_ref();
    drop( open_raster( src)?); // we only need to know it is a raster, the warp tool does the rest

    let clip_meta = RasterMetadata::open( clip_src.as_ref())?;
    Ok( WarpCommand::for_reference( warp_cmd, src, dst.as_ref(), &clip_meta, opts) )
}
