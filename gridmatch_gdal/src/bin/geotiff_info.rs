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

use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use gridmatch_gdal::{init_tool_logging, info::write_info_file, RasterMetadata, Result};

/// Get georeferencing information from a raster file and write it to a text file
/// (pixel width, pixel height, ulx, uly, lrx, lry, PROJ string and no-data value, one per line)
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// the raster to analyze
    src: PathBuf,

    /// the text file to write
    output: PathBuf,
}

fn main ()->ExitCode {
    init_tool_logging();
    let args = Args::parse();

    match run( &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("geotiff_info: {e}");
            ExitCode::from( e.exit_code())
        }
    }
}

fn run (args: &Args)->Result<()> {
    let meta = RasterMetadata::open( &args.src)?; // dataset is closed before we write
    write_info_file( &meta, &args.output)
}
