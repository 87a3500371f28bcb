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
use gridmatch_gdal::{compose_clip_command, init_tool_logging, ClipOptions, ResampleAlg, Resolution, Size, Result, DEFAULT_WARP_CMD};

/// Warp a raster so that it has the exact same projection, extent and resolution as a reference raster.
/// If the pixels of <SRC> and <CLIPSRC> do not line up exactly the pixels of <SRC> are resampled
#[derive(Parser, Debug)]
#[command(version, allow_negative_numbers = true)]
struct Args {
    /// resampling method
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = ResampleAlg::Near)]
    resample: ResampleAlg,

    /// output resolution override ("xres yres", "xres,yres" or single value)
    #[arg(short = 't', long, allow_hyphen_values = true)]
    tr: Option<Resolution>,

    /// output size override in pixels ("width height" or "width,height"), takes precedence over --tr
    #[arg(short = 's', long)]
    ts: Option<Size>,

    /// no-data value of the output raster
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    dstnodata: Option<String>,

    /// warp executable to run
    #[arg(long, env = "GRIDMATCH_WARP_CMD", default_value = DEFAULT_WARP_CMD)]
    warp_cmd: String,

    /// only print the warp command, don't execute it
    #[arg(long)]
    dry_run: bool,

    /// the raster to reproject
    src: PathBuf,

    /// the raster to match
    clipsrc: PathBuf,

    /// the output file
    dst: PathBuf,
}

impl Args {
    fn clip_options (&self)->ClipOptions {
        ClipOptions {
            resample: self.resample,
            tr: self.tr,
            ts: self.ts,
            dstnodata: self.dstnodata.clone()
        }
    }
}

fn main ()->ExitCode {
    init_tool_logging();
    let args = Args::parse();

    match run( &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("clip_to_raster: {e}");
            ExitCode::from( e.exit_code())
        }
    }
}

fn run (args: &Args)->Result<()> {
    let opts = args.clip_options();
    let warp = compose_clip_command( &args.warp_cmd, &args.src, &args.clipsrc, &args.dst, &opts)?;

    if args.dry_run {
        println!("{warp}");
        Ok(())
    } else {
        warp.exec()
    }
}
