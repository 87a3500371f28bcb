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

use std::ffi::{OsStr,OsString};
use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use clap::ValueEnum;
use tracing::{debug,info,warn};
use gridmatch_common::strings::shell_join;

use crate::meta::RasterMetadata;
use crate::extent::{TargetExtent, Resolution, Size};
use crate::errors::{Result, warp_failed};

/// the external warp executable we use if none is configured
pub const DEFAULT_WARP_CMD: &str = "gdalwarp";

/// the resampling algorithms supported by `gdalwarp -r`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ResampleAlg {
    #[default]
    Near,
    Average,
    Bilinear,
    Cubic,
    #[value(name = "cubicspline")]
    CubicSpline,
    Lanczos,
    Mode,
    Max,
    Min,
    Med,
    Q1,
    Q3
}

impl ResampleAlg {
    pub fn gdal_name (&self)->&'static str {
        match self {
            ResampleAlg::Near => "near",
            ResampleAlg::Average => "average",
            ResampleAlg::Bilinear => "bilinear",
            ResampleAlg::Cubic => "cubic",
            ResampleAlg::CubicSpline => "cubicspline",
            ResampleAlg::Lanczos => "lanczos",
            ResampleAlg::Mode => "mode",
            ResampleAlg::Max => "max",
            ResampleAlg::Min => "min",
            ResampleAlg::Med => "med",
            ResampleAlg::Q1 => "q1",
            ResampleAlg::Q3 => "q3",
        }
    }
}

impl fmt::Display for ResampleAlg {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        f.write_str( self.gdal_name())
    }
}

/// case insensitive, i.e. "Q1" and "q1" are both accepted
impl FromStr for ResampleAlg {
    type Err = String;

    fn from_str (s: &str)->std::result::Result<Self,Self::Err> {
        <ResampleAlg as ValueEnum>::from_str( s.trim(), true).map_err(|_| format!("unknown resample algorithm '{s}'"))
    }
}

/// the options of a clip operation. Unset options are derived from the reference raster
#[derive(Debug,Clone,Default,PartialEq)]
pub struct ClipOptions {
    pub resample: ResampleAlg,
    pub tr: Option<Resolution>,
    pub ts: Option<Size>,
    pub dstnodata: Option<String>,
}

/// how the output grid is specified
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum OutputGrid {
    Size(Size),
    Resolution(Resolution)
}

impl ClipOptions {
    /// explicit output size takes precedence over explicit resolution, which takes precedence
    /// over the provided (reference raster) resolution
    pub fn output_grid (&self, ref_res: Resolution)->OutputGrid {
        match (self.ts, self.tr) {
            (Some(ts), tr) => {
                if tr.is_some() { warn!("output size {ts:?} overrides resolution {tr:?}") }
                OutputGrid::Size(ts)
            }
            (None, Some(tr)) => OutputGrid::Resolution(tr),
            (None, None) => OutputGrid::Resolution(ref_res)
        }
    }
}

/// an external warp command (program and argument vector). This is executed as a child process
/// without involving a shell, i.e. paths and SRS definitions are passed on verbatim
#[derive(Debug,Clone)]
pub struct WarpCommand {
    program: OsString,
    args: Vec<OsString>
}

impl WarpCommand {

    /// the command that warps `src` into `dst` so that it has the SRS, extent and (unless overridden in `opts`)
    /// resolution of the reference raster described by `ref_meta`
    pub fn for_reference (program: impl AsRef<OsStr>, src: &Path, dst: &Path, ref_meta: &RasterMetadata, opts: &ClipOptions)->Self {
        let extent = TargetExtent::from_metadata( ref_meta);
        let ref_res = Resolution::from_metadata( ref_meta);
        Self::compose( program, src, dst, &ref_meta.proj4, &extent, ref_res, opts)
    }

    pub fn compose (program: impl AsRef<OsStr>, src: &Path, dst: &Path, t_srs: &str,
                    extent: &TargetExtent, ref_res: Resolution, opts: &ClipOptions)->Self {
        let mut args: Vec<OsString> = Vec::new();

        match opts.output_grid( ref_res) {
            OutputGrid::Size(ts) => push_args( &mut args, "-ts", &ts.to_args()),
            OutputGrid::Resolution(tr) => push_args( &mut args, "-tr", &tr.to_args()),
        }

        if let Some(dstnodata) = &opts.dstnodata {
            push_args( &mut args, "-dstnodata", &[dstnodata]);
        }

        push_args( &mut args, "-te", &extent.to_args());
        args.push( "-multi".into());
        push_args( &mut args, "-r", &[opts.resample.gdal_name()]);
        args.push( "-overwrite".into());

        if !t_srs.is_empty() {
            push_args( &mut args, "-t_srs", &[t_srs]);
        } else {
            warn!("reference raster has no SRS, keeping source SRS");
        }

        args.push( src.as_os_str().to_os_string());
        args.push( dst.as_os_str().to_os_string());

        WarpCommand { program: program.as_ref().to_os_string(), args }
    }

    pub fn program (&self)->&OsStr { &self.program }

    pub fn args (&self)->&[OsString] { &self.args }

    /// the `n` values that follow the first occurrence of `flag` in the argument vector
    pub fn arg_values (&self, flag: &str, n: usize)->Option<&[OsString]> {
        let i = self.args.iter().position(|a| a == flag)? + 1;
        self.args.get( i..i+n)
    }

    pub fn to_command (&self)->Command {
        let mut cmd = Command::new( &self.program);
        cmd.args( &self.args);
        cmd
    }

    /// a POSIX shell representation of this command (for display purposes only)
    pub fn display_string (&self)->String {
        shell_join( std::iter::once( &self.program).chain( self.args.iter()).map(|a| a.to_string_lossy()))
    }

    /// run the command as a blocking child process that inherits stdio
    pub fn exec (&self)->Result<()> {
        let mut cmd = self.to_command();
        let cmd_str = self.display_string();
        debug!("executing {cmd_str}");

        match cmd.status() {
            Ok(status) => {
                if status.success() {
                    info!("{:?} completed with status {}", self.program, status);
                    Ok(())
                } else {
                    Err( warp_failed( cmd_str, status.code(), status))
                }
            }
            Err(e) => Err( warp_failed( cmd_str, None, e))
        }
    }
}

impl fmt::Display for WarpCommand {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        f.write_str( &self.display_string())
    }
}

fn push_args<S: AsRef<OsStr>> (args: &mut Vec<OsString>, flag: &str, values: &[S]) {
    args.push( flag.into());
    for v in values {
        args.push( v.as_ref().to_os_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const UTM_11N: &str = "+proj=utm +zone=11 +datum=WGS84 +units=m +no_defs";

    fn ref_meta ()->RasterMetadata {
        RasterMetadata::from_parts( [500000.0, 30.0, 0.0, 4000000.0, 0.0, -30.0], 100, 200,
                                    String::new(), UTM_11N.to_string(), None)
    }

    fn compose (opts: &ClipOptions)->WarpCommand {
        WarpCommand::for_reference( DEFAULT_WARP_CMD, Path::new("src.tif"), Path::new("dst.tif"), &ref_meta(), opts)
    }

    fn values (wc: &WarpCommand, flag: &str, n: usize)->Vec<String> {
        wc.arg_values( flag, n).unwrap().iter().map(|a| a.to_string_lossy().to_string()).collect()
    }

    fn has_flag (wc: &WarpCommand, flag: &str)->bool {
        wc.args().iter().any(|a| a == flag)
    }

    #[test]
    fn test_default_command() {
        let wc = compose( &ClipOptions::default());
        println!("{wc}");

        assert_eq!( wc.program(), "gdalwarp");
        assert_eq!( values( &wc, "-tr", 2), ["30.0", "-30.0"]);
        assert_eq!( values( &wc, "-te", 4), ["500000.0", "3994000.0", "503000.0", "4000000.0"]);
        assert_eq!( values( &wc, "-r", 1), ["near"]);
        assert_eq!( values( &wc, "-t_srs", 1), [UTM_11N]);
        assert!( has_flag( &wc, "-multi"));
        assert!( has_flag( &wc, "-overwrite"));
        assert!( !has_flag( &wc, "-ts"));
        assert!( !has_flag( &wc, "-dstnodata"));

        let n = wc.args().len();
        assert_eq!( wc.args()[n-2], "src.tif");
        assert_eq!( wc.args()[n-1], "dst.tif");
    }

    #[test]
    fn test_size_overrides_resolution() {
        let opts = ClipOptions {
            tr: Some( Resolution::new( 10.0, 10.0)),
            ts: Some( Size::new( 640, 480)),
            ..Default::default()
        };
        let wc = compose( &opts);

        assert_eq!( values( &wc, "-ts", 2), ["640", "480"]);
        assert!( !has_flag( &wc, "-tr"));
    }

    #[test]
    fn test_explicit_resolution() {
        let opts = ClipOptions { tr: Some( Resolution::new( 10.0, 10.0)), ..Default::default() };
        let wc = compose( &opts);

        assert_eq!( values( &wc, "-tr", 2), ["10.0", "10.0"]);
        assert!( !has_flag( &wc, "-ts"));
    }

    #[test]
    fn test_output_grid_precedence() {
        let ref_res = Resolution::new( 30.0, -30.0);
        let ts = Size::new( 1, 2);
        let tr = Resolution::new( 3.0, 4.0);

        assert_eq!( ClipOptions::default().output_grid(ref_res), OutputGrid::Resolution(ref_res));
        assert_eq!( ClipOptions{ tr: Some(tr), ..Default::default() }.output_grid(ref_res), OutputGrid::Resolution(tr));
        assert_eq!( ClipOptions{ ts: Some(ts), tr: Some(tr), ..Default::default() }.output_grid(ref_res), OutputGrid::Size(ts));
    }

    #[test]
    fn test_nodata_and_resample() {
        let opts = ClipOptions {
            resample: ResampleAlg::CubicSpline,
            dstnodata: Some("-9999".to_string()),
            ..Default::default()
        };
        let wc = compose( &opts);

        assert_eq!( values( &wc, "-dstnodata", 1), ["-9999"]);
        assert_eq!( values( &wc, "-r", 1), ["cubicspline"]);
    }

    #[test]
    fn test_no_srs() {
        let mut meta = ref_meta();
        meta.proj4 = String::new();
        let wc = WarpCommand::for_reference( DEFAULT_WARP_CMD, Path::new("a.tif"), Path::new("b.tif"), &meta, &ClipOptions::default());
        assert!( !has_flag( &wc, "-t_srs"));
    }

    #[test]
    fn test_args_are_not_split() {
        let src = PathBuf::from("my data; rm -rf $HOME.tif");
        let dst = PathBuf::from("out `touch x`.tif");
        let wc = WarpCommand::for_reference( DEFAULT_WARP_CMD, &src, &dst, &ref_meta(), &ClipOptions::default());

        let n = wc.args().len();
        assert_eq!( wc.args()[n-2].as_os_str(), src.as_os_str());
        assert_eq!( wc.args()[n-1].as_os_str(), dst.as_os_str());
        assert_eq!( values( &wc, "-t_srs", 1), [UTM_11N]); // one arg even though it contains spaces

        let s = wc.display_string();
        assert!( s.contains("'my data; rm -rf $HOME.tif'"));
        assert!( s.contains("'out `touch x`.tif'"));
    }

    #[test]
    fn test_resample_names() {
        assert_eq!( "near".parse::<ResampleAlg>().unwrap(), ResampleAlg::Near);
        assert_eq!( "Q1".parse::<ResampleAlg>().unwrap(), ResampleAlg::Q1);
        assert_eq!( "q3".parse::<ResampleAlg>().unwrap(), ResampleAlg::Q3);
        assert_eq!( "cubicspline".parse::<ResampleAlg>().unwrap(), ResampleAlg::CubicSpline);
        assert_eq!( "med".parse::<ResampleAlg>().unwrap(), ResampleAlg::Med);
        assert!( "sum".parse::<ResampleAlg>().is_err());

        for alg in ResampleAlg::value_variants() {
            assert_eq!( alg.gdal_name().parse::<ResampleAlg>().unwrap(), *alg);
        }
    }
}
