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
use std::path::{Path,PathBuf};
use thiserror::Error;
use gridmatch_common::NumFmtError;

pub type Result<T> = std::result::Result<T, GridmatchError>;

#[derive(Error,Debug)]
pub enum GridmatchError {

    #[error("could not open raster {}", .0.display())]
    UnreadableRaster(PathBuf),

    #[error("warp command '{cmd}' failed: {reason}")]
    WarpFailed { cmd: String, status: Option<i32>, reason: String },

    #[error("could not write {}: {source}", path.display())]
    OutputWriteFailed { path: PathBuf, source: std::io::Error },

    #[error("invalid info file {}: {msg}", path.display())]
    InvalidInfoFile { path: PathBuf, msg: String },

    #[error("invalid value: {0}")]
    InvalidValue( #[from] NumFmtError),

    // pass through for GdalErrors (e.g. from SRS conversion)
    #[error("GDAL error {0}")]
    GdalError( #[from] gdal::errors::GdalError),

    // pass through for IO errors
    #[error("IO error: {0}")]
    IOError( #[from] std::io::Error),
}

impl GridmatchError {
    /// the process exit code for tools that terminate with this error.
    /// Failed warp commands pass on the exit code of the child process if there was one
    pub fn exit_code (&self)->u8 {
        match self {
            GridmatchError::WarpFailed { status: Some(code), .. } if *code > 0 && *code < 256 => *code as u8,
            _ => 1
        }
    }
}

pub fn unreadable_raster (path: impl AsRef<Path>)->GridmatchError {
    GridmatchError::UnreadableRaster( path.as_ref().to_path_buf())
}

pub fn warp_failed (cmd: impl ToString, status: Option<i32>, reason: impl ToString)->GridmatchError {
    GridmatchError::WarpFailed { cmd: cmd.to_string(), status, reason: reason.to_string() }
}

pub fn output_write_failed (path: impl AsRef<Path>, source: std::io::Error)->GridmatchError {
    GridmatchError::OutputWriteFailed { path: path.as_ref().to_path_buf(), source }
}

pub fn invalid_info_file<S: ToString> (path: impl AsRef<Path>, msg: S)->GridmatchError {
    GridmatchError::InvalidInfoFile { path: path.as_ref().to_path_buf(), msg: msg.to_string() }
}
