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

use std::fs::File;
use std::io::{BufWriter,Read,Write};
use std::path::Path;

type Result<T> = std::result::Result<T,std::io::Error>;

/// create (or truncate) the file at `path` and write each of the provided lines with a '\n' terminator.
/// Note this does not create missing parent directories
pub fn set_filepath_lines<S: AsRef<str>> (path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let file = File::create( path.as_ref())?;
    let mut w = BufWriter::new(file);
    for line in lines {
        w.write_all( line.as_ref().as_bytes())?;
        w.write_all( b"\n")?;
    }
    w.flush()
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
