//! Path file persistence.
//!
//! A path file is a JSON array of `[x, y]` pairs, start first:
//!
//! ```text
//! [[12.0,40.0],[21.5,38.25],[30.0,30.0]]
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path as FsPath;

use log::info;

use crate::core::Path;
use crate::error::Result;

/// Write a path as JSON to any writer
pub fn write_path<W: Write>(path: &Path, writer: W) -> Result<()> {
    serde_json::to_writer(writer, path)?;
    Ok(())
}

/// Read a JSON path from any reader
pub fn read_path<R: Read>(reader: R) -> Result<Path> {
    Ok(serde_json::from_reader(reader)?)
}

/// Save a path to a file, creating parent directories as needed
pub fn save_path(path: &Path, file: &FsPath) -> Result<()> {
    if let Some(parent) = file.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(file)?);
    write_path(path, &mut writer)?;
    writer.flush()?;

    info!(
        "[PathFile] saved {} waypoints to {}",
        path.len(),
        file.display()
    );
    Ok(())
}

/// Load a path from a file
pub fn load_path(file: &FsPath) -> Result<Path> {
    read_path(BufReader::new(File::open(file)?))
}
