//! Core BAS module: file-level reading and writing.

pub mod format;
pub mod interchange;
pub mod types;
mod utils;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use log::info;

pub use format::animation::{decode_animation, encode_animation};
pub use format::entry::{decode_entry, encode_entry};
pub use types::error::{BasError, LookupKey, Result};
pub use types::lookup::{
    IdResolver, LookupPreset, SoundIdTable, DEFAULT_LOOKUP_DIR, LOOKUP_PRESETS, SMG1_LOOKUP, SMG2_LOOKUP,
};
pub use types::models::*;

/// Reads and decodes a BAS file.
pub fn read_bas_file<R: IdResolver + ?Sized>(
    path: impl AsRef<Path>,
    endian: Endian,
    resolver: &R,
) -> Result<SoundAnimation> {
    let path = path.as_ref();
    info!("Reading BAS file: {} ({})", path.display(), endian);
    let data = fs::read(path)?;
    let animation = decode_animation(&data, 0, endian, resolver)?;
    info!("BAS file decoded: {} sound entries", animation.len());
    Ok(animation)
}

/// Encodes an animation and writes it as a BAS file.
///
/// The file is only created once encoding has succeeded.
pub fn write_bas_file<R: IdResolver + ?Sized>(
    animation: &SoundAnimation,
    path: impl AsRef<Path>,
    endian: Endian,
    resolver: &R,
) -> Result<()> {
    let path = path.as_ref();
    let data = encode_animation(animation, endian, resolver)?;
    info!("Writing BAS file: {} ({} bytes, {})", path.display(), data.len(), endian);
    fs::write(path, data)?;
    Ok(())
}

/// Writes an animation as a JSON file.
pub fn dump_json_file(animation: &SoundAnimation, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    info!("Writing JSON file: {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    interchange::write_json(animation, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Loads an animation from a JSON file.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<SoundAnimation> {
    let path = path.as_ref();
    info!("Reading JSON file: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let animation = interchange::read_json(reader)?;
    info!("JSON file loaded: {} sound entries", animation.len());
    Ok(animation)
}
