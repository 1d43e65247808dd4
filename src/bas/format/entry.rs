//! Sound entry encoding and decoding.
//!
//! Entry layout (32 bytes):
//! - 4 bytes: Sound ID (u32)
//! - 4 bytes: Start frame (f32)
//! - 4 bytes: unk8 (f32)
//! - 4 bytes: Pitch (f32)
//! - 4 bytes: Flags (u32)
//! - 6 bytes: volume, pitch_factor, unk16, pan, volume_factor, unk19 (u8 each)
//! - 6 bytes: Padding (zero on write, ignored on read)

use std::io::{Read, Write};
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use log::trace;

use crate::bas::types::error::Result;
use crate::bas::types::lookup::IdResolver;
use crate::bas::types::models::{Endian, SoundEntry, ENTRY_PADDING, ENTRY_SIZE};
use crate::bas::utils;

/// Raw scalar fields of one entry, before the sound ID is resolved.
struct RawEntry {
    sound_id: u32,
    start_frame: f32,
    unk8: f32,
    pitch: f32,
    flags: u32,
    bytes: [u8; 6],
}

/// Decodes the sound entry stored at `offset`.
///
/// # Errors
/// - `TruncatedBuffer` if fewer than 32 bytes remain from `offset`
/// - `LookupNotFound` if the sound ID is not in the lookup table
pub fn decode_entry<R: IdResolver + ?Sized>(
    buffer: &[u8],
    offset: usize,
    endian: Endian,
    resolver: &R,
) -> Result<SoundEntry> {
    let mut reader = utils::slot(buffer, offset, ENTRY_SIZE, "sound entry")?;
    let raw = match endian {
        Endian::Big => read_raw::<BigEndian>(&mut reader)?,
        Endian::Little => read_raw::<LittleEndian>(&mut reader)?,
    };

    let sound = resolver.resolve_name(raw.sound_id)?;
    trace!("Decoded entry at {:#x}: id={:#010x} sound={}", offset, raw.sound_id, sound);

    let [volume, pitch_factor, unk16, pan, volume_factor, unk19] = raw.bytes;
    Ok(SoundEntry {
        sound: sound.to_owned(),
        start_frame: raw.start_frame,
        unk8: raw.unk8,
        pitch: raw.pitch,
        flags: raw.flags,
        volume,
        pitch_factor,
        unk16,
        pan,
        volume_factor,
        unk19,
    })
}

/// Encodes `entry` into the 32-byte slot at `offset`, overwriting it entirely.
///
/// Nothing is written if the sound name cannot be resolved.
///
/// # Errors
/// - `TruncatedBuffer` if fewer than 32 bytes remain from `offset`
/// - `LookupNotFound` if the sound name is not in the lookup table
pub fn encode_entry<R: IdResolver + ?Sized>(
    entry: &SoundEntry,
    buffer: &mut [u8],
    offset: usize,
    endian: Endian,
    resolver: &R,
) -> Result<()> {
    let mut writer = utils::slot_mut(buffer, offset, ENTRY_SIZE, "sound entry")?;
    let raw = RawEntry {
        sound_id: resolver.resolve_id(&entry.sound)?,
        start_frame: entry.start_frame,
        unk8: entry.unk8,
        pitch: entry.pitch,
        flags: entry.flags,
        bytes: [
            entry.volume,
            entry.pitch_factor,
            entry.unk16,
            entry.pan,
            entry.volume_factor,
            entry.unk19,
        ],
    };
    trace!("Encoding entry at {:#x}: id={:#010x} sound={}", offset, raw.sound_id, entry.sound);

    match endian {
        Endian::Big => write_raw::<BigEndian>(&mut writer, &raw),
        Endian::Little => write_raw::<LittleEndian>(&mut writer, &raw),
    }
}

fn read_raw<B: ByteOrder>(reader: &mut &[u8]) -> Result<RawEntry> {
    let sound_id = reader.read_u32::<B>()?;
    let start_frame = reader.read_f32::<B>()?;
    let unk8 = reader.read_f32::<B>()?;
    let pitch = reader.read_f32::<B>()?;
    let flags = reader.read_u32::<B>()?;
    let mut bytes = [0u8; 6];
    reader.read_exact(&mut bytes)?;
    // Remaining ENTRY_PADDING bytes are left unread.
    Ok(RawEntry {
        sound_id,
        start_frame,
        unk8,
        pitch,
        flags,
        bytes,
    })
}

fn write_raw<B: ByteOrder>(writer: &mut &mut [u8], raw: &RawEntry) -> Result<()> {
    writer.write_u32::<B>(raw.sound_id)?;
    writer.write_f32::<B>(raw.start_frame)?;
    writer.write_f32::<B>(raw.unk8)?;
    writer.write_f32::<B>(raw.pitch)?;
    writer.write_u32::<B>(raw.flags)?;
    writer.write_all(&raw.bytes)?;
    writer.write_all(&[0u8; ENTRY_PADDING])?;
    Ok(())
}
