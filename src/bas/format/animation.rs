//! Sound animation encoding and decoding.
//!
//! Animation layout:
//! - 2 bytes: Entry count (u16)
//! - 1 byte:  unk2
//! - 1 byte:  unk3
//! - 4 bytes: Padding
//! - 32 bytes per entry, `entry count` times

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::debug;

use crate::bas::types::error::{BasError, Result};
use crate::bas::types::lookup::IdResolver;
use crate::bas::types::models::{Endian, SoundAnimation, ENTRY_SIZE, HEADER_SIZE};
use crate::bas::utils;

use super::entry;

/// Decodes the animation stored at `offset`.
///
/// Decoding is all-or-nothing: the first entry that fails aborts the whole
/// animation.
///
/// # Errors
/// - `TruncatedBuffer` if the header or any declared entry runs past the buffer
/// - `LookupNotFound` if an entry's sound ID is not in the lookup table
pub fn decode_animation<R: IdResolver + ?Sized>(
    buffer: &[u8],
    offset: usize,
    endian: Endian,
    resolver: &R,
) -> Result<SoundAnimation> {
    let header = utils::slot(buffer, offset, HEADER_SIZE, "animation header")?;
    let num_entries = usize::from(match endian {
        Endian::Big => BigEndian::read_u16(&header[0..2]),
        Endian::Little => LittleEndian::read_u16(&header[0..2]),
    });

    debug!(
        "Decoding animation at {:#x}: {} entries ({})",
        offset, num_entries, endian
    );

    // Fail up front rather than after decoding a prefix of the entries.
    utils::slot(
        buffer,
        offset,
        HEADER_SIZE + ENTRY_SIZE * num_entries,
        "sound animation",
    )?;

    let mut animation = SoundAnimation::new();
    animation.unk2 = header[2];
    animation.unk3 = header[3];

    let mut entry_offset = offset + HEADER_SIZE;
    for index in 0..num_entries {
        let sound = entry::decode_entry(buffer, entry_offset, endian, resolver)
            .map_err(|e| e.at_entry(index))?;
        animation.push(sound);
        entry_offset += ENTRY_SIZE;
    }

    Ok(animation)
}

/// Encodes `animation` into a new buffer of exactly `8 + 32 * len` bytes.
///
/// The header's entry count is always taken from the current entry list.
///
/// # Errors
/// - `LookupNotFound` if an entry's sound name is not in the lookup table
/// - `TooManyEntries` if the entry count does not fit the 16-bit header field
pub fn encode_animation<R: IdResolver + ?Sized>(
    animation: &SoundAnimation,
    endian: Endian,
    resolver: &R,
) -> Result<Vec<u8>> {
    let num_entries = animation.len();
    let count = u16::try_from(num_entries).map_err(|_| BasError::TooManyEntries(num_entries))?;
    let mut buffer = vec![0u8; animation.encoded_size()];

    debug!("Encoding animation: {} entries ({})", num_entries, endian);

    match endian {
        Endian::Big => BigEndian::write_u16(&mut buffer[0..2], count),
        Endian::Little => LittleEndian::write_u16(&mut buffer[0..2], count),
    }
    buffer[2] = animation.unk2;
    buffer[3] = animation.unk3;

    let mut entry_offset = HEADER_SIZE;
    for (index, sound) in animation.iter().enumerate() {
        entry::encode_entry(sound, &mut buffer, entry_offset, endian, resolver)
            .map_err(|e| e.at_entry(index))?;
        entry_offset += ENTRY_SIZE;
    }

    Ok(buffer)
}
