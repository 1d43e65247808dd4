//! # jaudio-bas
//!
//! Reader and writer for JAudio sound animation (BAS) data, the format used by
//! Nintendo's JSystem audio library to play sounds on specific animation frames.
//!
//! A BAS buffer is an 8-byte header followed by fixed 32-byte sound entries.
//! Sounds are stored by numeric ID and labelled through a lookup table, so
//! every decode and encode takes an [`IdResolver`] such as [`SoundIdTable`].
//! Animations convert to and from JSON for editing.
pub mod bas;

// Re-export the main types for convenience
pub use bas::{
    decode_animation, decode_entry, dump_json_file, encode_animation, encode_entry, load_json_file,
    read_bas_file, write_bas_file, BasError, Endian, IdResolver, LookupKey, LookupPreset, Result,
    SoundAnimation, SoundEntry, SoundIdTable,
};
