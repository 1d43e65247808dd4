//! Core data structures for BAS sound animations.
//!
//! This module defines the structured form of the binary data:
//! - [`SoundEntry`]: one playback directive (one 32-byte slot)
//! - [`SoundAnimation`]: the header scalars plus the ordered entries
//! - [`Endian`]: the byte order applied uniformly to one buffer

use std::fmt;
use std::slice::Iter;
use serde::{Deserialize, Serialize};

/// Size of the animation header in bytes.
pub const HEADER_SIZE: usize = 8;

/// Size of a single sound entry in bytes.
pub const ENTRY_SIZE: usize = 32;

/// Trailing padding after the header fields.
pub const HEADER_PADDING: usize = 4;

/// Trailing padding after the entry fields.
pub const ENTRY_PADDING: usize = 6;

/// Byte order of every multi-byte field in one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// GameCube/Wii native order.
    #[default]
    Big,
    Little,
}

impl Endian {
    pub fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    pub fn is_big_endian(self) -> bool {
        self == Endian::Big
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Big => write!(f, "big-endian"),
            Endian::Little => write!(f, "little-endian"),
        }
    }
}

/// A single sound entry of an animation, describing how one sound is played.
///
/// The sound is identified by its label name; the numeric sound ID only
/// exists in the binary form and is resolved through a lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Sound label name.
    pub sound: String,
    /// Animation frame on which playback starts.
    #[serde(with = "json_f32")]
    pub start_frame: f32,
    #[serde(with = "json_f32")]
    pub unk8: f32,
    #[serde(with = "json_f32")]
    pub pitch: f32,
    /// Playback flag bits.
    pub flags: u32,
    pub volume: u8,
    pub pitch_factor: u8,
    pub unk16: u8,
    pub pan: u8,
    pub volume_factor: u8,
    pub unk19: u8,
}

impl SoundEntry {
    /// Creates an entry for the given sound with default playback values.
    pub fn new(sound: impl Into<String>) -> Self {
        Self {
            sound: sound.into(),
            ..Self::default()
        }
    }
}

impl Default for SoundEntry {
    fn default() -> Self {
        Self {
            sound: String::new(),
            start_frame: 0.0,
            unk8: 0.0,
            pitch: 1.0,
            flags: 0,
            volume: 127,
            pitch_factor: 0,
            unk16: 0,
            pan: 64,
            volume_factor: 0,
            unk19: 0,
        }
    }
}

impl fmt::Display for SoundEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sound)
    }
}

/// A sound animation: two header scalars and an ordered list of sound entries.
///
/// Entry order is playback order. The entry count is not stored; it is
/// derived from the list whenever the animation is encoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundAnimation {
    pub unk2: u8,
    pub unk3: u8,
    #[serde(rename = "sounds")]
    entries: Vec<SoundEntry>,
}

impl SoundAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the end of the playback order.
    pub fn push(&mut self, entry: SoundEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> Iter<'_, SoundEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SoundEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the encoded animation in bytes.
    pub fn encoded_size(&self) -> usize {
        HEADER_SIZE + ENTRY_SIZE * self.entries.len()
    }
}

impl<'a> IntoIterator for &'a SoundAnimation {
    type Item = &'a SoundEntry;
    type IntoIter = Iter<'a, SoundEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<SoundEntry> for SoundAnimation {
    fn from_iter<I: IntoIterator<Item = SoundEntry>>(iter: I) -> Self {
        Self {
            unk2: 0,
            unk3: 0,
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<SoundEntry> for SoundAnimation {
    fn extend<I: IntoIterator<Item = SoundEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// JSON form of the entry floats.
///
/// Finite values are plain numbers. JSON has no literal for the others, so
/// they are written as strings: `"Infinity"`, `"-Infinity"`, `"NaN"` for the
/// default quiet NaN, and `"NaN:0x7fc00001"`-style tokens carrying the raw
/// bits of any other NaN.
mod json_f32 {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::{Deserialize, Serializer};

    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";
    const NAN: &str = "NaN";
    const NAN_BITS_PREFIX: &str = "NaN:0x";

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f32(*value)
        } else if value.is_nan() {
            if value.to_bits() == f32::NAN.to_bits() {
                serializer.serialize_str(NAN)
            } else {
                serializer.serialize_str(&format!("{}{:08x}", NAN_BITS_PREFIX, value.to_bits()))
            }
        } else if value.is_sign_positive() {
            serializer.serialize_str(INFINITY)
        } else {
            serializer.serialize_str(NEG_INFINITY)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f32),
        Token(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        let token = match Repr::deserialize(deserializer)? {
            Repr::Number(value) => return Ok(value),
            Repr::Token(token) => token,
        };
        match token.as_str() {
            INFINITY => Ok(f32::INFINITY),
            NEG_INFINITY => Ok(f32::NEG_INFINITY),
            NAN => Ok(f32::NAN),
            other => other
                .strip_prefix(NAN_BITS_PREFIX)
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .map(f32::from_bits)
                .filter(|value| value.is_nan())
                .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(other), &"a number, Infinity, -Infinity or NaN")),
        }
    }
}
