//! JSON form of a sound animation.
//!
//! ```json
//! {
//!     "unk2": 0,
//!     "unk3": 0,
//!     "sounds": [
//!         {
//!             "sound": "SE_OJ_LV_STAR",
//!             "start_frame": 0.0,
//!             "unk8": 0.0,
//!             "pitch": 1.0,
//!             "flags": 0,
//!             "volume": 127,
//!             "pitch_factor": 0,
//!             "unk16": 0,
//!             "pan": 64,
//!             "volume_factor": 0,
//!             "unk19": 0
//!         }
//!     ]
//! }
//! ```
//!
//! Sounds are referenced by name; no ID resolution happens here. Every key
//! is required when loading.

use std::io::{self, Read, Write};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use super::types::error::{BasError, Result};
use super::types::models::SoundAnimation;

const INDENT: &[u8] = b"    ";

/// Converts an animation into a JSON tree.
pub fn to_value(animation: &SoundAnimation) -> Result<Value> {
    serde_json::to_value(animation).map_err(BasError::MalformedExchangeData)
}

/// Builds an animation from a JSON tree.
pub fn from_value(value: Value) -> Result<SoundAnimation> {
    serde_json::from_value(value).map_err(BasError::MalformedExchangeData)
}

/// Writes the animation as indented JSON.
pub fn write_json<W: Write>(animation: &SoundAnimation, writer: W) -> Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    animation
        .serialize(&mut serializer)
        .map_err(|e| BasError::Io(e.into()))
}

/// Reads an animation from JSON text.
pub fn read_json<R: Read>(reader: R) -> Result<SoundAnimation> {
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            BasError::Io(e.into())
        } else {
            BasError::MalformedExchangeData(e)
        }
    })
}

pub fn to_json_string(animation: &SoundAnimation) -> Result<String> {
    let mut out = Vec::new();
    write_json(animation, &mut out)?;
    String::from_utf8(out).map_err(|e| BasError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn from_json_str(text: &str) -> Result<SoundAnimation> {
    serde_json::from_str(text).map_err(BasError::MalformedExchangeData)
}
