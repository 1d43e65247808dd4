//! Sound ID lookup tables.
//!
//! Sounds are stored in BAS data as numeric IDs. A lookup table labels these
//! IDs with their sound names. Tables are plain text, one `name,id` pair per
//! line, encoded as Latin-1.
//!
//! Forward lookup (name to ID) uses the last line carrying a name, while
//! reverse lookup (ID to name) returns the first line carrying the ID. Both
//! behaviours are relied upon by existing JSON dumps and are kept distinct.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use encoding_rs::mem::decode_latin1;
use log::{debug, info};

use super::error::{BasError, LookupKey, Result};

/// Directory searched for preset lookup tables when none is given.
pub const DEFAULT_LOOKUP_DIR: &str = "lookup";

/// Anything that can translate between sound IDs and sound names.
///
/// The codecs only need these two lookups, so callers holding their sound
/// labels elsewhere (a game's own sound table, a generated name scheme) can
/// plug them in without building a [`SoundIdTable`].
pub trait IdResolver {
    /// Returns the sound name for `id`.
    fn resolve_name(&self, id: u32) -> Result<&str>;

    /// Returns the sound ID for `name`.
    fn resolve_id(&self, name: &str) -> Result<u32>;
}

/// A known lookup table shipped for a specific game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupPreset {
    /// Short name accepted on the command line.
    pub name: &'static str,
    /// File name of the table inside the lookup directory.
    pub file_name: &'static str,
}

/// Super Mario Galaxy.
pub const SMG1_LOOKUP: LookupPreset = LookupPreset {
    name: "smg1",
    file_name: "lookup_supermariogalaxy1.txt",
};

/// Super Mario Galaxy 2.
pub const SMG2_LOOKUP: LookupPreset = LookupPreset {
    name: "smg2",
    file_name: "lookup_supermariogalaxy2.txt",
};

pub const LOOKUP_PRESETS: &[LookupPreset] = &[SMG1_LOOKUP, SMG2_LOOKUP];

impl LookupPreset {
    pub fn find(name: &str) -> Option<&'static LookupPreset> {
        LOOKUP_PRESETS.iter().find(|preset| preset.name == name)
    }

    /// Location of this preset's table inside `dir`.
    pub fn path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.file_name)
    }
}

/// A sound lookup table built from `name,id` lines.
#[derive(Debug, Clone, Default)]
pub struct SoundIdTable {
    /// Every pair in source order, duplicates included.
    entries: Vec<(String, u32)>,
    /// Name to ID, later lines overwriting earlier ones.
    ids_by_name: HashMap<String, u32>,
}

impl SoundIdTable {
    /// Loads a lookup table from a file.
    ///
    /// # Errors
    /// - [`BasError::SourceUnavailable`] if the file cannot be read
    /// - [`BasError::MalformedSource`] if a line is not a `name,id` pair
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sound lookup table: {}", path.display());
        let bytes = fs::read(path).map_err(|source| BasError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_bytes(&bytes)?;
        info!("Lookup table loaded: {} names", table.len());
        Ok(table)
    }

    /// Loads a preset table from `dir`.
    pub fn from_preset(preset: &LookupPreset, dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(preset.path(dir))
    }

    /// Builds a table from raw Latin-1 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = decode_latin1(bytes);
        Self::parse(&text)
    }

    /// Builds a table from already decoded text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::default();
        for (index, line) in text.lines().enumerate() {
            let (name, id) = parse_line(line, index + 1)?;
            table.insert(name, id);
        }
        debug!("Parsed {} lookup lines ({} distinct names)", table.entries.len(), table.ids_by_name.len());
        Ok(table)
    }

    fn insert(&mut self, name: &str, id: u32) {
        self.ids_by_name.insert(name.to_owned(), id);
        self.entries.push((name.to_owned(), id));
    }

    /// Number of distinct sound names.
    ///
    /// Lines repeating a name count once, although every line still takes
    /// part in reverse lookup.
    pub fn len(&self) -> usize {
        self.ids_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_by_name.is_empty()
    }
}

impl IdResolver for SoundIdTable {
    fn resolve_name(&self, id: u32) -> Result<&str> {
        self.entries
            .iter()
            .find(|(_, entry_id)| *entry_id == id)
            .map(|(name, _)| name.as_str())
            .ok_or(BasError::LookupNotFound {
                key: LookupKey::Id(id),
                entry: None,
            })
    }

    fn resolve_id(&self, name: &str) -> Result<u32> {
        self.ids_by_name
            .get(name)
            .copied()
            .ok_or_else(|| BasError::LookupNotFound {
                key: LookupKey::Name(name.to_owned()),
                entry: None,
            })
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<(&str, u32)> {
    let line = line.trim_matches(|c| c == '\r' || c == '\n');
    let mut fields = line.split(',');
    let (name, id) = match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(id), None) => (name, id),
        _ => {
            return Err(BasError::MalformedSource {
                line: line_number,
                reason: format!("expected \"name,id\", got {:?}", line),
            })
        }
    };
    let id = id.trim().parse::<u32>().map_err(|e| BasError::MalformedSource {
        line: line_number,
        reason: format!("invalid sound ID {:?}: {}", id, e),
    })?;
    Ok((name, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_lookup_takes_last_line_reverse_takes_first() {
        let table = SoundIdTable::parse("a,5\nb,5\na,9\n").unwrap();
        assert_eq!(table.resolve_id("a").unwrap(), 9);
        assert_eq!(table.resolve_id("b").unwrap(), 5);
        assert_eq!(table.resolve_name(5).unwrap(), "a");
        assert_eq!(table.resolve_name(9).unwrap(), "a");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn crlf_lines_are_accepted() {
        let table = SoundIdTable::parse("SE_OJ_A,1\r\nSE_OJ_B,2\r\n").unwrap();
        assert_eq!(table.resolve_id("SE_OJ_B").unwrap(), 2);
        assert_eq!(table.resolve_name(1).unwrap(), "SE_OJ_A");
    }

    #[test]
    fn latin1_names_are_decoded() {
        let table = SoundIdTable::from_bytes(b"caf\xe9,3\n").unwrap();
        assert_eq!(table.resolve_id("café").unwrap(), 3);
    }

    #[test]
    fn c1_control_bytes_map_to_same_code_points() {
        let table = SoundIdTable::from_bytes(b"SE_\x80,1\nSE_\x9f,2\n").unwrap();
        assert_eq!(table.resolve_name(1).unwrap(), "SE_\u{80}");
        assert_eq!(table.resolve_id("SE_\u{9f}").unwrap(), 2);
        assert!(table.resolve_id("SE_\u{20ac}").is_err());
    }

    #[test]
    fn len_counts_distinct_names() {
        let table = SoundIdTable::parse("a,1\na,2\nb,3\n").unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(SoundIdTable::parse("").unwrap().is_empty());
    }

    #[test]
    fn malformed_lines_report_line_number() {
        for text in ["a,1\nb\n", "a,1\nb,2,3\n", "a,1\nb,-2\n", "a,1\nb,x\n", "a,1\n\nb,2\n"] {
            match SoundIdTable::parse(text) {
                Err(BasError::MalformedSource { line, .. }) => assert_eq!(line, 2, "{:?}", text),
                other => panic!("expected MalformedSource for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn missing_keys_fail() {
        let table = SoundIdTable::parse("a,1\n").unwrap();
        assert!(matches!(
            table.resolve_name(2),
            Err(BasError::LookupNotFound { key: LookupKey::Id(2), entry: None })
        ));
        assert!(matches!(
            table.resolve_id("b"),
            Err(BasError::LookupNotFound { key: LookupKey::Name(ref n), .. }) if n == "b"
        ));
    }

    #[test]
    fn presets_are_found_by_name() {
        assert_eq!(LookupPreset::find("smg2"), Some(&SMG2_LOOKUP));
        assert_eq!(LookupPreset::find("smg3"), None);
        assert_eq!(
            SMG1_LOOKUP.path("tables"),
            Path::new("tables").join("lookup_supermariogalaxy1.txt")
        );
    }
}
