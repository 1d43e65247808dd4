use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jaudio_bas::bas::{self, Endian, LookupPreset, SoundIdTable, DEFAULT_LOOKUP_DIR};

/// Convert JAudio sound animation (BAS) data to and from JSON
#[derive(Parser)]
#[command(name = "jaudio-bas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump BAS data to JSON file.
    Tojson {
        #[command(flatten)]
        common: CommonArgs,
        /// Path to BAS data.
        bas: PathBuf,
        /// Path to JSON file.
        json: PathBuf,
    },

    /// Pack JSON file as BAS data.
    Tobas {
        #[command(flatten)]
        common: CommonArgs,
        /// Path to JSON file.
        json: PathBuf,
        /// Path to BAS data.
        bas: PathBuf,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Data is little-endian.
    #[arg(short = 'l', long = "little-endian", alias = "little_endian")]
    little_endian: bool,

    /// Directory holding the preset lookup tables.
    #[arg(long, default_value = DEFAULT_LOOKUP_DIR)]
    lookup_dir: PathBuf,

    /// Preset name (smg1, smg2) or path to a sound lookup table.
    lookup: String,
}

impl CommonArgs {
    fn endian(&self) -> Endian {
        Endian::from_big_endian(!self.little_endian)
    }

    fn load_table(&self) -> Result<SoundIdTable> {
        let path = match LookupPreset::find(&self.lookup) {
            Some(preset) => preset.path(&self.lookup_dir),
            None => PathBuf::from(&self.lookup),
        };
        SoundIdTable::open(&path).with_context(|| format!("Failed to load lookup table {}", path.display()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tojson { common, bas, json } => dump(&common, &bas, &json),
        Commands::Tobas { common, json, bas } => pack(&common, &json, &bas),
    }
}

fn dump(common: &CommonArgs, bas_path: &Path, json_path: &Path) -> Result<()> {
    let table = common.load_table()?;
    let animation = bas::read_bas_file(bas_path, common.endian(), &table)
        .with_context(|| format!("Failed to decode {}", bas_path.display()))?;
    bas::dump_json_file(&animation, json_path)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    println!("Successfully dumped data to JSON file.");
    Ok(())
}

fn pack(common: &CommonArgs, json_path: &Path, bas_path: &Path) -> Result<()> {
    let table = common.load_table()?;
    let animation = bas::load_json_file(json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    bas::write_bas_file(&animation, bas_path, common.endian(), &table)
        .with_context(|| format!("Failed to pack {}", bas_path.display()))?;
    println!("Successfully packed BAS data.");
    Ok(())
}
