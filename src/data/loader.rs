//! CSV ingestion for recorded shots.
//!
//! Expected layout is the scouting sheet export: `;`-separated, one shot per
//! row, with (at least) the columns `player_name`, `shot_type`, `block`,
//! `passes` and `hit`. Header names are matched case-insensitively after
//! trimming; other columns (`id`, `points`, ...) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use super::models::{ShotRecord, ShotType};
use super::ShotRecordStore;
use crate::error::LoadError;

const COL_PLAYER: &str = "player_name";
const COL_SHOT_TYPE: &str = "shot_type";
const COL_BLOCK: &str = "block";
const COL_PASSES: &str = "passes";
const COL_HIT: &str = "hit";

/// Load a store from a CSV file on disk.
pub fn load_store_from_path(path: impl AsRef<Path>) -> Result<ShotRecordStore, LoadError> {
    let file = File::open(path.as_ref())?;
    let records = load_records(file)?;
    debug!("Loaded {} shot record(s) from {}", records.len(), path.as_ref().display());
    Ok(ShotRecordStore::new(records))
}

/// Parse shot records from any reader.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<ShotRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let player_idx = column(COL_PLAYER)?;
    let shot_idx = column(COL_SHOT_TYPE)?;
    let block_idx = column(COL_BLOCK)?;
    let passes_idx = column(COL_PASSES)?;
    let hit_idx = column(COL_HIT)?;

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let line = i + 1;
        if row.iter().all(|f| f.is_empty()) {
            continue;
        }

        let player_name = field(&row, player_idx);
        if player_name.is_empty() {
            return Err(invalid(line, COL_PLAYER, player_name));
        }
        let raw_shot = field(&row, shot_idx);
        let shot_type =
            ShotType::from_label(raw_shot).ok_or_else(|| invalid(line, COL_SHOT_TYPE, raw_shot))?;
        let raw_block = field(&row, block_idx);
        let blocked = parse_flag(raw_block).ok_or_else(|| invalid(line, COL_BLOCK, raw_block))?;
        let raw_passes = field(&row, passes_idx);
        let passes_before_shot: u32 = raw_passes
            .parse()
            .map_err(|_| invalid(line, COL_PASSES, raw_passes))?;
        let raw_hit = field(&row, hit_idx);
        let hit = parse_flag(raw_hit).ok_or_else(|| invalid(line, COL_HIT, raw_hit))?;

        out.push(ShotRecord::new(
            player_name,
            shot_type,
            blocked,
            passes_before_shot,
            hit,
        ));
    }
    Ok(out)
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

fn invalid(line: usize, field: &'static str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        line,
        field,
        value: value.to_string(),
    }
}

/// Yes/no flag as recorded by the scouting sheet ("Ja"/"Nein") or in plain
/// English / numeric form.
fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "ja" | "yes" | "true" | "1" => Some(true),
        "nein" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
