use std::collections::BTreeMap;

pub mod loader;
pub mod models;
use models::*;

/// Immutable set of cleaned shot records. Built once per run and handed to
/// every model by reference.
#[derive(Debug, Clone, Default)]
pub struct ShotRecordStore {
    records: Vec<ShotRecord>,
}

impl ShotRecordStore {
    pub fn new(records: Vec<ShotRecord>) -> Self {
        ShotRecordStore { records }
    }

    pub fn records(&self) -> &[ShotRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Filters ──────────────────────────────────────────────────────────────

    /// All records for a player (case-insensitive, trimmed).
    pub fn for_player<'a>(&'a self, player: &str) -> impl Iterator<Item = &'a ShotRecord> + 'a {
        let key = normalize_name(player);
        self.records.iter().filter(move |r| r.is_player(&key))
    }

    /// Records for a player restricted to one shot type.
    pub fn for_player_shot<'a>(
        &'a self,
        player: &str,
        shot_type: ShotType,
    ) -> impl Iterator<Item = &'a ShotRecord> + 'a {
        self.for_player(player)
            .filter(move |r| r.shot_type == shot_type)
    }

    /// Distinct player names in first-seen order, as spelled in the data.
    pub fn players(&self) -> Vec<String> {
        let mut seen = Vec::<String>::new();
        let mut names = Vec::new();
        for r in &self.records {
            let key = normalize_name(&r.player_name);
            if !seen.contains(&key) {
                seen.push(key);
                names.push(r.player_name.trim().to_string());
            }
        }
        names
    }

    // ── Grouped queries ──────────────────────────────────────────────────────

    /// Total and blocked shot counts per pass count, ascending.
    pub fn block_counts_by_passes(&self) -> Vec<PassBlockCount> {
        let mut groups: BTreeMap<u32, (usize, usize)> = BTreeMap::new();
        for r in &self.records {
            let entry = groups.entry(r.passes_before_shot).or_default();
            entry.0 += 1;
            if r.blocked {
                entry.1 += 1;
            }
        }
        groups
            .into_iter()
            .map(|(passes, (total_shots, blocked_shots))| PassBlockCount {
                passes,
                total_shots,
                blocked_shots,
            })
            .collect()
    }

    /// Points scored per pass count, ascending.
    pub fn points_by_passes(&self) -> Vec<PassPoints> {
        let mut groups: BTreeMap<u32, u32> = BTreeMap::new();
        for r in &self.records {
            *groups.entry(r.passes_before_shot).or_default() += r.points();
        }
        groups
            .into_iter()
            .map(|(passes, points)| PassPoints { passes, points })
            .collect()
    }

    /// Hit/miss tallies per (player, block flag). Players appear in first-seen
    /// order, unblocked before blocked; only combinations with data are listed.
    pub fn hit_counts_by_player_block(&self) -> Vec<PlayerBlockTally> {
        let mut out = Vec::new();
        for player in self.players() {
            for blocked in [false, true] {
                let (hits, misses) = self
                    .for_player(&player)
                    .filter(|r| r.blocked == blocked)
                    .fold((0, 0), |(h, m), r| if r.hit { (h + 1, m) } else { (h, m + 1) });
                if hits + misses > 0 {
                    out.push(PlayerBlockTally {
                        player: player.clone(),
                        blocked,
                        hits,
                        misses,
                    });
                }
            }
        }
        out
    }
}

impl FromIterator<ShotRecord> for ShotRecordStore {
    fn from_iter<I: IntoIterator<Item = ShotRecord>>(iter: I) -> Self {
        ShotRecordStore::new(iter.into_iter().collect())
    }
}
