//! Merging year shards into one ordered timeline, plus the small edits
//! the CLI performs on a single shard before writing it back.

use crate::models::workout::WorkoutRecord;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Flatten all shards into one list sorted newest first. The sort is
/// stable, so same-date records keep their within-file order.
pub fn merge_shards(shards: &BTreeMap<i32, Vec<WorkoutRecord>>) -> Vec<WorkoutRecord> {
    let mut merged: Vec<WorkoutRecord> = shards.values().flatten().cloned().collect();
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged
}

/// Insert into a newest-first list, before existing same-date records.
pub fn insert_sorted(records: &mut Vec<WorkoutRecord>, workout: WorkoutRecord) {
    let at = records
        .iter()
        .position(|r| r.date <= workout.date)
        .unwrap_or(records.len());
    records.insert(at, workout);
}

/// Drop every record on the given date. Returns how many were removed.
pub fn remove_date(records: &mut Vec<WorkoutRecord>, date: chrono::NaiveDate) -> usize {
    let before = records.len();
    records.retain(|r| r.date != date);
    before - records.len()
}

/// Split a flat record list back into per-year shards.
pub fn shard_by_year(records: Vec<WorkoutRecord>) -> BTreeMap<i32, Vec<WorkoutRecord>> {
    let mut shards: BTreeMap<i32, Vec<WorkoutRecord>> = BTreeMap::new();
    for record in records {
        shards.entry(record.date.year()).or_default().push(record);
    }
    shards
}

/// Group a timeline into (year, month) sections, preserving record order
/// within each section. Used by the list view for its month headings.
pub fn group_by_month<'a, I>(records: I) -> Vec<((i32, u32), Vec<&'a WorkoutRecord>)>
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let mut groups: Vec<((i32, u32), Vec<&'a WorkoutRecord>)> = Vec::new();

    for record in records {
        let key = (record.date.year(), record.date.month());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, list)) => list.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    groups
}
