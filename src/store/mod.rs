//! In-memory aggregation store.
//!
//! Records live in per-year shards. Loading a shard replaces it wholesale
//! and rebuilds the two derived views: the merged timeline (all years,
//! newest first) and the exercise profiles. The derived views are never
//! edited directly; shard loads are the only mutation point.

pub mod cache;
pub mod gateway;
pub mod local;

use crate::core::{profile, timeline};
use crate::models::profile::ExerciseProfile;
use crate::models::workout::WorkoutRecord;
use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};

/// Notification sent to subscribers after a shard load.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    YearLoaded { year: i32, records: usize },
}

#[derive(Default)]
pub struct WorkoutStore {
    shards: BTreeMap<i32, Vec<WorkoutRecord>>,
    merged: Vec<WorkoutRecord>,
    profiles: Vec<ExerciseProfile>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one year's records and rebuild the derived views.
    pub fn load_year(&mut self, year: i32, records: Vec<WorkoutRecord>) {
        let count = records.len();
        self.shards.insert(year, records);
        self.merged = timeline::merge_shards(&self.shards);
        self.profiles = profile::build_profiles(&self.merged);
        self.emit(StoreEvent::YearLoaded {
            year,
            records: count,
        });
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.shards.contains_key(&year)
    }

    /// One year's records in file order. Empty for unloaded years.
    pub fn year(&self, year: i32) -> &[WorkoutRecord] {
        self.shards.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn loaded_years(&self) -> Vec<i32> {
        self.shards.keys().copied().collect()
    }

    /// All loaded records, newest first.
    pub fn merged(&self) -> &[WorkoutRecord] {
        &self.merged
    }

    /// Exercise frequency database, most frequent first.
    pub fn profiles(&self) -> &[ExerciseProfile] {
        &self.profiles
    }

    pub fn profile(&self, name: &str) -> Option<&ExerciseProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// The most recent workout across all loaded years.
    pub fn latest(&self) -> Option<&WorkoutRecord> {
        self.merged.first()
    }

    /// Register a listener for store events. Senders whose receiver is
    /// gone are pruned on the next emit.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
