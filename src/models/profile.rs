use super::exercise::{ExerciseEntry, ExerciseKind};
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated view of one exercise name across the whole timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExerciseProfile {
    pub name: String,
    pub kind: ExerciseKind,
    pub count: u32,
    pub last_used: NaiveDate,
    pub last_weight_kg: Option<f64>,
    pub last_reps: Option<u32>,
    pub last_sets: Option<u32>,
    pub last_floors: Option<u32>,
    pub last_minutes: Option<u32>,
}

impl ExerciseProfile {
    pub fn new(name: impl Into<String>, kind: ExerciseKind, first_used: NaiveDate) -> Self {
        Self {
            name: name.into(),
            kind,
            count: 0,
            last_used: first_used,
            last_weight_kg: None,
            last_reps: None,
            last_sets: None,
            last_floors: None,
            last_minutes: None,
        }
    }

    /// Fold one occurrence into the profile. Callers must feed occurrences
    /// oldest first so the `last_*` fields end up at the latest values.
    pub fn observe(&mut self, entry: &ExerciseEntry, date: NaiveDate) {
        self.count += 1;
        if date >= self.last_used {
            self.last_used = date;
        }
        self.kind = entry.kind();

        match entry {
            ExerciseEntry::Weighted {
                weight_kg,
                reps,
                sets,
                ..
            } => {
                self.last_weight_kg = Some(*weight_kg);
                self.last_reps = Some(*reps);
                // an entry without a set count keeps the previous one
                if sets.is_some() {
                    self.last_sets = *sets;
                }
            }
            ExerciseEntry::FloorClimb { floors, .. } => {
                self.last_floors = Some(*floors);
            }
            ExerciseEntry::TimedCardio { minutes, .. } => {
                self.last_minutes = Some(*minutes);
            }
        }
    }
}
