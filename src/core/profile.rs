//! Exercise frequency database, rebuilt from the merged timeline.

use crate::models::profile::ExerciseProfile;
use crate::models::workout::WorkoutRecord;
use std::collections::HashMap;

/// Fold the whole timeline into per-exercise profiles, keyed by exact
/// name. Sorted most-frequent first; ties keep first-appearance order
/// (the sort is stable).
///
/// `timeline` is newest first, so the walk runs in reverse to feed each
/// profile its occurrences oldest first. That makes every `last_*` field
/// land on the value from the most recent workout.
pub fn build_profiles(timeline: &[WorkoutRecord]) -> Vec<ExerciseProfile> {
    let mut profiles: Vec<ExerciseProfile> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in timeline.iter().rev() {
        for entry in &record.exercises {
            let idx = match index.get(entry.name()) {
                Some(&i) => i,
                None => {
                    let i = profiles.len();
                    index.insert(entry.name().to_string(), i);
                    profiles.push(ExerciseProfile::new(entry.name(), entry.kind(), record.date));
                    i
                }
            };
            profiles[idx].observe(entry, record.date);
        }
    }

    profiles.sort_by(|a, b| b.count.cmp(&a.count));
    profiles
}
