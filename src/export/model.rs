// src/export/model.rs

use crate::models::exercise::ExerciseEntry;
use crate::models::workout::WorkoutRecord;
use serde::Serialize;

/// Flat row for export: one line per exercise, with the kind-specific
/// fields left empty where they do not apply.
#[derive(Serialize, Clone, Debug)]
pub struct ExerciseExport {
    pub date: String,
    pub label: String,
    pub exercise: String,
    pub kind: String,
    pub weight_kg: Option<f64>,
    pub reps: Option<u32>,
    pub sets: Option<u32>,
    pub floors: Option<u32>,
    pub minutes: Option<u32>,
}

/// Flatten records into export rows, keeping record and line order.
pub(crate) fn flatten_records(records: &[WorkoutRecord]) -> Vec<ExerciseExport> {
    let mut rows = Vec::new();

    for record in records {
        for entry in &record.exercises {
            let mut row = ExerciseExport {
                date: record.date_str(),
                label: record.label.clone(),
                exercise: entry.name().to_string(),
                kind: entry.kind().kind_as_str().to_string(),
                weight_kg: None,
                reps: None,
                sets: None,
                floors: None,
                minutes: None,
            };

            match entry {
                ExerciseEntry::Weighted {
                    weight_kg,
                    reps,
                    sets,
                    ..
                } => {
                    row.weight_kg = Some(*weight_kg);
                    row.reps = Some(*reps);
                    row.sets = *sets;
                }
                ExerciseEntry::FloorClimb { floors, .. } => row.floors = Some(*floors),
                ExerciseEntry::TimedCardio { minutes, .. } => row.minutes = Some(*minutes),
            }

            rows.push(row);
        }
    }

    rows
}
