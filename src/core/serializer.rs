//! Canonical rendering of records back into the file format.
//!
//! serialize_file is the structural inverse of the parser: parsing its
//! output yields the same records again. Whole weights print without the
//! decimal point (100.0 → "100kg") so rewritten files stay byte-stable.

use crate::models::exercise::ExerciseEntry;
use crate::models::workout::WorkoutRecord;

/// One exercise as a file line. Also the display form used by the CLI.
pub fn serialize_exercise(entry: &ExerciseEntry) -> String {
    match entry {
        ExerciseEntry::Weighted {
            name,
            weight_kg,
            reps,
            sets: Some(sets),
        } => format!("{} {}kg {} x {}", name, weight_kg, reps, sets),
        ExerciseEntry::Weighted {
            name,
            weight_kg,
            reps,
            sets: None,
        } => format!("{} {}kg {} x", name, weight_kg, reps),
        ExerciseEntry::FloorClimb { name, floors } => format!("{} {}층", name, floors),
        ExerciseEntry::TimedCardio { name, minutes } => format!("{} {}분", name, minutes),
    }
}

/// Label line followed by one line per exercise.
pub fn serialize_workout(record: &WorkoutRecord) -> String {
    let mut lines = Vec::with_capacity(record.exercises.len() + 1);
    lines.push(record.label.clone());
    for entry in &record.exercises {
        lines.push(serialize_exercise(entry));
    }
    lines.join("\n")
}

/// Render a full year file. Records are joined by a blank line, with a
/// "---" divider wherever the label month changes between neighbours.
/// The divider is cosmetic; the parser never needs it.
pub fn serialize_file(records: &[WorkoutRecord]) -> String {
    let mut sections = Vec::new();

    for (i, record) in records.iter().enumerate() {
        sections.push(serialize_workout(record));

        if let Some(next) = records.get(i + 1)
            && record.month_token() != next.month_token()
        {
            sections.push("---".to_string());
        }
    }

    sections.join("\n\n")
}
