use serde::{Deserialize, Serialize};

/// The three line shapes a record file can hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Weighted,
    FloorClimb,
    TimedCardio,
}

impl ExerciseKind {
    pub fn kind_as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Weighted => "weighted",
            ExerciseKind::FloorClimb => "floor_climb",
            ExerciseKind::TimedCardio => "timed_cardio",
        }
    }
}

/// One exercise line inside a workout record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseEntry {
    /// "레그프레스 120kg 12 x 4" (sets may be absent: "... 12 x")
    Weighted {
        name: String,
        weight_kg: f64,
        reps: u32,
        #[serde(default)]
        sets: Option<u32>,
    },
    /// "천국의계단 75층"
    FloorClimb { name: String, floors: u32 },
    /// "걷기 10분"
    TimedCardio { name: String, minutes: u32 },
}

impl ExerciseEntry {
    pub fn name(&self) -> &str {
        match self {
            ExerciseEntry::Weighted { name, .. }
            | ExerciseEntry::FloorClimb { name, .. }
            | ExerciseEntry::TimedCardio { name, .. } => name,
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseEntry::Weighted { .. } => ExerciseKind::Weighted,
            ExerciseEntry::FloorClimb { .. } => ExerciseKind::FloorClimb,
            ExerciseEntry::TimedCardio { .. } => ExerciseKind::TimedCardio,
        }
    }
}
