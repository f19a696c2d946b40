use super::exercise::ExerciseEntry;
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated workout session, as parsed from a year file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    pub date: NaiveDate,               // resolved from the label plus the file's year
    pub label: String,                 // verbatim date line, e.g. "7월 3일"
    pub exercises: Vec<ExerciseEntry>, // file order, never empty once stored
}

impl WorkoutRecord {
    /// Constructor for records created by the CLI.
    /// - Renders `label` from the date in the file's "M월 D일" form
    pub fn new(date: NaiveDate, exercises: Vec<ExerciseEntry>) -> Self {
        Self {
            date,
            label: date::korean_label(date),
            exercises,
        }
    }

    /// Constructor for records read back from a file, keeping the label verbatim.
    pub fn with_label(date: NaiveDate, label: impl Into<String>, exercises: Vec<ExerciseEntry>) -> Self {
        Self {
            date,
            label: label.into(),
            exercises,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Leading month number of the label ("12월 31일" → 12).
    /// None when the label has been hand-edited into something unrecognizable.
    pub fn month_token(&self) -> Option<u32> {
        let digits: String = self
            .label
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Same exercises on a new date, with a freshly rendered label.
    pub fn redated(&self, date: NaiveDate) -> Self {
        Self::new(date, self.exercises.clone())
    }
}
