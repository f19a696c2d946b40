//! Record-file parser.
//!
//! A year file is a sequence of dated records:
//!
//! ```text
//! 7월 3일
//! 레그프레스 120kg 12 x 4
//! 천국의계단 75층
//!
//! 7월 1일
//! 걷기 30분
//! ```
//!
//! Parsing is tolerant by design: the files are hand-edited, so lines that
//! match no known shape are dropped without failing the whole file, and a
//! date line that ends up with no valid exercises yields no record at all.

use crate::models::exercise::ExerciseEntry;
use crate::models::workout::WorkoutRecord;
use crate::utils::date;
use regex::Regex;
use std::sync::LazyLock;

// Tried in order; the first match wins. Weighted goes last because its
// shape is the loosest.
static FLOOR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d+)층$").unwrap());
static CARDIO_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d+)분$").unwrap());
static WEIGHTED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d+(?:\.\d+)?)kg\s+(\d+)\s*x?\s*(\d*)$").unwrap());

/// Parse one exercise line. None means the line matches no known shape
/// and should be dropped.
pub fn parse_exercise_line(line: &str) -> Option<ExerciseEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = FLOOR_LINE.captures(line)
        && let Ok(floors) = caps[2].parse()
    {
        return Some(ExerciseEntry::FloorClimb {
            name: caps[1].trim().to_string(),
            floors,
        });
    }

    if let Some(caps) = CARDIO_LINE.captures(line)
        && let Ok(minutes) = caps[2].parse()
    {
        return Some(ExerciseEntry::TimedCardio {
            name: caps[1].trim().to_string(),
            minutes,
        });
    }

    if let Some(caps) = WEIGHTED_LINE.captures(line)
        && let Ok(weight_kg) = caps[2].parse()
        && let Ok(reps) = caps[3].parse()
    {
        let sets = if caps[4].is_empty() {
            None
        } else {
            match caps[4].parse() {
                Ok(s) => Some(s),
                Err(_) => return None,
            }
        };
        return Some(ExerciseEntry::Weighted {
            name: caps[1].trim().to_string(),
            weight_kg,
            reps,
            sets,
        });
    }

    None
}

/// Parse a whole year file. `year` resolves the month/day labels into
/// real dates. Records come back in file order.
pub fn parse_file(text: &str, year: i32) -> Vec<WorkoutRecord> {
    let mut records = Vec::new();
    let mut current: Option<WorkoutRecord> = None;

    for raw in text.lines() {
        let line = raw.trim();

        // blank lines and section dividers carry no data
        if line.is_empty() || line == "---" {
            continue;
        }

        if date::is_korean_label(line) {
            flush(&mut records, current.take());
            // a label naming no real date ("2월 30일") closes the previous
            // record but opens none; its following lines are skipped too
            current = date::parse_korean_label(line, year)
                .map(|d| WorkoutRecord::with_label(d, line, Vec::new()));
            continue;
        }

        if let Some(rec) = current.as_mut()
            && let Some(entry) = parse_exercise_line(line)
        {
            rec.exercises.push(entry);
        }
    }

    flush(&mut records, current.take());
    records
}

/// Keep a finished record only when it holds at least one exercise.
fn flush(records: &mut Vec<WorkoutRecord>, current: Option<WorkoutRecord>) {
    if let Some(rec) = current
        && !rec.exercises.is_empty()
    {
        records.push(rec);
    }
}
