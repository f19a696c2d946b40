use chrono::NaiveDate;
use gymlog::core::parser::{parse_exercise_line, parse_file};
use gymlog::core::serializer::{serialize_exercise, serialize_file};
use gymlog::models::exercise::ExerciseEntry;
use gymlog::models::workout::WorkoutRecord;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_parse_weighted_line() {
    assert_eq!(
        parse_exercise_line("벤치프레스 60kg 10 x 4"),
        Some(ExerciseEntry::Weighted {
            name: "벤치프레스".to_string(),
            weight_kg: 60.0,
            reps: 10,
            sets: Some(4),
        })
    );
}

#[test]
fn test_parse_weighted_line_fractional_weight() {
    assert_eq!(
        parse_exercise_line("덤벨프레스 62.5kg 8 x 3"),
        Some(ExerciseEntry::Weighted {
            name: "덤벨프레스".to_string(),
            weight_kg: 62.5,
            reps: 8,
            sets: Some(3),
        })
    );
}

#[test]
fn test_parse_weighted_line_without_set_count() {
    // both "10 x" and a bare "10" leave the set count unknown
    for line in ["벤치프레스 60kg 10 x", "벤치프레스 60kg 10"] {
        assert_eq!(
            parse_exercise_line(line),
            Some(ExerciseEntry::Weighted {
                name: "벤치프레스".to_string(),
                weight_kg: 60.0,
                reps: 10,
                sets: None,
            })
        );
    }
}

#[test]
fn test_parse_weighted_line_multiword_name() {
    assert_eq!(
        parse_exercise_line("숄더 프레스 40kg 10 x 4"),
        Some(ExerciseEntry::Weighted {
            name: "숄더 프레스".to_string(),
            weight_kg: 40.0,
            reps: 10,
            sets: Some(4),
        })
    );
}

#[test]
fn test_parse_floor_and_cardio_lines() {
    assert_eq!(
        parse_exercise_line("천국의계단 75층"),
        Some(ExerciseEntry::FloorClimb {
            name: "천국의계단".to_string(),
            floors: 75,
        })
    );
    assert_eq!(
        parse_exercise_line("걷기 30분"),
        Some(ExerciseEntry::TimedCardio {
            name: "걷기".to_string(),
            minutes: 30,
        })
    );
}

#[test]
fn test_parse_line_pattern_priority() {
    // the floor pattern is tried before the weighted one, so a trailing
    // 층 wins even when the line carries a kg token
    assert_eq!(
        parse_exercise_line("중량조끼 10kg 20층"),
        Some(ExerciseEntry::FloorClimb {
            name: "중량조끼 10kg".to_string(),
            floors: 20,
        })
    );
    // likewise a trailing 분 never parses as reps
    assert_eq!(
        parse_exercise_line("버피 10분"),
        Some(ExerciseEntry::TimedCardio {
            name: "버피".to_string(),
            minutes: 10,
        })
    );
}

#[test]
fn test_parse_line_tolerates_extra_whitespace() {
    assert_eq!(
        parse_exercise_line("  벤치프레스   60kg   10  x  4  "),
        Some(ExerciseEntry::Weighted {
            name: "벤치프레스".to_string(),
            weight_kg: 60.0,
            reps: 10,
            sets: Some(4),
        })
    );
}

#[test]
fn test_parse_line_rejects_unknown_shapes() {
    assert_eq!(parse_exercise_line(""), None);
    assert_eq!(parse_exercise_line("그냥 메모"), None);
    assert_eq!(parse_exercise_line("60kg 10 x 4"), None); // no name
    assert_eq!(parse_exercise_line("계단오르기 30분 빠르게"), None); // trailing text
}

#[test]
fn test_parse_file_resolves_dates_in_file_order() {
    let text = "7월 3일\n천국의계단 75층\n\n---\n\n6월 18일\n벤치프레스 60kg 10 x 4\n걷기 30분";
    let records = parse_file(text, 2025);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, date(2025, 7, 3));
    assert_eq!(records[0].label, "7월 3일");
    assert_eq!(records[0].exercises.len(), 1);
    assert_eq!(records[1].date, date(2025, 6, 18));
    assert_eq!(records[1].exercises.len(), 2);
}

#[test]
fn test_parse_file_drops_malformed_lines_silently() {
    let text = "6월 18일\n벤치프레스 60kg 10 x 4\n오늘은 힘들었다\n걷기 30분";
    let records = parse_file(text, 2025);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercises.len(), 2);
}

#[test]
fn test_parse_file_discards_record_with_no_valid_exercises() {
    let text = "6월 18일\n메모만 있는 날\n\n6월 20일\n걷기 30분";
    let records = parse_file(text, 2025);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, date(2025, 6, 20));
}

#[test]
fn test_parse_file_invalid_calendar_label_opens_no_record() {
    // "2월 30일" is shaped like a label but names no real date, so it
    // closes the previous record and swallows its own lines
    let text = "2월 28일\n걷기 30분\n\n2월 30일\n벤치프레스 60kg 10 x 4";
    let records = parse_file(text, 2025);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, date(2025, 2, 28));
    assert_eq!(records[0].exercises.len(), 1);
}

#[test]
fn test_parse_file_skips_exercises_before_first_label() {
    let text = "걷기 30분\n\n6월 18일\n벤치프레스 60kg 10 x 4";
    let records = parse_file(text, 2025);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercises.len(), 1);
}

#[test]
fn test_parse_file_empty_input() {
    assert!(parse_file("", 2025).is_empty());
    assert!(parse_file("\n\n---\n\n", 2025).is_empty());
}

#[test]
fn test_serialize_exercise_forms() {
    let with_sets = ExerciseEntry::Weighted {
        name: "벤치프레스".to_string(),
        weight_kg: 60.0,
        reps: 10,
        sets: Some(4),
    };
    let without_sets = ExerciseEntry::Weighted {
        name: "벤치프레스".to_string(),
        weight_kg: 60.0,
        reps: 10,
        sets: None,
    };

    assert_eq!(serialize_exercise(&with_sets), "벤치프레스 60kg 10 x 4");
    assert_eq!(serialize_exercise(&without_sets), "벤치프레스 60kg 10 x");
}

#[test]
fn test_serialize_exercise_trims_whole_weights() {
    let squat = ExerciseEntry::Weighted {
        name: "스쿼트".to_string(),
        weight_kg: 100.0,
        reps: 5,
        sets: Some(5),
    };
    let dumbbell = ExerciseEntry::Weighted {
        name: "덤벨프레스".to_string(),
        weight_kg: 22.5,
        reps: 12,
        sets: Some(3),
    };

    assert_eq!(serialize_exercise(&squat), "스쿼트 100kg 5 x 5");
    assert_eq!(serialize_exercise(&dumbbell), "덤벨프레스 22.5kg 12 x 3");
}

#[test]
fn test_serialize_file_divider_on_month_change() {
    let records = vec![
        WorkoutRecord::new(
            date(2025, 7, 3),
            vec![ExerciseEntry::FloorClimb {
                name: "천국의계단".to_string(),
                floors: 75,
            }],
        ),
        WorkoutRecord::new(
            date(2025, 6, 18),
            vec![ExerciseEntry::TimedCardio {
                name: "걷기".to_string(),
                minutes: 30,
            }],
        ),
    ];

    assert_eq!(
        serialize_file(&records),
        "7월 3일\n천국의계단 75층\n\n---\n\n6월 18일\n걷기 30분"
    );
}

#[test]
fn test_serialize_file_no_divider_within_month() {
    let records = vec![
        WorkoutRecord::new(
            date(2025, 6, 20),
            vec![ExerciseEntry::TimedCardio {
                name: "걷기".to_string(),
                minutes: 30,
            }],
        ),
        WorkoutRecord::new(
            date(2025, 6, 18),
            vec![ExerciseEntry::FloorClimb {
                name: "천국의계단".to_string(),
                floors: 75,
            }],
        ),
    ];

    let text = serialize_file(&records);
    assert!(!text.contains("---"));
    assert_eq!(text, "6월 20일\n걷기 30분\n\n6월 18일\n천국의계단 75층");
}

#[test]
fn test_round_trip_preserves_records() {
    let records = vec![
        WorkoutRecord::new(
            date(2025, 7, 3),
            vec![
                ExerciseEntry::Weighted {
                    name: "벤치프레스".to_string(),
                    weight_kg: 62.5,
                    reps: 8,
                    sets: Some(3),
                },
                ExerciseEntry::Weighted {
                    name: "레그프레스".to_string(),
                    weight_kg: 120.0,
                    reps: 12,
                    sets: None,
                },
            ],
        ),
        WorkoutRecord::new(
            date(2025, 6, 18),
            vec![
                ExerciseEntry::FloorClimb {
                    name: "천국의계단".to_string(),
                    floors: 75,
                },
                ExerciseEntry::TimedCardio {
                    name: "걷기".to_string(),
                    minutes: 30,
                },
            ],
        ),
    ];

    let text = serialize_file(&records);
    assert_eq!(parse_file(&text, 2025), records);
}

#[test]
fn test_round_trip_is_stable_for_messy_input() {
    // second pass over already-canonical text must be the identity
    let messy = "6월 1일\n벤치프레스  60kg  10  x  4\n뭔가 이상한 줄\n\n6월 3일\n\n6월 2일\n걷기 30분";
    let canonical = serialize_file(&parse_file(messy, 2025));

    assert_eq!(canonical, "6월 1일\n벤치프레스 60kg 10 x 4\n\n6월 2일\n걷기 30분");
    assert_eq!(serialize_file(&parse_file(&canonical, 2025)), canonical);
}
