use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{gym, init_records_with_data, read_year_file, setup_records_dir};

#[test]
fn test_init_creates_records_dir() {
    let dir = setup_records_dir("init_creates_dir");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Records dir"))
        .stdout(contains("🎉 gymlog initialization completed!"));

    assert!(Path::new(&dir).is_dir());
}

#[test]
fn test_add_writes_canonical_year_file() {
    let dir = setup_records_dir("add_canonical_file");
    init_records_with_data(&dir);

    // newest first, with a divider where the month changes
    let expected = "7월 3일\n천국의계단 75층\n\n---\n\n6월 18일\n벤치프레스 60kg 10 x 4\n걷기 30분";
    assert_eq!(read_year_file(&dir, 2025), expected);
}

#[test]
fn test_add_reports_exercise_count() {
    let dir = setup_records_dir("add_reports_count");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2025-06-18",
            "벤치프레스 60kg 10 x 4",
            "걷기 30분",
        ])
        .assert()
        .success()
        .stdout(contains("Added workout for 2025-06-18 (2 exercises)."));
}

#[test]
fn test_add_invalid_date() {
    let dir = setup_records_dir("add_invalid_date");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "18-06-2025",
            "걷기 30분",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 18-06-2025"));
}

#[test]
fn test_add_rejects_unparsable_exercise_line() {
    let dir = setup_records_dir("add_invalid_exercise");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2025-06-18",
            "그냥 메모",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid exercise line: 그냥 메모"));
}

#[test]
fn test_add_requires_at_least_one_exercise() {
    let dir = setup_records_dir("add_requires_exercise");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args(["--records-dir", &dir, "--test", "add", "2025-06-18"])
        .assert()
        .failure()
        .stderr(contains("Invalid exercise line"));
}

#[test]
fn test_list_filter_month() {
    let dir = setup_records_dir("list_month");
    init_records_with_data(&dir);

    gym()
        .args(["--records-dir", &dir, "--test", "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("6월 2025"))
        .stdout(contains("벤치프레스 60kg 10 x 4"))
        .stdout(contains("걷기 30분"))
        .stdout(contains("천국의계단").not());
}

#[test]
fn test_list_filter_year() {
    let dir = setup_records_dir("list_year");
    init_records_with_data(&dir);

    gym()
        .args(["--records-dir", &dir, "--test", "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("7월 2025"))
        .stdout(contains("6월 2025"))
        .stdout(contains("천국의계단 75층"))
        .stdout(contains("벤치프레스 60kg 10 x 4"));
}

#[test]
fn test_list_filter_day_range() {
    let dir = setup_records_dir("list_day_range");
    init_records_with_data(&dir);

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "list",
            "--period",
            "2025-07-01:2025-07-31",
        ])
        .assert()
        .success()
        .stdout(contains("천국의계단 75층"))
        .stdout(contains("벤치프레스").not());
}

#[test]
fn test_list_all_spans_years() {
    let dir = setup_records_dir("list_all_years");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2024-12-30",
            "걷기 30분",
        ])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2025-01-02",
            "천국의계단 75층",
        ])
        .assert()
        .success();

    gym()
        .args(["--records-dir", &dir, "--test", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("1월 2025"))
        .stdout(contains("12월 2024"))
        .stdout(contains("걷기 30분"))
        .stdout(contains("천국의계단 75층"));
}

#[test]
fn test_list_empty_day() {
    let dir = setup_records_dir("list_empty_day");
    init_records_with_data(&dir);

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "list",
            "--period",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("No workouts for 2025-01-01."));
}

#[test]
fn test_list_today_shows_relative_label() {
    let dir = setup_records_dir("list_today");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args(["--records-dir", &dir, "--test", "add", "today", "걷기 30분"])
        .assert()
        .success();

    gym()
        .args(["--records-dir", &dir, "--test", "list", "--today"])
        .assert()
        .success()
        .stdout(contains("오늘"))
        .stdout(contains("걷기 30분"));
}

#[test]
fn test_list_invalid_period() {
    let dir = setup_records_dir("list_invalid_period");
    init_records_with_data(&dir);

    gym()
        .args(["--records-dir", &dir, "--test", "list", "--period", "2025-6"])
        .assert()
        .failure()
        .stderr(contains("Invalid period format: 2025-6"));
}

#[test]
fn test_list_unreachable_records_dir() {
    // never initialized, so the directory does not exist and no cache
    // snapshot is available either
    let dir = setup_records_dir("list_unreachable");

    gym()
        .args(["--records-dir", &dir, "--test", "list", "--period", "2025-06"])
        .assert()
        .failure()
        .stderr(contains("Records directory unavailable"));
}

#[test]
fn test_add_copy_last() {
    let dir = setup_records_dir("add_copy_last");
    init_records_with_data(&dir);

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2025-07-10",
            "--copy-last",
        ])
        .assert()
        .success()
        .stdout(contains("Added workout for 2025-07-10 (1 exercises)."));

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "list",
            "--period",
            "2025-07-10",
        ])
        .assert()
        .success()
        .stdout(contains("7월 10일"))
        .stdout(contains("천국의계단 75층"));
}

#[test]
fn test_add_copy_last_reaches_back_a_year() {
    let dir = setup_records_dir("copy_last_prev_year");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2024-12-30",
            "걷기 30분",
        ])
        .assert()
        .success();

    // 2025 has no file yet; the copy source lives in records_2024.txt
    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2025-01-05",
            "--copy-last",
        ])
        .assert()
        .success();

    assert_eq!(read_year_file(&dir, 2025), "1월 5일\n걷기 30분");
}

#[test]
fn test_add_copy_last_with_empty_history() {
    let dir = setup_records_dir("copy_last_empty");

    gym()
        .args(["--records-dir", &dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "add",
            "2025-01-05",
            "--copy-last",
        ])
        .assert()
        .failure()
        .stderr(contains("No workouts found to copy"));
}

#[test]
fn test_add_and_delete_workout() {
    let dir = setup_records_dir("delete_workout");
    init_records_with_data(&dir);

    // answer 'y' to the confirmation prompt
    gym()
        .args(["--records-dir", &dir, "--test", "del", "2025-06-18"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted 1 workout(s) for 2025-06-18."));

    gym()
        .args([
            "--records-dir",
            &dir,
            "--test",
            "list",
            "--period",
            "2025-06-18",
        ])
        .assert()
        .success()
        .stdout(contains("No workouts for 2025-06-18."));

    // only the July record is left in the file
    assert_eq!(read_year_file(&dir, 2025), "7월 3일\n천국의계단 75층");
}

#[test]
fn test_delete_cancelled_leaves_file_untouched() {
    let dir = setup_records_dir("delete_cancelled");
    init_records_with_data(&dir);

    let before = read_year_file(&dir, 2025);

    gym()
        .args(["--records-dir", &dir, "--test", "del", "2025-06-18"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(read_year_file(&dir, 2025), before);
}

#[test]
fn test_delete_nonexistent_date() {
    let dir = setup_records_dir("delete_nonexistent");
    init_records_with_data(&dir);

    gym()
        .args(["--records-dir", &dir, "--test", "del", "2099-01-01"])
        .assert()
        .success()
        .stdout(contains("No workouts found for 2099-01-01."));
}

#[test]
fn test_journal_and_cache_live_in_records_dir_in_test_mode() {
    let dir = setup_records_dir("test_mode_files");
    init_records_with_data(&dir);

    let journal = Path::new(&dir).join("journal.log");
    let cache = Path::new(&dir).join("cache.json");

    assert!(journal.is_file());
    assert!(cache.is_file());

    let journal_text = fs::read_to_string(&journal).expect("read journal");
    assert!(journal_text.contains("create\trecords_2025.txt"));
    assert!(journal_text.contains("Update workout - 2025-06-18"));
}
