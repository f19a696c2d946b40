#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gym() -> Command {
    cargo_bin_cmd!("gymlog")
}

/// Create a unique records directory path inside the system temp dir and
/// remove any leftover from an earlier run
pub fn setup_records_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymlog", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a records directory and add a small dataset useful for many tests
pub fn init_records_with_data(dir: &str) {
    // init (creates the directory, skips the real config file)
    gym()
        .args(["--records-dir", dir, "--test", "init"])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            dir,
            "--test",
            "add",
            "2025-06-18",
            "벤치프레스 60kg 10 x 4",
            "걷기 30분",
        ])
        .assert()
        .success();

    gym()
        .args([
            "--records-dir",
            dir,
            "--test",
            "add",
            "2025-07-03",
            "천국의계단 75층",
        ])
        .assert()
        .success();
}

/// The year file as written on disk, e.g. records_2025.txt
pub fn read_year_file(dir: &str, year: i32) -> String {
    let mut path = PathBuf::from(dir);
    path.push(format!("records_{}.txt", year));
    fs::read_to_string(&path).expect("read year file")
}
