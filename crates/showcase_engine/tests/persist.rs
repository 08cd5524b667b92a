use std::fs;

use showcase_engine::{ensure_dir, write_export, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_dir() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("state").join("v1");
    assert!(!nested.exists());
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn rewrite_replaces_previous_content() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    let first = writer.write("savedJobs_v1.json", "[\"1\"]").unwrap();
    let second = writer.write("savedJobs_v1.json", "[]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[]");

    // Only the target remains; temp files were renamed away.
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn dir_that_is_a_file_fails_without_partial_output() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = write_export(&file_path, "jobs.csv", "1,\"a\",b,c,d,e");
    assert!(result.is_err());
    assert!(!temp.path().join("jobs.csv").exists());
}
