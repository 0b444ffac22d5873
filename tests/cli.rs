use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn report_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            let name = path.file_name().unwrap().to_string_lossy();
            name.starts_with("file_explorer_") && name.ends_with(".txt")
        })
        .collect()
}

#[test]
fn writes_report_for_given_root() {
    let tree = tempdir().unwrap();
    fs::write(tree.path().join("a.txt"), "hello").unwrap();
    let cwd = tempdir().unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("file-explorer").unwrap();
    cmd.current_dir(cwd.path()).arg(tree.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("の探索を開始します..."))
        .stdout(predicate::str::contains("探索が完了しました。"));

    let reports = report_files(cwd.path());
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.starts_with("ファイル探索レポート\n"));
    assert!(report.contains("ファイル名: a.txt\n"));
    assert!(report.contains("ファイル内容:\nhello\n"));
}

#[test]
fn defaults_to_current_directory() {
    let cwd = tempdir().unwrap();
    fs::write(cwd.path().join("here.txt"), "here").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("file-explorer").unwrap();
    cmd.current_dir(cwd.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ディレクトリ \".\" の探索を開始します..."));

    let reports = report_files(cwd.path());
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.contains("ファイル名: here.txt\n"));
}

#[test]
fn missing_root_still_succeeds() {
    let cwd = tempdir().unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("file-explorer").unwrap();
    cmd.current_dir(cwd.path()).arg("does-not-exist");
    cmd.assert().success();

    let reports = report_files(cwd.path());
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.contains("エラーが発生しました: "));
    assert!(!report.contains("ファイル名: "));
}

#[test]
fn accepts_root_starting_with_hyphen() {
    let cwd = tempdir().unwrap();
    fs::create_dir(cwd.path().join("-data")).unwrap();
    fs::write(cwd.path().join("-data").join("inside.txt"), "inside").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("file-explorer").unwrap();
    cmd.current_dir(cwd.path()).arg("-data");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ディレクトリ \"-data\" の探索を開始します..."));

    let reports = report_files(cwd.path());
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.contains("ファイル名: inside.txt\n"));
    assert!(!report.contains("エラーが発生しました: "));
}

#[test]
fn ignores_arguments_after_root() {
    let tree = tempdir().unwrap();
    fs::write(tree.path().join("a.txt"), "hello").unwrap();
    let cwd = tempdir().unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("file-explorer").unwrap();
    cmd.current_dir(cwd.path())
        .arg(tree.path())
        .arg("extra")
        .arg("--unknown");
    cmd.assert().success();

    let reports = report_files(cwd.path());
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.contains("ファイル名: a.txt\n"));
}
