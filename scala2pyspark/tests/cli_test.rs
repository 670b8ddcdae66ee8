//! Tests for the command-line entry point.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use scala2pyspark::entry_point::run_with_args_to;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run(args: &[&str]) -> (i32, String) {
    let mut buffer = Vec::new();
    let code = run_with_args_to(args.iter().map(|&a| a.to_owned()).collect(), &mut buffer)
        .expect("run should not fail");
    (code, String::from_utf8(buffer).unwrap())
}

fn write_scala(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_single_file_prints_rendered_text() -> Result<()> {
    let dir = tempdir()?;
    let file = write_scala(dir.path(), "Job.scala", "val ok = true\n}\n");

    let (code, out) = run(&[&file]);
    assert_eq!(code, 0);
    assert_eq!(out, "ok = True\n");
    Ok(())
}

#[test]
fn test_multiple_files_get_headers() -> Result<()> {
    let dir = tempdir()?;
    let a = write_scala(dir.path(), "A.scala", "val a = 1\n");
    let b = write_scala(dir.path(), "B.scala", "val b = 2\n");

    let (code, out) = run(&[&a, &b]);
    assert_eq!(code, 0);
    assert!(out.contains("==>"));
    assert!(out.contains("A.scala"));
    assert!(out.contains("B.scala"));
    let a_pos = out.find("a = 1\n").unwrap();
    let b_pos = out.find("b = 2\n").unwrap();
    assert!(a_pos < b_pos);
    Ok(())
}

#[test]
fn test_output_dir_writes_files() -> Result<()> {
    let dir = tempdir()?;
    let file = write_scala(dir.path(), "Job.scala", "var n = null\n");
    let out_dir = dir.path().join("out");

    let (code, out) = run(&[&file, "--output-dir", out_dir.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(out.contains("Job.scala"));
    assert_eq!(fs::read_to_string(out_dir.join("Job.py"))?, "n = None\n");
    Ok(())
}

#[test]
fn test_custom_extension() -> Result<()> {
    let dir = tempdir()?;
    let file = write_scala(dir.path(), "Job.scala", "val n = 1\n");
    let out_dir = dir.path().join("out");

    let (code, _) = run(&[
        &file,
        "-o",
        out_dir.to_str().unwrap(),
        "--extension",
        "txt",
    ]);
    assert_eq!(code, 0);
    assert!(out_dir.join("Job.txt").exists());
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let dir = tempdir()?;
    let file = write_scala(dir.path(), "Job.scala", "package p\nval x = false\n");

    let (code, out) = run(&[&file, "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&out)?;
    let first = &value[0];
    assert_eq!(first["input_line_count"], 2);
    assert_eq!(first["lines"][0], "x = False\n");
    Ok(())
}

#[test]
fn test_directory_walk_respects_excludes() -> Result<()> {
    let dir = tempdir()?;
    write_scala(dir.path(), "src/Main.scala", "val main = 1\n");
    write_scala(dir.path(), "gen/Gen.scala", "val gen = 1\n");
    write_scala(dir.path(), "target/Out.scala", "val out = 1\n");

    let root = dir.path().to_string_lossy().into_owned();
    let (code, out) = run(&[&root, "--exclude-folders", "gen"]);
    assert_eq!(code, 0);
    assert_eq!(out, "main = 1\n");
    Ok(())
}

#[test]
fn test_config_file_sets_output_dir() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(".scala2pyspark.toml"),
        "[scala2pyspark]\noutput_dir = \"OUT\"\nextension = \"pyx\"\n",
    )?;
    let file = write_scala(dir.path(), "Job.scala", "val x = 1\n");
    let out_dir = dir.path().join("cli_out");

    // The command line overrides the configured directory but not the extension.
    let (code, _) = run(&[&file, "-o", out_dir.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(fs::read_to_string(out_dir.join("Job.pyx"))?, "x = 1\n");
    Ok(())
}

#[test]
fn test_missing_path_exits_with_error() {
    let (code, out) = run(&["/definitely/not/here/Job.scala"]);
    assert_eq!(code, 1);
    assert!(out.is_empty());
}

#[test]
fn test_no_scala_files_found() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("notes.txt"), "nothing\n")?;
    let root = dir.path().to_string_lossy().into_owned();

    let (code, out) = run(&[&root]);
    assert_eq!(code, 0);
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn test_stages_command_lists_all_stages() {
    let (code, out) = run(&["stages"]);
    assert_eq!(code, 0);
    for name in ["drop-package", "clean-signatures", "false-to-capital"] {
        assert!(out.contains(name), "missing {name}");
    }
}

#[test]
fn test_stages_command_json() -> Result<()> {
    let (code, out) = run(&["stages", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(value.as_array().map(Vec::len), Some(12));
    assert_eq!(value[7]["name"], "clean-signatures");
    assert_eq!(value[7]["position"], 8);
    Ok(())
}

#[test]
fn test_help_and_bad_flag() {
    let (code, out) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("Usage"));

    let (code, _) = run(&["--no-such-flag"]);
    assert_eq!(code, 1);
}

#[test]
fn test_binary_converts_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = write_scala(dir.path(), "Job.scala", "val df = spark.read.json(path)\n");

    let mut cmd = Command::cargo_bin("scala2pyspark-bin")?;
    cmd.arg(&file)
        .assert()
        .success()
        .stdout("df = spark.read.json(path)\n");
    Ok(())
}

#[test]
fn test_binary_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("scala2pyspark-bin")?;
    cmd.arg("/definitely/not/here.scala")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}
