//! End-to-end batch runs through the binary.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::path::Path;

use assert_cmd::Command;
use batch_crop_test_support::SyntheticImageBuilder;
use image::GenericImageView;
use predicates::prelude::*;

/// Mixed-directory fixture: a 200x200 jpg, a 100x100 png (partially
/// out of bounds for a 10..150 rectangle), and a non-image file.
fn scenario_dir() -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    let _ = SyntheticImageBuilder::write(
        temp.path(),
        "a.jpg",
        &SyntheticImageBuilder::two_tone(200, 200),
    );
    let _ = SyntheticImageBuilder::write(
        temp.path(),
        "b.png",
        &SyntheticImageBuilder::gradient(100, 100),
    );
    std::fs::write(temp.path().join("c.txt"), b"not an image").unwrap();
    temp
}

fn crop_cmd(input: &Path, output: &Path) -> Command {
    let mut cmd = Command::cargo_bin("batch-crop").unwrap();
    cmd.arg(input)
        .arg(output)
        .args(["--left", "10", "--top", "10", "--right", "150", "--bottom", "150"]);
    cmd
}

#[test]
fn test_scenario_outputs_and_messages() {
    let input = scenario_dir();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("cropped");

    crop_cmd(input.path(), &out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("처리 완료: a.jpg"))
        .stdout(predicate::str::contains("처리 완료: b.png"))
        .stdout(predicate::str::contains("총 2개 이미지 처리 완료"));

    let a = image::open(out_dir.join("a.jpg")).unwrap();
    assert_eq!((a.width(), a.height()), (140, 140));

    // Partially out-of-bounds rectangle still succeeds, padded.
    let b = image::open(out_dir.join("b.png")).unwrap();
    assert_eq!((b.width(), b.height()), (140, 140));

    // Extension filtering: the non-image never reaches the output.
    assert!(!out_dir.join("c.txt").exists());
}

#[test]
fn test_corrupt_file_reported_but_batch_completes() {
    let input = scenario_dir();
    let _ = SyntheticImageBuilder::write_corrupt(input.path(), "broken.jpg");
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("cropped");

    // Item failures never abort the batch and never fail the process.
    crop_cmd(input.path(), &out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("오류 발생 (이미지: broken.jpg)"))
        .stdout(predicate::str::contains("총 2개 이미지 처리 완료"));

    assert!(out_dir.join("a.jpg").exists());
    assert!(out_dir.join("b.png").exists());
    assert!(!out_dir.join("broken.jpg").exists());
}

#[test]
fn test_extensions_option_widens_set() {
    let input = scenario_dir();
    let _ = SyntheticImageBuilder::write(
        input.path(),
        "d.bmp",
        &SyntheticImageBuilder::solid(50, 50, 3, 3, 3),
    );
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("cropped");

    let mut cmd = crop_cmd(input.path(), &out_dir);
    cmd.args(["--extensions", ".jpg", ".bmp"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("총 2개"));

    assert!(out_dir.join("a.jpg").exists());
    assert!(out_dir.join("d.bmp").exists());
    // png was filtered out by the custom set.
    assert!(!out_dir.join("b.png").exists());
}

#[test]
fn test_quiet_suppresses_output() {
    let input = scenario_dir();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("cropped");

    let mut cmd = crop_cmd(input.path(), &out_dir);
    cmd.arg("--quiet");

    cmd.assert().success().stdout(predicate::str::is_empty());
    assert!(out_dir.join("a.jpg").exists());
}

#[test]
fn test_rerun_overwrites_previous_outputs() {
    let input = scenario_dir();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("cropped");

    crop_cmd(input.path(), &out_dir).assert().success();
    let first = std::fs::read(out_dir.join("a.jpg")).unwrap();

    crop_cmd(input.path(), &out_dir).assert().success();
    let second = std::fs::read(out_dir.join("a.jpg")).unwrap();

    // Same rectangle, same source: byte-identical output.
    assert_eq!(first, second);
}
