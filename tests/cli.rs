//! End-to-end checks of the `seamcarve` binary: decode, carve, encode.

use assert_cmd::prelude::*;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn write_sample(path: &Path, width: u32, height: u32) {
    let sample = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 11 % 256) as u8, (y * 17 % 256) as u8, ((x + y) * 7 % 256) as u8])
    });
    sample.save(path).unwrap();
}

#[test]
fn carves_to_the_requested_width() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("carved.png");
    write_sample(&input, 24, 16);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "20"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (20, 16));
}

#[test]
fn carves_both_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("carved.png");
    write_sample(&input, 20, 18);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "16", "--height", "15"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (16, 15));
}

#[test]
fn refuses_to_upscale() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("carved.png");
    write_sample(&input, 10, 10);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("upscale"));

    assert!(!output.exists());
}
