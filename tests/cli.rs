// End-to-end runs of the seammark binary.

use assert_cmd::prelude::*;
use image::Pixel;
use predicates::prelude::*;
use std::process::Command;

const IMAGE_5X4: [u8; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

fn write_gray_png(path: &std::path::Path, width: u32, height: u32, data: &[u8]) {
    let buf: image::GrayImage = image::ImageBuffer::from_raw(width, height, data.to_vec()).unwrap();
    buf.save(path).unwrap();
}

#[test]
fn paints_one_seam_pixel_per_row_and_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("marked.png");
    write_gray_png(&input, 5, 4, &IMAGE_5X4);

    Command::cargo_bin("seammark")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("The seam size: 4"))
        .stdout(predicate::str::contains("The seam path: ("))
        .stdout(predicate::str::contains(" -> "));

    let marked = image::open(&output).unwrap().to_rgb();
    let red_pixels = marked
        .pixels()
        .filter(|p| p.channels() == &[255u8, 0, 0][..])
        .count();
    assert_eq!(red_pixels, 4);
}

#[test]
fn writes_a_normalized_energy_map_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("marked.png");
    let emap = dir.path().join("energy.png");
    write_gray_png(&input, 5, 4, &IMAGE_5X4);

    Command::cargo_bin("seammark")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy-map")
        .arg(&emap)
        .assert()
        .success();

    let energy_map = image::open(&emap).unwrap().to_luma();
    assert_eq!(energy_map.dimensions(), (5, 4));
    // The grid's maximum always normalizes to full white.
    assert!(energy_map.pixels().any(|p| p.channels() == &[255u8][..]));
}

#[test]
fn unreadable_input_aborts_with_an_error() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("seammark")
        .unwrap()
        .arg(dir.path().join("missing.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read image"));
}

#[test]
fn one_pixel_wide_images_abort_before_computing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strip.png");
    let output = dir.path().join("out.png");
    write_gray_png(&input, 1, 4, &[1, 2, 3, 4]);

    Command::cargo_bin("seammark")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2x2"));

    assert!(!output.exists());
}
