//! Exit behaviour of the `hue-palette` binary.
#![cfg(feature = "native-bin")]

use std::process::{Command, Output};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

fn hue_palette(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hue-palette"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run hue-palette")
}

fn write_png(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("blue.png");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([0, 0, 255])))
        .save_with_format(&path, ImageFormat::Png)
        .expect("write png");
    path
}

#[test]
fn missing_arguments_print_usage_and_exit_zero() {
    let out = hue_palette(&[]);
    assert!(out.status.success(), "status: {:?}", out.status);
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn out_of_range_palette_size_exits_zero_without_output() {
    let dir = std::env::temp_dir().join(format!("hue-palette-k9-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let png = write_png(&dir);

    let out = hue_palette(&["9", png.to_str().unwrap()]);
    assert!(out.status.success(), "status: {:?}", out.status);
    assert!(out.stdout.is_empty());

    let out = hue_palette(&["many", png.to_str().unwrap()]);
    assert!(out.status.success(), "status: {:?}", out.status);
    assert!(out.stdout.is_empty());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_image_is_a_failure() {
    let out = hue_palette(&["3", "/definitely/not/here.png"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn valid_image_prints_palette_table() {
    let dir = std::env::temp_dir().join(format!("hue-palette-ok-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let png = write_png(&dir);

    let out = hue_palette(&["1", png.to_str().unwrap()]);
    assert!(out.status.success(), "status: {:?}", out.status);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("blue"), "{stdout}");
    assert!(stdout.contains("0000FF"), "{stdout}");

    std::fs::remove_dir_all(&dir).ok();
}
