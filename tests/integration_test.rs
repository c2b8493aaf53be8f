use assert_cmd::Command;
use assert_cmd::cargo;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn write_source_png(path: &Path, width: u32, height: u32) {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 100, 255])
    }));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    fs::write(path, buf.into_inner()).unwrap();
}

#[test]
fn test_icons_end_to_end() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_source_png(&source, 512, 512);

    let res_dir = dir.path().join("res");
    fs::create_dir_all(res_dir.join("mipmap-mdpi")).unwrap();
    fs::create_dir_all(res_dir.join("mipmap-xxxhdpi")).unwrap();
    // mipmap-hdpi, mipmap-xhdpi and mipmap-xxhdpi are deliberately missing

    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("icons").arg(&source).arg(&res_dir);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("ic_launcher.png"))
        .stderr(predicates::str::contains("mipmap-hdpi"));

    for (bucket, size) in [("mipmap-mdpi", 48u32), ("mipmap-xxxhdpi", 192u32)] {
        let square = res_dir.join(bucket).join("ic_launcher.png");
        let round = res_dir.join(bucket).join("ic_launcher_round.png");

        let square_bytes = fs::read(&square).unwrap();
        let round_bytes = fs::read(&round).unwrap();
        assert_eq!(square_bytes, round_bytes, "{} pair must be identical", bucket);

        let img = image::load_from_memory(&square_bytes).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }

    // Skipped buckets were not created
    assert!(!res_dir.join("mipmap-hdpi").exists());
    assert!(!res_dir.join("mipmap-xhdpi").exists());
}

#[test]
fn test_icons_missing_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let res_dir = dir.path().join("res");
    fs::create_dir_all(res_dir.join("mipmap-mdpi")).unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("icons")
        .arg(dir.path().join("missing.png"))
        .arg(&res_dir);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Source image not found"));

    let written = fs::read_dir(res_dir.join("mipmap-mdpi")).unwrap().count();
    assert_eq!(written, 0);
}

#[test]
fn test_icons_undecodable_source_fails() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("logo.png");
    fs::write(&source, b"not an image").unwrap();

    let res_dir = dir.path().join("res");
    fs::create_dir_all(res_dir.join("mipmap-mdpi")).unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("icons").arg(&source).arg(&res_dir);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to decode source image"));

    let written = fs::read_dir(res_dir.join("mipmap-mdpi")).unwrap().count();
    assert_eq!(written, 0);
}

// The scan tests fake the device bridge with a shell script so no device or
// SDK is needed, mirroring how the bridge is stubbed in unit tests.
#[cfg(unix)]
fn write_fake_adb(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let script = r#"#!/bin/sh
# $1=shell $2=pm|dumpsys ...
if [ "$2" = "pm" ]; then
    printf 'package:com.example.alpha\npackage:com.example.beta\npackage:com.example.gamma\n'
elif [ "$4" = "com.example.beta" ]; then
    printf '    versionCode=168\n    versionName=1.6.8\n'
else
    printf '    versionCode=200\n    versionName=2.0.0\n'
fi
"#;
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_scan_reports_first_match() {
    let dir = tempdir().unwrap();
    let adb = dir.path().join("adb");
    write_fake_adb(&adb);

    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("scan").arg("1.6.8").arg("--adb").arg(&adb);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("scanning 3 package(s)"))
        .stdout(predicates::str::contains("match com.example.beta"));
}

#[cfg(unix)]
#[test]
fn test_scan_no_match() {
    let dir = tempdir().unwrap();
    let adb = dir.path().join("adb");
    write_fake_adb(&adb);

    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("scan").arg("9.9.9").arg("--adb").arg(&adb);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("no match versionName=9.9.9"));
}

#[cfg(unix)]
#[test]
fn test_scan_adb_env_var() {
    let dir = tempdir().unwrap();
    let adb = dir.path().join("adb");
    write_fake_adb(&adb);

    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("scan").arg("1.6.8").env("ADB", &adb);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("match com.example.beta"));
}

#[test]
fn test_scan_unreachable_bridge_fails() {
    let mut cmd = Command::new(cargo::cargo_bin!("droidkit"));
    cmd.arg("scan")
        .arg("1.6.8")
        .arg("--adb")
        .arg("/nonexistent/device-bridge");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to run device bridge"));
}
