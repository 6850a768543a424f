//! File round trips through the image codecs.

use approx::assert_relative_eq;
use image::{ImageBuffer, Luma, Rgb};
use lupton_core::{Plane, Resampler, RgbImage8};
use lupton_io::{read_plane, write_rgb, FilterType, ImageResampler, IoError};
use tempfile::TempDir;

#[test]
fn grey16_png_keeps_raw_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("band.png");
    let buf: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(3, 2, vec![0, 1, 255, 256, 40000, 65535]).unwrap();
    buf.save(&path).unwrap();

    let plane = read_plane(&path).unwrap();
    assert_eq!(plane.shape(), (2, 3));
    assert_eq!(plane.as_slice(), &[0.0, 1.0, 255.0, 256.0, 40000.0, 65535.0]);
}

#[test]
fn grey8_png_keeps_raw_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("band.png");
    let buf: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(2, 1, vec![7, 250]).unwrap();
    buf.save(&path).unwrap();

    assert_eq!(read_plane(&path).unwrap().as_slice(), &[7.0, 250.0]);
}

#[test]
fn colour_input_is_reduced_to_unit_luma() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colour.png");
    let buf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
    buf.save(&path).unwrap();

    let plane = read_plane(&path).unwrap();
    assert_relative_eq!(plane.get(0, 0), 0.0);
    assert_relative_eq!(plane.get(1, 0), 1.0, epsilon = 1e-4);
}

#[test]
fn rgb_png_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.png");
    let rgb = RgbImage8::from_raw(2, 2, (0..12).map(|v| v * 20).collect()).unwrap();
    write_rgb(&path, &rgb).unwrap();

    let back = image::open(&path).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (2, 2));
    assert_eq!(back.as_raw().as_slice(), rgb.as_raw());
}

#[test]
fn rgb_tiff_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.tif");
    let rgb = RgbImage8::from_raw(1, 1, vec![10, 20, 30]).unwrap();
    write_rgb(&path, &rgb).unwrap();
    assert_eq!(image::open(&path).unwrap().to_rgb8().as_raw().as_slice(), &[10, 20, 30]);
}

#[test]
fn missing_directory_is_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out.png");
    let err = write_rgb(&path, &RgbImage8::new(1, 1)).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}

#[test]
fn resampler_preserves_large_values() {
    let data = (0..16).map(|i| 1000.0 + 100.0 * (i % 4) as f64).collect();
    let plane = Plane::from_vec(4, 4, data).unwrap();
    let out = ImageResampler::new(FilterType::Triangle).resample(&plane, 8, 8).unwrap();

    assert_eq!(out.shape(), (8, 8));
    let (lo, hi) = out.min_max().unwrap();
    assert!(lo >= 1000.0 - 1e-2);
    assert!(hi <= 1300.0 + 1e-2);
    assert!(hi > 1200.0);
}

#[test]
fn resampler_handles_nan() {
    let plane = Plane::from_vec(2, 1, vec![f64::NAN, 4.0]).unwrap();
    let out = ImageResampler::default().resample(&plane, 1, 1).unwrap();
    assert_relative_eq!(out.get(0, 0), 4.0);
}
